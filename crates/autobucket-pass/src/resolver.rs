//! Type info resolution for candidate fields

use crate::error::PassResult;
use autobucket_ast::{FieldId, FieldKey, FieldRef};
use autobucket_model::MetadataCatalog;
use autobucket_types::TypeInfo;
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap};

/// Type info keyed by field identity
pub type TypeInfoMap = HashMap<FieldKey, TypeInfo>;

/// Resolve type info for every candidate reference
///
/// Literal-name references carry their own base type and never touch the
/// catalog. All identifier references are looked up in a single batched
/// call, which is skipped entirely when there are none. Identifiers the
/// catalog does not know are simply absent from the result.
pub fn resolve_type_info<C>(candidates: &[&FieldRef], catalog: &C) -> PassResult<TypeInfoMap>
where
    C: MetadataCatalog + ?Sized,
{
    let mut types = TypeInfoMap::new();
    let mut ids: BTreeSet<FieldId> = BTreeSet::new();

    for field in candidates {
        match field {
            FieldRef::Id(id) => {
                ids.insert(*id);
            }
            FieldRef::Literal { name, base_type } => {
                let key = FieldKey::Literal {
                    name: name.clone(),
                    base_type: *base_type,
                };
                types.insert(key, TypeInfo::base(*base_type));
            }
            _ => {}
        }
    }

    if ids.is_empty() {
        trace!("no field ids to look up");
        return Ok(types);
    }

    let found = catalog.lookup_type_info(&ids)?;
    debug!("catalog resolved {} of {} field ids", found.len(), ids.len());

    types.extend(
        found
            .into_iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(id, info)| (FieldKey::Id(id), info)),
    );
    Ok(types)
}
