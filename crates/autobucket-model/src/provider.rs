//! Metadata catalog trait

use autobucket_ast::FieldId;
use autobucket_diagnostics::{AB0101, AB0102, AB0103, AB0401, AB0404, AutoBucketError};
use autobucket_types::TypeInfo;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Trait for resolving field identifiers to type information
///
/// Lookups are batched: one call covers every identifier a query needs.
/// Identifiers the catalog does not know are left out of the result; that
/// is not an error.
pub trait MetadataCatalog: Send + Sync {
    /// Get base and semantic types for a set of fields
    fn lookup_type_info(
        &self,
        ids: &BTreeSet<FieldId>,
    ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError>;
}

impl<T: MetadataCatalog + ?Sized> MetadataCatalog for &T {
    fn lookup_type_info(
        &self,
        ids: &BTreeSet<FieldId>,
    ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError> {
        (**self).lookup_type_info(ids)
    }
}

impl<T: MetadataCatalog + ?Sized> MetadataCatalog for Arc<T> {
    fn lookup_type_info(
        &self,
        ids: &BTreeSet<FieldId>,
    ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError> {
        (**self).lookup_type_info(ids)
    }
}

impl<T: MetadataCatalog + ?Sized> MetadataCatalog for Box<T> {
    fn lookup_type_info(
        &self,
        ids: &BTreeSet<FieldId>,
    ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError> {
        (**self).lookup_type_info(ids)
    }
}

/// Metadata catalog error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Catalog file not found: {0}")]
    NotFound(String),

    #[error("Duplicate field id: {0}")]
    DuplicateField(FieldId),
}

impl From<CatalogError> for AutoBucketError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::Unavailable(_) => AutoBucketError::metadata(AB0101, message),
            CatalogError::ParseError(_) => AutoBucketError::metadata(AB0102, message),
            CatalogError::DuplicateField(_) => AutoBucketError::metadata(AB0103, message),
            CatalogError::IoError(_) => AutoBucketError::system(AB0401, message),
            CatalogError::NotFound(_) => AutoBucketError::system(AB0404, message),
        }
    }
}

/// Catalog that knows no fields
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl EmptyCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataCatalog for EmptyCatalog {
    fn lookup_type_info(
        &self,
        _ids: &BTreeSet<FieldId>,
    ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError> {
        Ok(HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_knows_nothing() {
        let ids: BTreeSet<FieldId> = [FieldId(1), FieldId(2)].into_iter().collect();
        let found = EmptyCatalog::new().lookup_type_info(&ids).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_catalog_error_codes() {
        let err: AutoBucketError = CatalogError::Unavailable("db down".into()).into();
        assert_eq!(err.code(), AB0101);
        assert!(err.code().is_metadata_error());

        let err: AutoBucketError = CatalogError::DuplicateField(FieldId(3)).into();
        assert_eq!(err.code(), AB0103);

        let err: AutoBucketError = CatalogError::NotFound("catalog.json".into()).into();
        assert_eq!(err.code(), AB0404);
        assert!(err.code().is_system_error());

        let err: AutoBucketError = CatalogError::IoError("permission denied".into()).into();
        assert_eq!(err.code(), AB0401);
    }

    #[test]
    fn test_blanket_impls() {
        let shared: Arc<dyn MetadataCatalog> = Arc::new(EmptyCatalog);
        let ids = BTreeSet::new();
        assert!(shared.lookup_type_info(&ids).unwrap().is_empty());

        let boxed: Box<dyn MetadataCatalog> = Box::new(EmptyCatalog);
        assert!(boxed.lookup_type_info(&ids).unwrap().is_empty());
    }
}
