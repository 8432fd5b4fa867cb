//! Pass driver and query-processor adapter

use crate::error::PassResult;
use crate::guard::{must_not_rewrite, Node};
use crate::resolver::resolve_type_info;
use crate::rewriter::Rewriter;
use autobucket_ast::{FieldRef, Filter, Query};
use autobucket_model::MetadataCatalog;
use log::debug;

/// Collect the unqualified references the pass could rewrite
///
/// The filter is scanned before the breakouts. Guarded subtrees are not
/// entered, and references under a join are reported by their inner
/// identity.
pub fn find_unbucketed_fields(query: &Query) -> Vec<&FieldRef> {
    let mut found = Vec::new();
    if let Some(filter) = &query.filter {
        collect_from_filter(filter, &mut found);
    }
    for field in &query.breakout {
        collect_from_field(field, &mut found);
    }
    found
}

fn collect_from_filter<'q>(filter: &'q Filter, found: &mut Vec<&'q FieldRef>) {
    if must_not_rewrite(Node::Filter(filter)) {
        return;
    }
    match filter {
        Filter::And(children) | Filter::Or(children) => {
            for child in children {
                collect_from_filter(child, found);
            }
        }
        Filter::Not(inner) => collect_from_filter(inner, found),
        Filter::Compare { field, .. } => collect_from_field(field, found),
        _ => {}
    }
}

fn collect_from_field<'q>(field: &'q FieldRef, found: &mut Vec<&'q FieldRef>) {
    if must_not_rewrite(Node::Field(field)) {
        return;
    }
    match field {
        FieldRef::Id(_) | FieldRef::Literal { .. } => found.push(field),
        FieldRef::Joined { field: inner, .. } => collect_from_field(inner, found),
        _ => {}
    }
}

/// Bucket unqualified date-like fields in `query` by day
///
/// Queries with no candidate references are returned unchanged without
/// consulting the catalog. A catalog failure aborts the pass and no partial
/// rewrite is returned.
pub fn auto_bucket<C>(query: Query, catalog: &C) -> PassResult<Query>
where
    C: MetadataCatalog + ?Sized,
{
    let candidates = find_unbucketed_fields(&query);
    if candidates.is_empty() {
        debug!("no unbucketed fields, skipping");
        return Ok(query);
    }
    debug!("found {} unbucketed field references", candidates.len());

    let types = resolve_type_info(&candidates, catalog)?;
    let rewriter = Rewriter::new(&types);

    let Query {
        breakout,
        filter,
        extra,
    } = query;
    let rewritten = Query {
        breakout: rewriter.rewrite_breakouts(breakout),
        filter: filter.map(|filter| rewriter.rewrite_filter(filter)),
        extra,
    };

    debug!("bucketed {} field references by day", rewriter.bucketed_count());
    Ok(rewritten)
}

/// Autobucket pass bound to a metadata catalog
#[derive(Debug, Clone)]
pub struct AutoBucket<C> {
    catalog: C,
}

impl<C: MetadataCatalog> AutoBucket<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Get the catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Rewrite one query
    pub fn apply(&self, query: Query) -> PassResult<Query> {
        auto_bucket(query, &self.catalog)
    }
}

/// Wrap a downstream query processor so it sees rewritten queries
///
/// The returned processor runs the pass and hands the result, together
/// with the untouched extra arguments, to `next`. If the pass fails `next`
/// is not called.
pub fn auto_bucket_datetimes<C, F, A, R>(catalog: C, next: F) -> impl Fn(Query, A) -> PassResult<R>
where
    C: MetadataCatalog,
    F: Fn(Query, A) -> R,
{
    move |query, args| {
        let query = auto_bucket(query, &catalog)?;
        Ok(next(query, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autobucket_ast::{CompareOp, FieldType, Value};
    use autobucket_model::EmptyCatalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_scanned_before_breakouts() {
        let query = Query::new()
            .with_breakout(FieldRef::id(7))
            .with_filter(Filter::and(vec![
                Filter::compare(CompareOp::Eq, FieldRef::id(3), "2020-01-05"),
                Filter::compare(CompareOp::Lt, FieldRef::joined("J", FieldRef::id(4)), "2020-01-05"),
            ]));

        let found = find_unbucketed_fields(&query);
        assert_eq!(found, vec![&FieldRef::id(3), &FieldRef::id(4), &FieldRef::id(7)]);
    }

    #[test]
    fn test_guarded_parts_are_not_candidates() {
        let query = Query::new()
            .with_breakout(FieldRef::id(1).bucket_by_day())
            .with_filter(Filter::and(vec![
                Filter::IsNull(FieldRef::id(2)),
                Filter::compare(CompareOp::Gt, FieldRef::id(3), Value::Integer(10)),
            ]));

        assert!(find_unbucketed_fields(&query).is_empty());
    }

    #[test]
    fn test_literal_candidates() {
        let lit = FieldRef::literal("created", FieldType::Date);
        let query = Query::new().with_breakout(lit.clone());
        assert_eq!(find_unbucketed_fields(&query), vec![&lit]);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let query = Query::new()
            .with_breakout(FieldRef::id(1))
            .with_extra("source-table", serde_json::json!(1));
        let result = AutoBucket::new(EmptyCatalog).apply(query.clone()).unwrap();
        assert_eq!(result, query);
    }
}
