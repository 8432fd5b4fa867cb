//! End-to-end tests for the autobucket pass against a mocked catalog

use autobucket_ast::{
    Binning, CompareOp, FieldId, FieldRef, Filter, Query, TemporalUnit, Value,
};
use autobucket_model::{CatalogError, MetadataCatalog};
use autobucket_pass::*;
use autobucket_types::{FieldType, TypeInfo};
use mockall::mock;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::{BTreeSet, HashMap};

mock! {
    pub Catalog {}

    impl MetadataCatalog for Catalog {
        fn lookup_type_info(
            &self,
            ids: &BTreeSet<FieldId>,
        ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError>;
    }
}

/// Field 1 is a date, field 2 is text, field 3 an integer unix timestamp
fn known_types() -> HashMap<FieldId, TypeInfo> {
    HashMap::from([
        (FieldId(1), TypeInfo::base(FieldType::Date)),
        (FieldId(2), TypeInfo::base(FieldType::Text)),
        (
            FieldId(3),
            TypeInfo::base(FieldType::Integer).with_semantic(FieldType::UNIXTimestampSeconds),
        ),
    ])
}

fn catalog() -> MockCatalog {
    let mut catalog = MockCatalog::new();
    catalog.expect_lookup_type_info().returning(|ids| {
        let known = known_types();
        Ok(ids
            .iter()
            .filter_map(|id| known.get(id).map(|info| (*id, *info)))
            .collect())
    });
    catalog
}

fn no_calls() -> MockCatalog {
    let mut catalog = MockCatalog::new();
    catalog.expect_lookup_type_info().never();
    catalog
}

fn day(field: FieldRef) -> FieldRef {
    FieldRef::datetime(field, TemporalUnit::Day)
}

#[test]
fn test_breakout_on_date_field() {
    let query = Query::new()
        .with_breakout(FieldRef::id(1))
        .with_breakout(FieldRef::id(2));
    let result = auto_bucket(query, &catalog()).unwrap();
    assert_eq!(result.breakout, vec![day(FieldRef::id(1)), FieldRef::id(2)]);
}

#[test]
fn test_semantic_type_makes_field_date_like() {
    let query = Query::new().with_breakout(FieldRef::id(3));
    let result = auto_bucket(query, &catalog()).unwrap();
    assert_eq!(result.breakout, vec![day(FieldRef::id(3))]);
}

#[rstest]
#[case::less_than(CompareOp::Lt, Value::string("2020-01-05"), true)]
#[case::not_equal(CompareOp::NotEq, Value::string("2020-01-05"), true)]
#[case::relative(CompareOp::Eq, Value::relative(-1, TemporalUnit::Day), true)]
#[case::timestamp(CompareOp::Gt, Value::string("2020-01-05 10:30:00"), false)]
#[case::number(CompareOp::Gt, Value::Integer(5), false)]
fn test_filter_guard(#[case] op: CompareOp, #[case] value: Value, #[case] wrapped: bool) {
    let query = Query::new().with_filter(Filter::compare(op, FieldRef::id(1), value.clone()));

    let expected_field = if wrapped {
        day(FieldRef::id(1))
    } else {
        FieldRef::id(1)
    };
    let result = auto_bucket(query, &catalog()).unwrap();
    assert_eq!(
        result.filter,
        Some(Filter::compare(op, expected_field, value))
    );
}

#[test]
fn test_between_dates() {
    let query = Query::new().with_filter(Filter::between(
        FieldRef::id(1),
        "2020-01-01",
        "2020-01-31",
    ));
    let result = auto_bucket(query, &catalog()).unwrap();
    assert_eq!(
        result.filter,
        Some(Filter::between(day(FieldRef::id(1)), "2020-01-01", "2020-01-31"))
    );
}

#[rstest]
#[case::plain(FieldRef::id(2))]
#[case::joined(FieldRef::joined("People", FieldRef::id(2)))]
fn test_non_date_fields_untouched(#[case] field: FieldRef) {
    let query = Query::new()
        .with_breakout(field.clone())
        .with_filter(Filter::compare(CompareOp::Eq, field, "2020-01-05"));
    let result = auto_bucket(query.clone(), &catalog()).unwrap();
    assert_eq!(result, query);
}

#[test]
fn test_join_wrapped_from_outside() {
    let joined = FieldRef::joined("Orders", FieldRef::id(1));
    let query = Query::new()
        .with_breakout(joined.clone())
        .with_filter(Filter::compare(CompareOp::Ge, joined.clone(), "2020-01-05"));

    let result = auto_bucket(query, &catalog()).unwrap();

    assert_eq!(result.breakout, vec![day(joined.clone())]);
    assert_eq!(
        result.filter,
        Some(Filter::compare(CompareOp::Ge, day(joined), "2020-01-05"))
    );
}

#[test]
fn test_literal_inside_join_uses_own_type() {
    let joined = FieldRef::joined("Events", FieldRef::literal("happened_on", FieldType::Date));
    let query = Query::new().with_breakout(joined.clone());
    let result = auto_bucket(query, &no_calls()).unwrap();
    assert_eq!(result.breakout, vec![day(joined)]);
}

#[rstest]
#[case::binned(FieldRef::binned(FieldRef::id(1), Binning::NumBins(10)))]
#[case::bucketed(FieldRef::datetime(FieldRef::id(1), TemporalUnit::Month))]
#[case::fk(FieldRef::fk(FieldRef::id(2), FieldRef::id(1)))]
#[case::expression(FieldRef::expression("created"))]
fn test_qualified_fields_are_inert(#[case] field: FieldRef) {
    let query = Query::new().with_breakout(field);
    let result = auto_bucket(query.clone(), &no_calls()).unwrap();
    assert_eq!(result, query);
}

#[test]
fn test_no_candidates_means_no_lookup() {
    let query = Query::new()
        .with_breakout(day(FieldRef::id(1)))
        .with_filter(Filter::and(vec![
            Filter::NotNull(FieldRef::id(1)),
            Filter::compare(CompareOp::Gt, FieldRef::id(2), Value::Integer(3)),
        ]))
        .with_extra("source-table", serde_json::json!(12));

    let result = auto_bucket(query.clone(), &no_calls()).unwrap();
    assert_eq!(result, query);
}

#[test]
fn test_literals_only_means_no_lookup() {
    let query = Query::new()
        .with_breakout(FieldRef::literal("day", FieldType::Date))
        .with_breakout(FieldRef::literal("name", FieldType::Text));
    let result = auto_bucket(query, &no_calls()).unwrap();
    assert_eq!(
        result.breakout,
        vec![
            day(FieldRef::literal("day", FieldType::Date)),
            FieldRef::literal("name", FieldType::Text)
        ]
    );
}

#[test]
fn test_same_name_literals_classified_separately() {
    let as_text = FieldRef::literal("x", FieldType::Text);
    let as_date = FieldRef::literal("x", FieldType::Date);
    let query = Query::new()
        .with_breakout(as_text.clone())
        .with_filter(Filter::compare(CompareOp::Eq, as_date.clone(), "2020-01-05"));

    let result = auto_bucket(query, &no_calls()).unwrap();

    assert_eq!(result.breakout, vec![as_text]);
    assert_eq!(
        result.filter,
        Some(Filter::compare(CompareOp::Eq, day(as_date), "2020-01-05"))
    );
}

#[test]
fn test_single_batched_lookup() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_lookup_type_info()
        .withf(|ids| ids.iter().map(|id| id.0).collect::<Vec<_>>() == vec![1, 2, 3])
        .times(1)
        .returning(|_| Ok(known_types()));

    let query = Query::new()
        .with_breakout(FieldRef::id(2))
        .with_breakout(FieldRef::id(1))
        .with_filter(Filter::or(vec![
            Filter::compare(CompareOp::Eq, FieldRef::id(3), "2021-06-01"),
            Filter::compare(CompareOp::Eq, FieldRef::id(1), "2021-06-01"),
        ]));

    auto_bucket(query, &catalog).unwrap();
}

#[test]
fn test_guarded_filter_fields_are_not_looked_up() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_lookup_type_info()
        .withf(|ids| ids.len() == 1 && ids.contains(&FieldId(1)))
        .times(1)
        .returning(|_| Ok(known_types()));

    let query = Query::new()
        .with_breakout(FieldRef::id(1))
        .with_filter(Filter::IsNull(FieldRef::id(3)));

    let result = auto_bucket(query, &catalog).unwrap();
    assert_eq!(result.filter, Some(Filter::IsNull(FieldRef::id(3))));
}

#[test]
fn test_lookup_failure_is_fatal() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_lookup_type_info()
        .times(1)
        .returning(|_| Err(CatalogError::Unavailable("timeout".into())));

    let query = Query::new().with_breakout(FieldRef::id(1));
    let err = auto_bucket(query, &catalog).unwrap_err();
    assert_eq!(
        err,
        PassError::MetadataLookupFailed(CatalogError::Unavailable("timeout".into()))
    );

    let converted: autobucket_diagnostics::AutoBucketError = err.into();
    assert_eq!(converted.code(), autobucket_diagnostics::AB0100);
}

#[test]
fn test_extra_keys_untouched() {
    let query = Query::new()
        .with_extra("source-table", serde_json::json!(4))
        .with_extra("aggregation", serde_json::json!([["count"]]))
        .with_breakout(FieldRef::id(1));

    let result = auto_bucket(query.clone(), &catalog()).unwrap();
    assert_eq!(result.extra, query.extra);
}

#[test]
fn test_bound_pass() {
    let pass = AutoBucket::new(catalog());
    let result = pass.apply(Query::new().with_breakout(FieldRef::id(1))).unwrap();
    assert_eq!(result.breakout, vec![day(FieldRef::id(1))]);
}

#[test]
fn test_middleware_forwards_rewritten_query_and_args() {
    let process = auto_bucket_datetimes(catalog(), |query: Query, limit: usize| {
        (query.breakout, limit)
    });

    let (breakout, limit) = process(Query::new().with_breakout(FieldRef::id(1)), 25).unwrap();
    assert_eq!(breakout, vec![day(FieldRef::id(1))]);
    assert_eq!(limit, 25);
}

#[test]
fn test_middleware_skips_next_on_failure() {
    let mut failing = MockCatalog::new();
    failing
        .expect_lookup_type_info()
        .returning(|_| Err(CatalogError::Unavailable("boom".into())));

    let process = auto_bucket_datetimes(failing, |_query: Query, _: ()| -> usize {
        panic!("downstream must not run")
    });

    assert!(process(Query::new().with_breakout(FieldRef::id(1)), ()).is_err());
}
