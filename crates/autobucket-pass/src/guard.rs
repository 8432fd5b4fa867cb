//! Eligibility guard
//!
//! Decides which nodes the pass must leave alone. A guarded node is
//! returned as-is and its subtree is never visited, so a field operand of
//! a guarded filter stays bare even when the field is date-like.

use autobucket_ast::{FieldRef, Filter, Value};

/// A node of the query tree the guard can be asked about
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Filter(&'a Filter),
    Field(&'a FieldRef),
}

/// Check whether `node` (and everything under it) must not be rewritten
pub fn must_not_rewrite(node: Node<'_>) -> bool {
    match node {
        Node::Filter(filter) => filter_is_inert(filter),
        // Anything already qualified (bucketed, binned, fk->, expression)
        // carries its own semantics.
        Node::Field(field) => !field.is_unqualified(),
    }
}

fn filter_is_inert(filter: &Filter) -> bool {
    match filter {
        Filter::And(_) | Filter::Or(_) | Filter::Not(_) => false,
        // Every CompareOp is one of =, !=, <, >, <=, >=, between. Day
        // bucketing only preserves meaning when each operand is a plain
        // date or a relative datetime.
        Filter::Compare { values, .. } => !values.iter().all(Value::is_auto_bucketable),
        Filter::StringMatch { .. }
        | Filter::IsNull(_)
        | Filter::NotNull(_)
        | Filter::TimeInterval { .. }
        | Filter::Segment(_)
        | Filter::Opaque(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autobucket_ast::{
        Binning, CompareOp, FieldType, RelativeAmount, StringMatchOp, TemporalUnit,
    };
    use rstest::rstest;

    fn field() -> FieldRef {
        FieldRef::id(1)
    }

    #[rstest]
    #[case(CompareOp::Eq)]
    #[case(CompareOp::NotEq)]
    #[case(CompareOp::Lt)]
    #[case(CompareOp::Gt)]
    #[case(CompareOp::Le)]
    #[case(CompareOp::Ge)]
    fn test_comparison_against_date_is_eligible(#[case] op: CompareOp) {
        let filter = Filter::compare(op, field(), "2020-01-05");
        assert!(!must_not_rewrite(Node::Filter(&filter)));
    }

    #[test]
    fn test_between_relative_datetimes_is_eligible() {
        let filter = Filter::between(
            field(),
            Value::relative(-30, TemporalUnit::Day),
            Value::current(),
        );
        assert!(!must_not_rewrite(Node::Filter(&filter)));
    }

    #[rstest]
    #[case(Value::string("2020-01-05 10:30:00"))]
    #[case(Value::string("yesterday"))]
    #[case(Value::Integer(20200105))]
    #[case(Value::Null)]
    fn test_comparison_against_other_values_is_inert(#[case] value: Value) {
        let filter = Filter::compare(CompareOp::Gt, field(), value);
        assert!(must_not_rewrite(Node::Filter(&filter)));
    }

    #[test]
    fn test_one_bad_operand_spoils_the_clause() {
        let filter = Filter::equals_any(
            field(),
            vec![Value::string("2020-01-05"), Value::string("2020-01-06 00:00")],
        );
        assert!(must_not_rewrite(Node::Filter(&filter)));
    }

    #[test]
    fn test_non_comparison_leaves_are_inert() {
        let leaves = vec![
            Filter::IsNull(field()),
            Filter::NotNull(field()),
            Filter::StringMatch {
                op: StringMatchOp::StartsWith,
                field: field(),
                value: Value::string("2020-01-05"),
                case_sensitive: true,
            },
            Filter::time_interval(field(), RelativeAmount::Current, TemporalUnit::Week),
            Filter::Segment(3),
            Filter::Opaque(serde_json::json!(["inside", 1, 2, 0, 0, 1, 1])),
        ];
        for leaf in &leaves {
            assert!(must_not_rewrite(Node::Filter(leaf)), "{} should be inert", leaf.clause_name());
        }
    }

    #[test]
    fn test_compound_filters_are_never_guarded() {
        let inert = Filter::IsNull(field());
        assert!(!must_not_rewrite(Node::Filter(&Filter::and(vec![inert.clone()]))));
        assert!(!must_not_rewrite(Node::Filter(&Filter::or(vec![inert.clone()]))));
        assert!(!must_not_rewrite(Node::Filter(&Filter::not(inert))));
    }

    #[test]
    fn test_field_kinds() {
        assert!(!must_not_rewrite(Node::Field(&FieldRef::id(1))));
        assert!(!must_not_rewrite(Node::Field(&FieldRef::literal("d", FieldType::Date))));
        assert!(!must_not_rewrite(Node::Field(&FieldRef::joined("J", FieldRef::id(1)))));

        assert!(must_not_rewrite(Node::Field(&FieldRef::id(1).bucket_by_day())));
        assert!(must_not_rewrite(Node::Field(&FieldRef::binned(FieldRef::id(1), Binning::NumBins(10)))));
        assert!(must_not_rewrite(Node::Field(&FieldRef::fk(FieldRef::id(1), FieldRef::id(2)))));
        assert!(must_not_rewrite(Node::Field(&FieldRef::expression("total"))));
    }
}
