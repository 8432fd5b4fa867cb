//! Filter clause AST nodes

use crate::{FieldRef, RelativeAmount, TemporalUnit, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A filter expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    /// All sub-filters must hold
    And(Vec<Filter>),
    /// Any sub-filter must hold
    Or(Vec<Filter>),
    /// Negation
    Not(Box<Filter>),
    /// Equality or ordering comparison of a field against values
    Compare {
        op: CompareOp,
        field: FieldRef,
        values: Vec<Value>,
    },
    /// String matching (contains, starts-with, ...)
    StringMatch {
        op: StringMatchOp,
        field: FieldRef,
        value: Value,
        #[serde(default = "default_case_sensitive")]
        case_sensitive: bool,
    },
    /// Field is null
    IsNull(FieldRef),
    /// Field is not null
    NotNull(FieldRef),
    /// Field falls within the current or a relative period
    TimeInterval {
        field: FieldRef,
        amount: RelativeAmount,
        unit: TemporalUnit,
    },
    /// Saved segment
    Segment(u64),
    /// A clause this crate does not model, carried through verbatim
    #[serde(untagged)]
    Opaque(serde_json::Value),
}

fn default_case_sensitive() -> bool {
    true
}

impl Filter {
    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Or(filters)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }

    /// Comparison against a single value
    pub fn compare(op: CompareOp, field: FieldRef, value: impl Into<Value>) -> Self {
        Self::Compare {
            op,
            field,
            values: vec![value.into()],
        }
    }

    /// Equality against any of several values
    pub fn equals_any(field: FieldRef, values: Vec<Value>) -> Self {
        Self::Compare {
            op: CompareOp::Eq,
            field,
            values,
        }
    }

    /// Inclusive range check
    pub fn between(field: FieldRef, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Self::Compare {
            op: CompareOp::Between,
            field,
            values: vec![min.into(), max.into()],
        }
    }

    pub fn time_interval(field: FieldRef, amount: RelativeAmount, unit: TemporalUnit) -> Self {
        Self::TimeInterval {
            field,
            amount,
            unit,
        }
    }

    /// Check if this is `and`, `or` or `not`
    pub const fn is_compound(&self) -> bool {
        matches!(self, Self::And(_) | Self::Or(_) | Self::Not(_))
    }

    /// Get the clause keyword for this filter
    pub fn clause_name(&self) -> &str {
        match self {
            Self::And(_) => "and",
            Self::Or(_) => "or",
            Self::Not(_) => "not",
            Self::Compare { op, .. } => op.symbol(),
            Self::StringMatch { op, .. } => op.as_str(),
            Self::IsNull(_) => "is-null",
            Self::NotNull(_) => "not-null",
            Self::TimeInterval { .. } => "time-interval",
            Self::Segment(_) => "segment",
            Self::Opaque(_) => "opaque",
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "between")]
    Between,
}

impl CompareOp {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Between => "between",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// String matching operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringMatchOp {
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
}

impl StringMatchOp {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::DoesNotContain => "does-not-contain",
            Self::StartsWith => "starts-with",
            Self::EndsWith => "ends-with",
        }
    }
}
