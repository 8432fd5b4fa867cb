//! Query envelope

use crate::{FieldRef, Filter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A structured query
///
/// Only the breakout list and the filter tree are modeled. Every other key
/// (source table, aggregations, limits, ...) is kept in `extra` in its
/// original order and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Grouping keys, in grouping order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakout: Vec<FieldRef>,
    /// Root of the filter tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    /// Unmodeled query content
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a breakout
    pub fn with_breakout(mut self, field: FieldRef) -> Self {
        self.breakout.push(field);
        self
    }

    /// Set the filter
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Carry an unmodeled key
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
