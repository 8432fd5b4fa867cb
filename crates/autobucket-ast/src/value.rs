//! Filter operand values

use crate::TemporalUnit;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DATE_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

/// A literal or relative value used as a filter operand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    /// String literal; a `yyyy-MM-dd` string is a date string
    String(String),
    /// A moment relative to now, e.g. `-1 :day` or `:current`
    RelativeDatetime {
        amount: RelativeAmount,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<TemporalUnit>,
    },
}

/// Offset of a relative datetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelativeAmount {
    /// The current moment
    Current,
    /// A signed number of units away from now
    Offset(i64),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Relative datetime `amount` units away from now
    pub fn relative(amount: i64, unit: TemporalUnit) -> Self {
        Self::RelativeDatetime {
            amount: RelativeAmount::Offset(amount),
            unit: Some(unit),
        }
    }

    /// Relative datetime for the current moment
    pub fn current() -> Self {
        Self::RelativeDatetime {
            amount: RelativeAmount::Current,
            unit: None,
        }
    }

    /// Check if this is a string of exactly the form `yyyy-MM-dd`
    pub fn is_date_string(&self) -> bool {
        matches!(self, Self::String(s) if DATE_STRING.is_match(s))
    }

    /// Check if this is a relative datetime
    pub fn is_relative_datetime(&self) -> bool {
        matches!(self, Self::RelativeDatetime { .. })
    }

    /// Check if comparing against this value is unaffected by day bucketing
    pub fn is_auto_bucketable(&self) -> bool {
        self.is_date_string() || self.is_relative_datetime()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
