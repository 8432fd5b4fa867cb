//! Temporal units and binning strategies

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity for temporal bucketing and extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemporalUnit {
    /// No truncation; the field's own resolution
    Default,
    Minute,
    MinuteOfHour,
    Hour,
    HourOfDay,
    Day,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    Week,
    WeekOfYear,
    Month,
    MonthOfYear,
    Quarter,
    QuarterOfYear,
    Year,
}

impl TemporalUnit {
    /// Get the keyword form used in query documents
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minute => "minute",
            Self::MinuteOfHour => "minute-of-hour",
            Self::Hour => "hour",
            Self::HourOfDay => "hour-of-day",
            Self::Day => "day",
            Self::DayOfWeek => "day-of-week",
            Self::DayOfMonth => "day-of-month",
            Self::DayOfYear => "day-of-year",
            Self::Week => "week",
            Self::WeekOfYear => "week-of-year",
            Self::Month => "month",
            Self::MonthOfYear => "month-of-year",
            Self::Quarter => "quarter",
            Self::QuarterOfYear => "quarter-of-year",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy for numeric binning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Binning {
    /// Let the engine pick the bin count
    Default,
    /// Fixed number of bins
    NumBins(u32),
    /// Fixed bin width
    BinWidth(Decimal),
}

impl fmt::Display for Binning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, ":default"),
            Self::NumBins(n) => write!(f, ":num-bins {}", n),
            Self::BinWidth(w) => write!(f, ":bin-width {}", w),
        }
    }
}
