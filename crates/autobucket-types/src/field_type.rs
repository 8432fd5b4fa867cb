//! Field type taxonomy
//!
//! Field types form a directed acyclic graph: every type except the root
//! names one or more parents, and "is-a" follows those links transitively.
//! Base types (storage) and semantic types (meaning overlays) share the
//! same graph, so `type/CreationTimestamp` is-a `type/DateTime`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace prefix used in the textual form of a field type
pub const TYPE_NAMESPACE: &str = "type";

/// A base or semantic field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[allow(clippy::upper_case_acronyms)]
pub enum FieldType {
    /// Root of the taxonomy (`type/*`)
    All,

    // === Base types ===
    Boolean,
    Number,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Text,
    UUID,
    Temporal,
    Date,
    Time,
    TimeWithTZ,
    DateTime,
    DateTimeWithTZ,
    DateTimeWithLocalTZ,
    DateTimeWithZoneOffset,
    DateTimeWithZoneID,
    Instant,
    Collection,

    // === Semantic types ===
    PK,
    FK,
    Category,
    Name,
    Email,
    URL,
    Coordinate,
    Latitude,
    Longitude,
    Quantity,
    Score,
    Currency,
    CreationTimestamp,
    CreationDate,
    CreationTime,
    UpdatedTimestamp,
    JoinTimestamp,
    CancelationTimestamp,
    DeletionTimestamp,
    Birthdate,
    UNIXTimestamp,
    UNIXTimestampSeconds,
    UNIXTimestampMilliseconds,
    ISO8601DateTimeString,
}

impl FieldType {
    /// Every type in the taxonomy
    pub const ALL_TYPES: &'static [FieldType] = &[
        Self::All,
        Self::Boolean,
        Self::Number,
        Self::Integer,
        Self::BigInteger,
        Self::Float,
        Self::Decimal,
        Self::Text,
        Self::UUID,
        Self::Temporal,
        Self::Date,
        Self::Time,
        Self::TimeWithTZ,
        Self::DateTime,
        Self::DateTimeWithTZ,
        Self::DateTimeWithLocalTZ,
        Self::DateTimeWithZoneOffset,
        Self::DateTimeWithZoneID,
        Self::Instant,
        Self::Collection,
        Self::PK,
        Self::FK,
        Self::Category,
        Self::Name,
        Self::Email,
        Self::URL,
        Self::Coordinate,
        Self::Latitude,
        Self::Longitude,
        Self::Quantity,
        Self::Score,
        Self::Currency,
        Self::CreationTimestamp,
        Self::CreationDate,
        Self::CreationTime,
        Self::UpdatedTimestamp,
        Self::JoinTimestamp,
        Self::CancelationTimestamp,
        Self::DeletionTimestamp,
        Self::Birthdate,
        Self::UNIXTimestamp,
        Self::UNIXTimestampSeconds,
        Self::UNIXTimestampMilliseconds,
        Self::ISO8601DateTimeString,
    ];

    /// Direct parents of this type in the taxonomy
    pub const fn parents(&self) -> &'static [FieldType] {
        use FieldType::*;
        match self {
            All => &[],
            Boolean | Number | Text | Temporal | Collection | PK | FK | Category => &[All],
            Integer | Float | Score => &[Number],
            BigInteger | Quantity => &[Integer],
            Decimal | Coordinate | Currency => &[Float],
            Latitude | Longitude => &[Coordinate],
            UUID | Email | URL => &[Text],
            Name => &[Category, Text],
            Date | Time | DateTime => &[Temporal],
            TimeWithTZ | CreationTime => &[Time],
            DateTimeWithTZ | DateTimeWithLocalTZ | Instant => &[DateTime],
            DateTimeWithZoneOffset | DateTimeWithZoneID => &[DateTimeWithTZ],
            CreationTimestamp
            | UpdatedTimestamp
            | JoinTimestamp
            | CancelationTimestamp
            | DeletionTimestamp => &[DateTime],
            CreationDate | Birthdate => &[Date],
            UNIXTimestamp => &[Integer, DateTime],
            UNIXTimestampSeconds | UNIXTimestampMilliseconds => &[UNIXTimestamp],
            ISO8601DateTimeString => &[Text, DateTime],
        }
    }

    /// Check whether this type is `ancestor` or descends from it
    pub fn is_a(&self, ancestor: FieldType) -> bool {
        *self == ancestor || self.parents().iter().any(|p| p.is_a(ancestor))
    }

    /// Check whether this type represents a calendar date or a point in time
    ///
    /// Time-of-day types are excluded even though they share the
    /// `type/Temporal` ancestor.
    pub fn is_date_like(&self) -> bool {
        !self.is_time_only() && (self.is_a(Self::Date) || self.is_a(Self::DateTime))
    }

    /// Check whether this type only carries a time of day
    pub fn is_time_only(&self) -> bool {
        self.is_a(Self::Time) && !self.is_a(Self::Date) && !self.is_a(Self::DateTime)
    }

    /// Check whether this type is temporal in any sense
    pub fn is_temporal(&self) -> bool {
        self.is_a(Self::Temporal)
    }

    /// Get the simple name (e.g. `DateTime`)
    pub const fn name(&self) -> &'static str {
        use FieldType::*;
        match self {
            All => "*",
            Boolean => "Boolean",
            Number => "Number",
            Integer => "Integer",
            BigInteger => "BigInteger",
            Float => "Float",
            Decimal => "Decimal",
            Text => "Text",
            UUID => "UUID",
            Temporal => "Temporal",
            Date => "Date",
            Time => "Time",
            TimeWithTZ => "TimeWithTZ",
            DateTime => "DateTime",
            DateTimeWithTZ => "DateTimeWithTZ",
            DateTimeWithLocalTZ => "DateTimeWithLocalTZ",
            DateTimeWithZoneOffset => "DateTimeWithZoneOffset",
            DateTimeWithZoneID => "DateTimeWithZoneID",
            Instant => "Instant",
            Collection => "Collection",
            PK => "PK",
            FK => "FK",
            Category => "Category",
            Name => "Name",
            Email => "Email",
            URL => "URL",
            Coordinate => "Coordinate",
            Latitude => "Latitude",
            Longitude => "Longitude",
            Quantity => "Quantity",
            Score => "Score",
            Currency => "Currency",
            CreationTimestamp => "CreationTimestamp",
            CreationDate => "CreationDate",
            CreationTime => "CreationTime",
            UpdatedTimestamp => "UpdatedTimestamp",
            JoinTimestamp => "JoinTimestamp",
            CancelationTimestamp => "CancelationTimestamp",
            DeletionTimestamp => "DeletionTimestamp",
            Birthdate => "Birthdate",
            UNIXTimestamp => "UNIXTimestamp",
            UNIXTimestampSeconds => "UNIXTimestampSeconds",
            UNIXTimestampMilliseconds => "UNIXTimestampMilliseconds",
            ISO8601DateTimeString => "ISO8601DateTimeString",
        }
    }

    /// Get the namespaced name (e.g. `type/DateTime`)
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", TYPE_NAMESPACE, self.name())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// Error returned when a string does not name a known field type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field type: {0}")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    /// Accepts `type/DateTime` and the keyword form `:type/DateTime`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .trim_start_matches(':')
            .strip_prefix(TYPE_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| UnknownFieldType(s.to_string()))?;

        Self::ALL_TYPES
            .iter()
            .find(|t| t.name() == name)
            .copied()
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.qualified_name()
    }
}

impl TryFrom<String> for FieldType {
    type Error = UnknownFieldType;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
