//! Field reference AST nodes

use crate::{Binning, TemporalUnit};
use autobucket_types::FieldType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a field in the metadata catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl From<u64> for FieldId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a field, possibly wrapped by a qualifying clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldRef {
    /// Field known to the metadata catalog
    #[serde(rename = "field-id")]
    Id(FieldId),
    /// Field named directly, carrying its own base type
    #[serde(rename = "field-literal")]
    Literal { name: String, base_type: FieldType },
    /// Field reached through a join
    #[serde(rename = "joined-field")]
    Joined { alias: String, field: Box<FieldRef> },
    /// Field bucketed by a temporal unit
    DatetimeField {
        field: Box<FieldRef>,
        unit: TemporalUnit,
    },
    /// Field binned numerically
    BinningStrategy {
        field: Box<FieldRef>,
        strategy: Binning,
    },
    /// Field reached through a foreign key
    #[serde(rename = "fk->")]
    ForeignKey {
        source: Box<FieldRef>,
        dest: Box<FieldRef>,
    },
    /// Reference to a named custom expression
    Expression(String),
}

impl FieldRef {
    pub fn id(id: impl Into<FieldId>) -> Self {
        Self::Id(id.into())
    }

    pub fn literal(name: impl Into<String>, base_type: FieldType) -> Self {
        Self::Literal {
            name: name.into(),
            base_type,
        }
    }

    pub fn joined(alias: impl Into<String>, field: FieldRef) -> Self {
        Self::Joined {
            alias: alias.into(),
            field: Box::new(field),
        }
    }

    pub fn datetime(field: FieldRef, unit: TemporalUnit) -> Self {
        Self::DatetimeField {
            field: Box::new(field),
            unit,
        }
    }

    pub fn binned(field: FieldRef, strategy: Binning) -> Self {
        Self::BinningStrategy {
            field: Box::new(field),
            strategy,
        }
    }

    pub fn fk(source: FieldRef, dest: FieldRef) -> Self {
        Self::ForeignKey {
            source: Box::new(source),
            dest: Box::new(dest),
        }
    }

    pub fn expression(name: impl Into<String>) -> Self {
        Self::Expression(name.into())
    }

    /// Bucket this reference by day
    pub fn bucket_by_day(self) -> Self {
        Self::datetime(self, TemporalUnit::Day)
    }

    /// Get the clause keyword for this reference
    pub const fn clause_name(&self) -> &'static str {
        match self {
            Self::Id(_) => "field-id",
            Self::Literal { .. } => "field-literal",
            Self::Joined { .. } => "joined-field",
            Self::DatetimeField { .. } => "datetime-field",
            Self::BinningStrategy { .. } => "binning-strategy",
            Self::ForeignKey { .. } => "fk->",
            Self::Expression(_) => "expression",
        }
    }

    /// Check if this is a bare or joined reference with no qualifying wrapper
    pub const fn is_unqualified(&self) -> bool {
        matches!(self, Self::Id(_) | Self::Literal { .. } | Self::Joined { .. })
    }

    /// Key used to look up type info, for bare references only
    pub fn key(&self) -> Option<FieldKey> {
        match self {
            Self::Id(id) => Some(FieldKey::Id(*id)),
            Self::Literal { name, base_type } => Some(FieldKey::Literal {
                name: name.clone(),
                base_type: *base_type,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "[:field-id {}]", id),
            Self::Literal { name, base_type } => {
                write!(f, "[:field-literal {:?} :{}]", name, base_type)
            }
            Self::Joined { alias, field } => write!(f, "[:joined-field {:?} {}]", alias, field),
            Self::DatetimeField { field, unit } => {
                write!(f, "[:datetime-field {} :{}]", field, unit)
            }
            Self::BinningStrategy { field, strategy } => {
                write!(f, "[:binning-strategy {} {}]", field, strategy)
            }
            Self::ForeignKey { source, dest } => write!(f, "[:fk-> {} {}]", source, dest),
            Self::Expression(name) => write!(f, "[:expression {:?}]", name),
        }
    }
}

/// Key identifying a bare field reference in a type-info mapping
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKey {
    /// Catalog identifier
    Id(FieldId),
    /// Literal field; two literals sharing a name may carry different types
    Literal { name: String, base_type: FieldType },
}
