//! Type info records and the date-like classifier

use crate::FieldType;
use serde::{Deserialize, Serialize};

/// Base and semantic type of a field, as known to the metadata catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    /// Underlying storage type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<FieldType>,
    /// Meaning overlay (e.g. `type/CreationTimestamp`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<FieldType>,
}

impl TypeInfo {
    /// Create type info from both types
    pub fn new(base_type: Option<FieldType>, semantic_type: Option<FieldType>) -> Self {
        Self {
            base_type,
            semantic_type,
        }
    }

    /// Type info that only knows the base type
    pub fn base(base_type: FieldType) -> Self {
        Self::new(Some(base_type), None)
    }

    /// Set the semantic type
    pub fn with_semantic(mut self, semantic_type: FieldType) -> Self {
        self.semantic_type = Some(semantic_type);
        self
    }

    /// True if either the base or the semantic type is a date or datetime
    pub fn is_date_like(&self) -> bool {
        [self.base_type, self.semantic_type]
            .into_iter()
            .flatten()
            .any(|t| t.is_date_like())
    }
}

/// Classify optional type info; missing info is never date-like
pub fn is_date_like(info: Option<&TypeInfo>) -> bool {
    info.is_some_and(TypeInfo::is_date_like)
}
