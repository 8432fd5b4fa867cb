//! In-memory catalog implementing MetadataCatalog

use crate::provider::{CatalogError, MetadataCatalog};
use autobucket_ast::FieldId;
use autobucket_types::{FieldType, TypeInfo};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

/// Catalog entry for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Catalog identifier
    pub id: FieldId,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Storage type
    #[serde(default)]
    pub base_type: Option<FieldType>,
    /// Meaning overlay
    #[serde(default)]
    pub semantic_type: Option<FieldType>,
}

impl FieldMetadata {
    pub fn new(id: impl Into<FieldId>, base_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: None,
            base_type: Some(base_type),
            semantic_type: None,
        }
    }

    pub fn with_semantic(mut self, semantic_type: FieldType) -> Self {
        self.semantic_type = Some(semantic_type);
        self
    }

    /// Type info as returned by catalog lookups
    pub fn type_info(&self) -> TypeInfo {
        TypeInfo::new(self.base_type, self.semantic_type)
    }
}

/// Field catalog held in memory
///
/// Cloning shares the underlying storage, so fields registered through one
/// handle are visible through every clone.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    fields: Arc<RwLock<IndexMap<FieldId, FieldMetadata>>>,
}

impl CatalogRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from field entries, rejecting duplicate ids
    pub fn from_fields(
        fields: impl IntoIterator<Item = FieldMetadata>,
    ) -> Result<Self, CatalogError> {
        let mut map = IndexMap::new();
        for field in fields {
            if map.contains_key(&field.id) {
                return Err(CatalogError::DuplicateField(field.id));
            }
            map.insert(field.id, field);
        }
        Ok(Self {
            fields: Arc::new(RwLock::new(map)),
        })
    }

    /// Load from a JSON array of field entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let fields: Vec<FieldMetadata> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_fields(fields)
    }

    /// Load from a JSON file at runtime
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::NotFound(path.display().to_string()),
            _ => CatalogError::IoError(format!("{}: {}", path.display(), e)),
        })?;
        let registry = Self::from_json(&json)?;
        log::debug!(
            "loaded {} catalog fields from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Add or replace a field, returning the previous entry
    pub fn register(&self, field: FieldMetadata) -> Option<FieldMetadata> {
        self.fields.write().insert(field.id, field)
    }

    /// Get a field entry
    pub fn get(&self, id: FieldId) -> Option<FieldMetadata> {
        self.fields.read().get(&id).cloned()
    }

    /// Number of registered fields
    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    /// Check if no fields are registered
    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }
}

impl MetadataCatalog for CatalogRegistry {
    fn lookup_type_info(
        &self,
        ids: &BTreeSet<FieldId>,
    ) -> Result<HashMap<FieldId, TypeInfo>, CatalogError> {
        let fields = self.fields.read();
        Ok(ids
            .iter()
            .filter_map(|id| fields.get(id).map(|f| (*id, f.type_info())))
            .collect())
    }
}
