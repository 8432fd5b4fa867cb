//! Catalog loading for CLI commands

use anyhow::{Context, Result};
use autobucket_model::CatalogRegistry;
use std::path::Path;

/// Load the field catalog, or an empty one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<CatalogRegistry> {
    match path {
        Some(path) => CatalogRegistry::from_json_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display())),
        None => {
            log::warn!("no catalog given; field ids will not be bucketed");
            Ok(CatalogRegistry::new())
        }
    }
}
