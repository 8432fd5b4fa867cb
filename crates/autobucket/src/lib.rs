//! Automatic day bucketing for structured analytical queries
//!
//! This crate ties the autobucket workspace together:
//! - The query AST (`ast`) and field type taxonomy (`types`)
//! - The field metadata catalog interface and in-memory registry (`model`)
//! - The rewrite pass itself (`pass`)
//! - Error codes and diagnostics (`diagnostics`)
//!
//! # Example
//!
//! ```ignore
//! use autobucket::{CatalogRegistry, auto_bucket, parse_query};
//!
//! let catalog = CatalogRegistry::from_json_file("catalog.json")?;
//! let query = parse_query(r#"{"source-table": 1, "breakout": [{"field-id": 10}]}"#)?;
//! let rewritten = auto_bucket(query, &catalog)?;
//! ```

pub use autobucket_ast as ast;
pub use autobucket_diagnostics as diagnostics;
pub use autobucket_model as model;
pub use autobucket_pass as pass;
pub use autobucket_types as types;

pub use autobucket_ast::{FieldRef, Filter, Query};
pub use autobucket_diagnostics::{AutoBucketError, Result};
pub use autobucket_model::{CatalogRegistry, MetadataCatalog};
pub use autobucket_pass::{auto_bucket, auto_bucket_datetimes, AutoBucket, PassError};

use autobucket_diagnostics::{AB0001, AB0200};
use serde_json::Value;

/// Keys the encoder omits when empty but a caller may have sent explicitly
const CLAUSE_KEYS: [&str; 2] = ["breakout", "filter"];

fn malformed(e: serde_json::Error) -> AutoBucketError {
    AutoBucketError::query(AB0001, format!("Malformed query document: {}", e))
}

/// Parse a query document from JSON
pub fn parse_query(json: &str) -> Result<Query> {
    serde_json::from_str(json).map_err(malformed)
}

/// Parse, rewrite and re-encode a query document
///
/// An empty `breakout` or a `null` filter present in the input is written
/// back as it was.
pub fn rewrite_json<C: MetadataCatalog + ?Sized>(json: &str, catalog: &C) -> Result<Value> {
    let input: Value = serde_json::from_str(json).map_err(malformed)?;
    let query: Query = serde_json::from_value(input.clone()).map_err(malformed)?;
    let rewritten = auto_bucket(query, catalog)?;
    let mut output = serde_json::to_value(&rewritten)
        .map_err(|e| AutoBucketError::rewrite(AB0200, format!("Could not encode query: {}", e)))?;

    if let (Value::Object(input), Value::Object(output)) = (&input, &mut output) {
        for key in CLAUSE_KEYS {
            if let Some(original) = input.get(key) {
                output.entry(key).or_insert_with(|| original.clone());
            }
        }
    }
    Ok(output)
}

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
