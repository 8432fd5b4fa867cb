//! Errors raised by the autobucket pass

use autobucket_diagnostics::{AB0100, AutoBucketError};
use autobucket_model::CatalogError;
use thiserror::Error;

/// Result type for pass operations
pub type PassResult<T> = Result<T, PassError>;

/// Errors that can occur while rewriting a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    /// The catalog could not supply type info; the query is not rewritten
    #[error("Metadata lookup failed: {0}")]
    MetadataLookupFailed(#[from] CatalogError),
}

impl From<PassError> for AutoBucketError {
    fn from(err: PassError) -> Self {
        match err {
            PassError::MetadataLookupFailed(source) => {
                AutoBucketError::metadata(AB0100, format!("Metadata lookup failed: {}", source))
            }
        }
    }
}
