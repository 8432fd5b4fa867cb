//! Autobucket diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! autobucket crates: structured error codes, diagnostics, and the top-level
//! error type surfaced to callers of the pass.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for autobucket operations
pub type Result<T> = std::result::Result<T, AutoBucketError>;
