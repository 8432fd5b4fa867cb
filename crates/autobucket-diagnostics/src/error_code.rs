//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - AB0001-AB0099: Query input errors (malformed query documents)
//! - AB0100-AB0199: Metadata errors (field catalog)
//! - AB0200-AB0299: Rewrite errors
//! - AB0400-AB0499: System errors (I/O, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a query input error (0001-0099)
    pub const fn is_query_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a metadata error (0100-0199)
    pub const fn is_metadata_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a rewrite error (0200-0299)
    pub const fn is_rewrite_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AB{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Query input errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed query document"));

    // Metadata errors (0100-0199)
    map.insert(100, ErrorInfo::new("Metadata lookup failed")
        .with_help("The field catalog could not be read; the query was not rewritten"));
    map.insert(101, ErrorInfo::new("Catalog unavailable"));
    map.insert(102, ErrorInfo::new("Catalog load failed"));
    map.insert(103, ErrorInfo::new("Duplicate field id in catalog"));

    // Rewrite errors (0200-0299)
    map.insert(200, ErrorInfo::new("Rewrite failed"));
    map.insert(201, ErrorInfo::new("Implicit day bucketing")
        .with_help("Wrap the field in `datetime-field ... :day` to make the grouping explicit"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(402, ErrorInfo::new("Configuration error")
        .with_help("Supported output formats are `json` and `pretty`"));
    map.insert(404, ErrorInfo::new("File not found"));

    map
});

// Query input errors
pub const AB0001: ErrorCode = ErrorCode::new(1);

// Metadata errors
pub const AB0100: ErrorCode = ErrorCode::new(100);
pub const AB0101: ErrorCode = ErrorCode::new(101);
pub const AB0102: ErrorCode = ErrorCode::new(102);
pub const AB0103: ErrorCode = ErrorCode::new(103);

// Rewrite errors
pub const AB0200: ErrorCode = ErrorCode::new(200);
pub const AB0201: ErrorCode = ErrorCode::new(201);

// System errors
pub const AB0401: ErrorCode = ErrorCode::new(401);
pub const AB0402: ErrorCode = ErrorCode::new(402);
pub const AB0404: ErrorCode = ErrorCode::new(404);
