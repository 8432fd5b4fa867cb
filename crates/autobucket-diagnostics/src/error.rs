//! Autobucket error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the query cannot be rewritten
    Error,
    /// Warning - the query was rewritten but something looked off
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional help text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render for a terminal, coloring the severity and code
    #[cfg(feature = "colored")]
    pub fn render(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => self.severity.to_string().red().bold(),
            Severity::Warning => self.severity.to_string().yellow().bold(),
        };
        let mut out = format!("{}[{}]: {}", severity, self.code.to_string().bold(), self.message);
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".cyan(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// Top-level autobucket error type
#[derive(Debug, Clone, Error)]
pub enum AutoBucketError {
    /// The query document could not be read as a query
    #[error("{code}: {message}")]
    Query {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// The field metadata catalog failed
    #[error("{code}: {message}")]
    Metadata {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// The rewrite itself failed
    #[error("{code}: {message}")]
    Rewrite {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// System error
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },
}

impl AutoBucketError {
    /// Create a query input error
    pub fn query(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Query {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a metadata error
    pub fn metadata(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Metadata {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a rewrite error
    pub fn rewrite(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Rewrite {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a system error
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Attach context to the error
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Query { context, .. }
            | Self::Metadata { context, .. }
            | Self::Rewrite { context, .. }
            | Self::System { context, .. } => *context = Some(ctx.into()),
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Query { code, .. }
            | Self::Metadata { code, .. }
            | Self::Rewrite { code, .. }
            | Self::System { code, .. } => *code,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, message, context) = match self {
            Self::Query { code, message, context }
            | Self::Metadata { code, message, context }
            | Self::Rewrite { code, message, context }
            | Self::System { code, message, context } => (*code, message, context),
        };

        let mut diag = Diagnostic::error(code, message.clone());
        if let Some(ctx) = context {
            diag = diag.with_help(ctx.clone());
        } else if let Some(help) = code.info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}
