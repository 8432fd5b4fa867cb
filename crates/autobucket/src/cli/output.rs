//! Output formatting utilities

use anyhow::{Context, Result};
use autobucket_diagnostics::{AutoBucketError, AB0402};
use colored::Colorize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    JsonPretty,
}

impl FromStr for OutputFormat {
    type Err = AutoBucketError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "json-pretty" => Ok(Self::JsonPretty),
            other => Err(AutoBucketError::system(
                AB0402,
                format!("Unknown output format: '{}'", other),
            )),
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stderr().is_terminal()),
    }
}

/// Format an error for display
///
/// Autobucket errors are shown as diagnostics with their code and help text.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.chain().find_map(|e| e.downcast_ref::<AutoBucketError>()) {
        Some(err) => err.to_diagnostic().render(),
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Format JSON value for output
pub fn format_json(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(value),
    }
    .context("Failed to serialize JSON")
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format and write a JSON value
pub fn print_output(value: &Value, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    let content = format_json(value, format)?;
    write_output(&content, output_file)
}
