//! Rewrite command implementation

use super::{catalog, output};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Configuration for rewrite command
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    pub file: PathBuf,
    pub catalog: Option<PathBuf>,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Rewrite a query file and write the result
pub fn rewrite(config: RewriteConfig) -> Result<()> {
    let format: output::OutputFormat = match config.output_format.as_deref() {
        Some(format) => format.parse()?,
        None => output::OutputFormat::default(),
    };

    let catalog = catalog::load_catalog(config.catalog.as_deref())?;
    if config.verbose {
        eprintln!("Catalog fields: {}", catalog.len());
    }

    let json = fs::read_to_string(&config.file)
        .with_context(|| format!("Failed to read query file: {}", config.file.display()))?;
    if config.verbose {
        eprintln!("Loaded {} bytes from {}", json.len(), config.file.display());
    }

    let rewritten = crate::rewrite_json(&json, &catalog)
        .with_context(|| format!("Failed to rewrite query: {}", config.file.display()))?;

    output::print_output(&rewritten, format, config.output_file.as_deref())?;

    if config.verbose {
        eprintln!("{}", output::format_success("Rewrite completed"));
    }
    Ok(())
}
