//! Check command implementation
//!
//! Reports which field references in each query rely on implicit day
//! bucketing, without writing anything.

use super::{catalog, output};
use anyhow::{Context, Result};
use autobucket_ast::FieldRef;
use autobucket_diagnostics::{AutoBucketError, Diagnostic, AB0201};
use autobucket_model::CatalogRegistry;
use autobucket_pass::{auto_bucket, find_unbucketed_fields};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for check command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub files: Vec<PathBuf>,
    pub catalog: Option<PathBuf>,
    /// Fail when any query relies on implicit bucketing
    pub strict: bool,
    pub verbose: bool,
}

/// Outcome of checking one query file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub file: PathBuf,
    /// Bare references the pass considered
    pub candidates: usize,
    /// References the pass would wrap
    pub bucketed: Vec<String>,
}

/// Check every query file and print a summary line per file
pub fn check(config: CheckConfig) -> Result<()> {
    if config.files.is_empty() {
        anyhow::bail!("No query files given");
    }
    let catalog = catalog::load_catalog(config.catalog.as_deref())?;

    let mut implicit = 0;
    for file in &config.files {
        let report = check_file(file, &catalog)?;
        if report.bucketed.is_empty() {
            eprintln!(
                "{}",
                output::format_success(&format!(
                    "{}: no implicit bucketing ({} candidates)",
                    file.display(),
                    report.candidates
                ))
            );
            continue;
        }

        implicit += 1;
        for field in &report.bucketed {
            eprintln!("{}", implicit_bucketing(file, field).render());
        }
        if config.verbose {
            eprintln!(
                "  {} of {} references bucketed by day",
                report.bucketed.len(),
                report.candidates
            );
        }
    }

    if config.strict && implicit > 0 {
        anyhow::bail!("{} of {} queries rely on implicit day bucketing", implicit, config.files.len());
    }
    Ok(())
}

/// Run the pass over one query file and report what it would change
pub fn check_file(file: &Path, catalog: &CatalogRegistry) -> Result<CheckReport> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("Failed to read query file: {}", file.display()))?;
    let checking = || format!("while checking {}", file.display());
    let query = crate::parse_query(&json).map_err(|e| e.with_context(checking()))?;
    let before = describe(&find_unbucketed_fields(&query));

    let rewritten = auto_bucket(query, catalog)
        .map_err(|e| AutoBucketError::from(e).with_context(checking()))?;
    let mut remaining = describe(&find_unbucketed_fields(&rewritten));

    // wrapping only removes candidates
    let candidates = before.len();
    let bucketed = before
        .into_iter()
        .filter(|field| match remaining.iter().position(|r| r == field) {
            Some(i) => {
                remaining.swap_remove(i);
                false
            }
            None => true,
        })
        .collect();

    Ok(CheckReport {
        file: file.to_path_buf(),
        candidates,
        bucketed,
    })
}

/// Warning for a reference that relies on implicit day bucketing
pub fn implicit_bucketing(file: &Path, field: &str) -> Diagnostic {
    let warning = Diagnostic::warning(
        AB0201,
        format!("{}: {} is bucketed by day", file.display(), field),
    );
    match AB0201.info().help {
        Some(help) => warning.with_help(help),
        None => warning,
    }
}

fn describe(fields: &[&FieldRef]) -> Vec<String> {
    fields.iter().map(ToString::to_string).collect()
}
