//! Report file helpers and shared diagnostic printing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use topograin_spec::validation::is_valid_asset_id;
use topograin_spec::{Report, ValidationResult};

/// Report stem used when neither the asset id nor the fallback is usable.
pub const DEFAULT_REPORT_STEM: &str = "spec";

/// File stem for a spec's report. The asset id is used only once it passes
/// the id pattern, so a rejected id never becomes part of a path.
pub(crate) fn report_stem<'a>(asset_id: &'a str, fallback: &'a str) -> &'a str {
    if is_valid_asset_id(asset_id) {
        asset_id
    } else if is_plain_file_stem(fallback) {
        fallback
    } else {
        DEFAULT_REPORT_STEM
    }
}

fn is_plain_file_stem(stem: &str) -> bool {
    !stem.is_empty()
        && !stem.contains(['/', '\\', ':'])
        && !stem.chars().all(|c| c == '.')
}

/// Stem of the spec file, for reports on specs with an unusable id.
pub(crate) fn spec_file_stem(spec_path: &Path) -> String {
    spec_path
        .file_stem()
        .map_or_else(|| DEFAULT_REPORT_STEM.to_string(), |s| s.to_string_lossy().into_owned())
}

/// Where the report goes under `out_root`. Always a direct child of
/// `out_root`.
pub(crate) fn report_path(out_root: &Path, asset_id: &str, fallback: &str) -> PathBuf {
    out_root.join(Report::filename(report_stem(asset_id, fallback)))
}

pub(crate) fn write_report(report: &Report, path: &Path) -> Result<()> {
    let json = report
        .to_json_pretty()
        .context("Failed to serialize report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write report to: {}", path.display()))?;
    Ok(())
}

pub(crate) fn print_validation_errors(result: &ValidationResult) {
    if result.errors.is_empty() {
        return;
    }
    println!("\n{}", "Errors:".red().bold());
    for error in &result.errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}] {}{}: {}",
            "x".red(),
            error.code.to_string().red(),
            error.code.summary(),
            path.dimmed(),
            error.message
        );
    }
}

pub(crate) fn print_validation_warnings(result: &ValidationResult) {
    if result.warnings.is_empty() {
        return;
    }
    println!("\n{}", "Warnings:".yellow().bold());
    for warning in &result.warnings {
        println!(
            "  {} [{}]: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            warning.message
        );
    }
}
