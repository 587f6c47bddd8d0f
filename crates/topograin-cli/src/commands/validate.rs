//! Validate command implementation
//!
//! Validates a spec file without generating anything.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use topograin_spec::{canonical_spec_hash, validate_spec, Spec, ValidationResult};

use super::json_output::{print_json, JsonError, JsonWarning, SpecSummary, ValidateOutput};
use super::reporting;
use crate::input::{load_spec, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);
    println!(
        "{} {} (seed {})",
        "Recipe:".dimmed(),
        spec.recipe.kind(),
        spec.seed
    );

    let result = validate_spec(&spec);

    reporting::print_validation_errors(&result);
    reporting::print_validation_warnings(&result);

    if result.is_ok() {
        println!("\n{} Spec is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(spec_path: &str) -> Result<ExitCode> {
    let LoadResult { spec, source_hash } = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&ValidateOutput::load_failure(&e, spec_path))?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_spec(&spec);
    let output = validate_output(&spec, &result, source_hash);
    print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn validate_output(spec: &Spec, result: &ValidationResult, source_hash: String) -> ValidateOutput {
    ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(JsonError::from).collect(),
        warnings: result.warnings.iter().map(JsonWarning::from).collect(),
        result: Some(SpecSummary::from(spec)),
        spec_hash: canonical_spec_hash(spec).ok(),
        source_hash: Some(source_hash),
    }
}
