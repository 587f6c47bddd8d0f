//! Generate command implementation
//!
//! Validates a spec, dispatches its recipe to the texture backend, writes the
//! PNG outputs, and records a report beside them.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use topograin_spec::{
    canonical_spec_hash, validate_spec, BackendError, OutputResult, Report, ReportBuilder,
    ReportError, Spec, ValidationResult,
};

use super::json_output::{
    print_json, GenerateOutput, GenerateResult, GeneratedFile, JsonError, JsonWarning,
    SpecSummary,
};
use super::reporting;
use crate::dispatch::{dispatch_generate, DispatchError};
use crate::input::{load_spec, LoadResult};

/// Backend identifier written into reports.
pub fn backend_version() -> String {
    format!("topograin-cli v{}", env!("CARGO_PKG_VERSION"))
}

/// Everything one generation run produced.
#[derive(Debug)]
pub struct GenerationOutcome {
    /// Validation diagnostics.
    pub validation: ValidationResult,
    /// Files written, or why dispatch failed. `None` when validation failed.
    pub dispatch: Option<Result<Vec<OutputResult>, DispatchError>>,
    /// The report that was written.
    pub report: Report,
    /// Where the report was written.
    pub report_path: PathBuf,
}

impl GenerationOutcome {
    /// Whether every output was written.
    pub fn succeeded(&self) -> bool {
        matches!(self.dispatch, Some(Ok(_)))
    }
}

/// Validate, generate, and write the report for one spec.
///
/// Validation failures and backend failures are recorded in the outcome and
/// the report; only I/O problems with the report itself are returned as
/// errors.
pub fn generate_spec(spec: &Spec, out_root: &Path) -> Result<GenerationOutcome> {
    generate_spec_named(spec, out_root, reporting::DEFAULT_REPORT_STEM)
}

/// [`generate_spec`], naming the report `<fallback_stem>.report.json` when
/// the asset id is rejected.
pub fn generate_spec_named(
    spec: &Spec,
    out_root: &Path,
    fallback_stem: &str,
) -> Result<GenerationOutcome> {
    let start = Instant::now();

    let spec_hash = canonical_spec_hash(spec).unwrap_or_else(|_| "unknown".to_string());
    let validation = validate_spec(spec);

    let mut builder = ReportBuilder::new(spec_hash, backend_version())
        .spec_metadata(spec)
        .validation_errors(&validation.errors)
        .validation_warnings(&validation.warnings);

    let dispatch = if validation.is_ok() {
        let result = dispatch_generate(spec, out_root);
        match &result {
            Ok(outputs) => {
                for output in outputs {
                    builder = builder.output(output.clone());
                }
            }
            Err(e) => {
                builder = builder.error(ReportError::new(e.code(), e.to_string()));
            }
        }
        Some(result)
    } else {
        None
    };

    let report = builder
        .duration_ms(start.elapsed().as_millis() as u64)
        .build();

    fs::create_dir_all(out_root)
        .with_context(|| format!("Failed to create output directory: {}", out_root.display()))?;
    let report_path = reporting::report_path(out_root, &spec.asset_id, fallback_stem);
    reporting::write_report(&report, &report_path)?;

    Ok(GenerationOutcome {
        validation,
        dispatch,
        report,
        report_path,
    })
}

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `out_root` - Output root directory (default: current directory)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 spec error, 2 generation error
pub fn run(spec_path: &str, out_root: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let out_root = out_root.unwrap_or(".");
    if json_output {
        run_json(spec_path, out_root)
    } else {
        run_human(spec_path, out_root)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(spec_path: &str, out_root: &str) -> Result<ExitCode> {
    println!("{} {}", "Generating from:".cyan().bold(), spec_path);
    println!("{} {}", "Output root:".cyan().bold(), out_root);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);
    println!(
        "{} {} (seed {})",
        "Recipe:".dimmed(),
        spec.recipe.kind(),
        spec.seed
    );

    let fallback = reporting::spec_file_stem(Path::new(spec_path));
    let outcome = generate_spec_named(&spec, Path::new(out_root), &fallback)?;

    reporting::print_validation_errors(&outcome.validation);
    reporting::print_validation_warnings(&outcome.validation);

    let code = match &outcome.dispatch {
        None => {
            println!(
                "\n{} Spec validation failed with {} error(s)",
                "FAILED".red().bold(),
                outcome.validation.errors.len()
            );
            ExitCode::from(1)
        }
        Some(Err(e)) => {
            println!(
                "\n{} [{}] {}",
                "FAILED".red().bold(),
                e.code().red(),
                e
            );
            ExitCode::from(2)
        }
        Some(Ok(outputs)) => {
            println!("\n{}", "Outputs:".cyan().bold());
            for output in outputs {
                println!(
                    "  {} {} ({})",
                    "+".green(),
                    output.path.display(),
                    &output.hash[..16]
                );
            }
            println!(
                "\n{} Generated {} file(s) in {}ms",
                "SUCCESS".green().bold(),
                outputs.len(),
                outcome.report.duration_ms
            );
            ExitCode::SUCCESS
        }
    };

    println!(
        "{} {}",
        "Report written to:".dimmed(),
        outcome.report_path.display()
    );
    Ok(code)
}

/// Run generate with machine-readable JSON output
fn run_json(spec_path: &str, out_root: &str) -> Result<ExitCode> {
    let LoadResult { spec, source_hash } = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&GenerateOutput::load_failure(&e, spec_path))?;
            return Ok(ExitCode::from(1));
        }
    };

    let fallback = reporting::spec_file_stem(Path::new(spec_path));
    let outcome = generate_spec_named(&spec, Path::new(out_root), &fallback)?;

    let mut errors: Vec<JsonError> = outcome.validation.errors.iter().map(JsonError::from).collect();
    let warnings = outcome.validation.warnings.iter().map(JsonWarning::from).collect();

    let (code, result) = match &outcome.dispatch {
        None => (ExitCode::from(1), None),
        Some(Err(e)) => {
            errors.push(JsonError::new(e.code(), e.to_string()));
            (ExitCode::from(2), None)
        }
        Some(Ok(outputs)) => {
            let result = GenerateResult {
                spec: SpecSummary::from(&spec),
                out_root: out_root.to_string(),
                outputs: outputs.iter().map(GeneratedFile::from).collect(),
                report_path: outcome.report_path.display().to_string(),
                duration_ms: outcome.report.duration_ms,
            };
            (ExitCode::SUCCESS, Some(result))
        }
    };

    let output = GenerateOutput {
        success: result.is_some(),
        errors,
        warnings,
        result,
        spec_hash: Some(outcome.report.spec_hash.clone()),
        source_hash: Some(source_hash),
    };
    print_json(&output)?;

    Ok(code)
}
