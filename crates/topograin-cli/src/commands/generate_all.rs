//! Generate-all command implementation
//!
//! Generates every spec found under a directory tree. Each spec gets its own
//! `<out_root>/<asset_id>/` directory, and a summary of the whole run is
//! written to `<out_root>/generation_summary.json`. Specs whose asset id is
//! rejected get only `<out_root>/<file stem>.report.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use topograin_spec::validation::is_valid_asset_id;
use walkdir::WalkDir;

use super::generate::generate_spec_named;
use super::reporting::spec_file_stem;
use crate::input::load_spec;

/// Name of the summary file written into the output root.
pub const SUMMARY_FILENAME: &str = "generation_summary.json";

/// Result of generating a single spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecResult {
    /// Path to the spec file
    pub spec_path: String,
    /// Asset ID (the file stem when the spec could not be parsed)
    pub asset_id: String,
    /// Recipe kind
    pub recipe_kind: Option<String>,
    /// Whether generation succeeded
    pub success: bool,
    /// Error message if failed
    pub error: Option<String>,
    /// Canonical spec hash
    pub spec_hash: Option<String>,
    /// BLAKE3 hashes of the written files, in output order
    pub output_hashes: Vec<String>,
    /// Generation time in milliseconds
    pub duration_ms: u64,
}

/// Per-recipe counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Summary report for all generations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Total specs processed
    pub total_specs: usize,
    /// Successful generations
    pub successful: usize,
    /// Failed generations
    pub failed: usize,
    /// Total runtime in seconds
    pub runtime_seconds: f64,
    /// Results for each spec, in path order
    pub specs: Vec<SpecResult>,
    /// Counts keyed by recipe kind (`unknown` for unparseable specs)
    pub by_recipe: BTreeMap<String, RecipeSummary>,
}

impl GenerationSummary {
    fn from_results(results: Vec<SpecResult>, runtime_seconds: f64) -> Self {
        let mut by_recipe: BTreeMap<String, RecipeSummary> = BTreeMap::new();
        for result in &results {
            let kind = result.recipe_kind.as_deref().unwrap_or("unknown");
            let entry = by_recipe.entry(kind.to_string()).or_default();
            entry.total += 1;
            if result.success {
                entry.successful += 1;
            } else {
                entry.failed += 1;
            }
        }

        let successful = results.iter().filter(|r| r.success).count();
        Self {
            total_specs: results.len(),
            successful,
            failed: results.len() - successful,
            runtime_seconds,
            specs: results,
            by_recipe,
        }
    }
}

/// Collect `*.json` spec files under `spec_dir`, skipping reports, sorted by
/// path.
pub fn collect_spec_files(spec_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(spec_dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "json")
                && !path.file_name().is_some_and(|name| {
                    let name = name.to_string_lossy();
                    name.contains(".report.") || name == SUMMARY_FILENAME
                })
        })
        .collect();
    files.sort();
    files
}

fn banner(title: &str) {
    let rule = "=".repeat(38);
    println!("{}", rule.cyan());
    println!("{}", format!("  {title}").cyan());
    println!("{}", rule.cyan());
    println!();
}

/// Run the generate-all command
///
/// Specs are processed one at a time in path order. A spec that fails to
/// load, validate or render is counted and the run carries on.
///
/// # Returns
/// Exit code: 0 success, 1 if any spec failed
pub fn run(spec_dir: &str, out_root: Option<&str>, verbose: bool) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = Path::new(out_root.unwrap_or("./topograin-out"));
    let spec_dir_path = Path::new(spec_dir);
    if !spec_dir_path.is_dir() {
        anyhow::bail!("Spec directory does not exist: {}", spec_dir);
    }

    banner("Topograin Spec Generator");
    println!("{} {}", "Spec directory:".blue().bold(), spec_dir);
    println!("{} {}", "Output directory:".blue().bold(), out_root.display());
    println!();

    fs::create_dir_all(out_root)
        .with_context(|| format!("Failed to create output directory: {}", out_root.display()))?;

    let spec_files = collect_spec_files(spec_dir_path);
    println!(
        "{} Found {} spec files to process\n",
        "INFO".blue().bold(),
        spec_files.len()
    );

    let results: Vec<SpecResult> = spec_files
        .iter()
        .map(|path| {
            let result = process_spec(path, out_root);
            print_progress(&result, verbose);
            result
        })
        .collect();
    if !verbose {
        println!();
    }

    let summary = GenerationSummary::from_results(results, start.elapsed().as_secs_f64());
    print_summary(&summary);

    let summary_path = out_root.join(SUMMARY_FILENAME);
    let summary_json =
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    fs::write(&summary_path, summary_json)
        .with_context(|| format!("Failed to write summary: {}", summary_path.display()))?;

    println!("{} {}", "Outputs saved to:".blue().bold(), out_root.display());
    println!("{} {}", "Summary report:".blue().bold(), summary_path.display());

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_progress(result: &SpecResult, verbose: bool) {
    match (verbose, result.success) {
        (true, true) => println!(
            "  {} {} ({}ms)",
            "SUCCESS".green(),
            result.asset_id,
            result.duration_ms
        ),
        (true, false) => println!(
            "  {} {} - {}",
            "FAILED".red(),
            result.asset_id,
            result.error.as_deref().unwrap_or("unknown error")
        ),
        (false, true) => print!("{}", ".".green()),
        (false, false) => print!("{}", "x".red()),
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!();
    banner("Generation Summary");
    println!("{} {}", "Total specs processed:".blue().bold(), summary.total_specs);
    println!("{} {}", "Successful:".green().bold(), summary.successful);
    println!("{} {}", "Failed:".red().bold(), summary.failed);
    println!("{} {:.2}s\n", "Total runtime:".blue().bold(), summary.runtime_seconds);

    let (succeeded, failed): (Vec<&SpecResult>, Vec<&SpecResult>) =
        summary.specs.iter().partition(|r| r.success);

    if !succeeded.is_empty() {
        println!("{}", "Generated specs with BLAKE3 hashes:".green().bold());
        for result in succeeded {
            let hash = result.spec_hash.as_deref().unwrap_or("unknown");
            println!("  {}: {}", result.asset_id, hash);
        }
        println!();
    }

    if !failed.is_empty() {
        println!("{}", "Failed specs:".red().bold());
        for result in failed {
            println!(
                "  - {} ({}): {}",
                result.asset_id,
                result.spec_path,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
        println!();
    }
}

/// Load, validate and generate one spec into `<out_root>/<asset_id>/`.
/// Every problem is captured in the returned result.
fn process_spec(spec_path: &Path, out_root: &Path) -> SpecResult {
    let start = Instant::now();
    let mut result = SpecResult {
        spec_path: spec_path.display().to_string(),
        asset_id: spec_path
            .file_stem()
            .map_or_else(|| "unknown".to_string(), |s| s.to_string_lossy().into_owned()),
        recipe_kind: None,
        success: false,
        error: None,
        spec_hash: None,
        output_hashes: Vec::new(),
        duration_ms: 0,
    };

    let outcome = load_spec(spec_path).map_err(anyhow::Error::from).and_then(|loaded| {
        let spec = loaded.spec;
        result.asset_id = spec.asset_id.clone();
        result.recipe_kind = Some(spec.recipe.kind().to_string());
        // A rejected id must not become a directory name; its report lands
        // directly under the output root instead.
        let asset_dir = if is_valid_asset_id(&spec.asset_id) {
            out_root.join(&spec.asset_id)
        } else {
            out_root.to_path_buf()
        };
        generate_spec_named(&spec, &asset_dir, &spec_file_stem(spec_path))
    });

    match outcome {
        Err(e) => result.error = Some(format!("{:#}", e)),
        Ok(outcome) => {
            result.spec_hash = Some(outcome.report.spec_hash.clone());
            match outcome.dispatch {
                None => {
                    let messages: Vec<String> =
                        outcome.validation.errors.iter().map(|e| e.to_string()).collect();
                    result.error = Some(messages.join("; "));
                }
                Some(Err(e)) => result.error = Some(format!("Generation failed: {}", e)),
                Some(Ok(outputs)) => {
                    result.success = true;
                    result.output_hashes = outputs.into_iter().map(|o| o.hash).collect();
                }
            }
        }
    }

    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}
