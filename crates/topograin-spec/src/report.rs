//! Generation reports.
//!
//! Every `generate` run leaves `<asset_id>.report.json` next to its images,
//! whether or not generation got as far as writing them. The report pins
//! the canonical spec hash and the BLAKE3 hash of each file written.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Diagnostic;
use crate::output::{OutputFormat, OutputKind};
use crate::spec::Spec;

/// Bumped whenever a field changes meaning.
pub const REPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub report_version: u32,
    /// Canonical spec hash, see [`crate::hash::canonical_spec_hash`].
    pub spec_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// `true` iff `errors` is empty.
    pub ok: bool,
    pub errors: Vec<ReportError>,
    pub warnings: Vec<ReportWarning>,
    /// In the order the recipe writes them.
    pub outputs: Vec<OutputResult>,
    pub duration_ms: u64,
    /// e.g. `topograin-texture v0.1.0`
    pub backend_version: String,
    /// `<arch>-<os>` of the machine that ran the generation.
    pub target_triple: String,
}

impl Report {
    pub fn builder(spec_hash: impl Into<String>, backend_version: impl Into<String>) -> ReportBuilder {
        ReportBuilder::new(spec_hash, backend_version)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Report file name for an asset.
    ///
    /// ```
    /// use topograin_spec::report::Report;
    ///
    /// assert_eq!(Report::filename("topography"), "topography.report.json");
    /// ```
    pub fn filename(asset_id: &str) -> String {
        format!("{asset_id}.report.json")
    }
}

/// A diagnostic flattened to strings for the report file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// `E0xx`, `W0xx`, or a backend code such as `TEXTURE_003`.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

pub type ReportError = ReportEntry;
pub type ReportWarning = ReportEntry;

impl ReportEntry {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }
}

impl<C: fmt::Display> From<&Diagnostic<C>> for ReportEntry {
    fn from(diagnostic: &Diagnostic<C>) -> Self {
        Self {
            code: diagnostic.code.to_string(),
            message: diagnostic.message.clone(),
            path: diagnostic.path.clone(),
        }
    }
}

/// One file written by a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputResult {
    pub kind: OutputKind,
    pub format: OutputFormat,
    /// Relative to the output root.
    pub path: PathBuf,
    /// BLAKE3 of the file bytes, lowercase hex.
    pub hash: String,
}

impl OutputResult {
    pub fn new(kind: OutputKind, format: OutputFormat, path: PathBuf, hash: String) -> Self {
        Self {
            kind,
            format,
            path,
            hash,
        }
    }
}

/// Accumulates a [`Report`] while a spec moves through validation and
/// generation.
///
/// ```
/// use topograin_spec::report::{ReportBuilder, ReportError};
///
/// let report = ReportBuilder::new("abc123", "topograin-texture v0.1.0")
///     .duration_ms(12)
///     .build();
/// assert!(report.ok);
///
/// let failed = ReportBuilder::new("abc123", "topograin-texture v0.1.0")
///     .error(ReportError::new("TEXTURE_001", "canvas too large"))
///     .build();
/// assert!(!failed.ok);
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new(spec_hash: impl Into<String>, backend_version: impl Into<String>) -> Self {
        Self {
            report: Report {
                report_version: REPORT_VERSION,
                spec_hash: spec_hash.into(),
                asset_id: None,
                recipe_kind: None,
                seed: None,
                ok: true,
                errors: Vec::new(),
                warnings: Vec::new(),
                outputs: Vec::new(),
                duration_ms: 0,
                backend_version: backend_version.into(),
                target_triple: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
            },
        }
    }

    /// Copies asset id, recipe kind and seed.
    pub fn spec_metadata(mut self, spec: &Spec) -> Self {
        self.report.asset_id = Some(spec.asset_id.clone());
        self.report.recipe_kind = Some(spec.recipe.kind().to_string());
        self.report.seed = Some(spec.seed);
        self
    }

    pub fn error(mut self, error: ReportError) -> Self {
        self.report.errors.push(error);
        self
    }

    pub fn validation_errors<C: fmt::Display>(mut self, errors: &[Diagnostic<C>]) -> Self {
        self.report.errors.extend(errors.iter().map(ReportEntry::from));
        self
    }

    pub fn validation_warnings<C: fmt::Display>(mut self, warnings: &[Diagnostic<C>]) -> Self {
        self.report.warnings.extend(warnings.iter().map(ReportEntry::from));
        self
    }

    pub fn output(mut self, output: OutputResult) -> Self {
        self.report.outputs.push(output);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.report.duration_ms = duration_ms;
        self
    }

    pub fn build(mut self) -> Report {
        self.report.ok = self.report.errors.is_empty();
        self.report
    }
}
