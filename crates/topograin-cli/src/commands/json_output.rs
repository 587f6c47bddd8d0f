//! `--json` output for `validate` and `generate`.
//!
//! Both commands print one [`CommandOutput`] document on stdout. Codes are
//! the spec's `E0xx`/`W0xx`, backend codes like `TEXTURE_004`, or the
//! `CLI_0xx` codes from [`InputError::code`].

use std::fmt;

use serde::{Deserialize, Serialize};
use topograin_spec::{Diagnostic, OutputResult, Spec};

use crate::input::InputError;

/// One error or warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonDiagnostic {
    pub code: String,
    pub message: String,
    /// Dotted path of the offending field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Spec file, for errors raised before the spec parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

pub type JsonError = JsonDiagnostic;
pub type JsonWarning = JsonDiagnostic;

impl JsonDiagnostic {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn from_input_error(err: &InputError, file: &str) -> Self {
        Self::new(err.code(), err.to_string()).with_file(file)
    }
}

impl<C: fmt::Display> From<&Diagnostic<C>> for JsonDiagnostic {
    fn from(diagnostic: &Diagnostic<C>) -> Self {
        Self {
            code: diagnostic.code.to_string(),
            message: diagnostic.message.clone(),
            path: diagnostic.path.clone(),
            file: None,
        }
    }
}

/// Which spec a result is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecSummary {
    pub asset_id: String,
    pub recipe_kind: String,
    pub seed: u64,
}

impl From<&Spec> for SpecSummary {
    fn from(spec: &Spec) -> Self {
        Self {
            asset_id: spec.asset_id.clone(),
            recipe_kind: spec.recipe.kind().to_string(),
            seed: spec.seed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    /// `primary`, `light_overlay` or `dark_overlay`
    pub kind: String,
    pub format: String,
    /// Relative to `out_root`.
    pub path: String,
    pub hash: String,
}

impl From<&OutputResult> for GeneratedFile {
    fn from(output: &OutputResult) -> Self {
        Self {
            kind: output.kind.to_string(),
            format: output.format.to_string(),
            path: output.path.display().to_string(),
            hash: output.hash.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    #[serde(flatten)]
    pub spec: SpecSummary,
    pub out_root: String,
    pub outputs: Vec<GeneratedFile>,
    pub report_path: String,
    pub duration_ms: u64,
}

/// The document a command prints. `result` is only present on success
/// (`validate` also fills it for invalid specs that parsed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<R> {
    pub success: bool,
    pub errors: Vec<JsonError>,
    pub warnings: Vec<JsonWarning>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,
    /// Canonical spec hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    /// Hash of the spec file as written on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

pub type ValidateOutput = CommandOutput<SpecSummary>;
pub type GenerateOutput = CommandOutput<GenerateResult>;

impl<R> CommandOutput<R> {
    /// The spec never loaded; the only error is the load error.
    pub fn load_failure(err: &InputError, file: &str) -> Self {
        Self {
            success: false,
            errors: vec![JsonDiagnostic::from_input_error(err, file)],
            warnings: Vec::new(),
            result: None,
            spec_hash: None,
            source_hash: None,
        }
    }
}

/// Pretty-prints `value` to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
