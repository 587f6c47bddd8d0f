//! Error types for spec validation and processing.
//!
//! Validation never stops at the first problem: every finding becomes a
//! [`Diagnostic`] carrying a stable code (`E0xx` for errors, `W0xx` for
//! warnings) and, where one applies, the dotted JSON path of the field.

use std::fmt;

use thiserror::Error;

/// Stable error codes. The numbering leaves gaps so codes never get reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001
    UnsupportedSpecVersion,
    /// E002
    InvalidAssetId,
    /// E005
    NoOutputs,
    /// E007
    DuplicateOutputPath,
    /// E008: absolute, drive-lettered, backslashed or `..` paths
    UnsafeOutputPath,
    /// E009
    PathFormatMismatch,
    /// E012
    InvalidRecipeParams,
    /// E013: amplitude lets `floor(v * steps)` reach `steps`
    BandOverflow,
    /// E014
    BackendExecutionFailed,
    /// E015: outputs are not the set the recipe writes
    OutputValidationFailed,
}

impl ErrorCode {
    /// The code as written in reports, e.g. `"E013"`.
    pub fn code(&self) -> &'static str {
        self.entry().0
    }

    /// One-line description of the code.
    pub fn summary(&self) -> &'static str {
        self.entry().1
    }

    fn entry(&self) -> (&'static str, &'static str) {
        match self {
            ErrorCode::UnsupportedSpecVersion => ("E001", "unsupported spec_version"),
            ErrorCode::InvalidAssetId => ("E002", "invalid asset_id"),
            ErrorCode::NoOutputs => ("E005", "no outputs declared"),
            ErrorCode::DuplicateOutputPath => ("E007", "duplicate output path"),
            ErrorCode::UnsafeOutputPath => ("E008", "unsafe output path"),
            ErrorCode::PathFormatMismatch => ("E009", "extension does not match format"),
            ErrorCode::InvalidRecipeParams => ("E012", "invalid recipe params"),
            ErrorCode::BandOverflow => ("E013", "band index can overflow"),
            ErrorCode::BackendExecutionFailed => ("E014", "backend execution failed"),
            ErrorCode::OutputValidationFailed => ("E015", "outputs do not match recipe"),
        }
    }
}

/// Stable warning codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: canvas side above the warning threshold
    LargeCanvas,
    /// W002
    MissingDescription,
}

impl WarningCode {
    /// The code as written in reports, e.g. `"W001"`.
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LargeCanvas => "W001",
            WarningCode::MissingDescription => "W002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<C> {
    pub code: C,
    pub message: String,
    /// Dotted JSON path, e.g. `recipe.params.colors[1].hue`.
    pub path: Option<String>,
}

/// A finding that makes the spec unusable.
pub type ValidationError = Diagnostic<ErrorCode>;

/// A finding worth reporting that does not block generation.
pub type ValidationWarning = Diagnostic<WarningCode>;

impl<C> Diagnostic<C> {
    pub fn new(code: C, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(code: C, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl<C: fmt::Display> fmt::Display for Diagnostic<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

impl<C: fmt::Debug + fmt::Display> std::error::Error for Diagnostic<C> {}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("spec validation failed with {0} error(s)")]
    ValidationFailed(usize),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("canonicalization error: {0}")]
    Canonicalization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything validation found, in the order the checks ran.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// No errors were found. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Warnings on success, errors otherwise.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, SpecError> {
        if self.is_ok() {
            Ok(self.warnings)
        } else {
            Err(SpecError::ValidationFailed(self.errors.len()))
        }
    }
}

/// Implemented by every backend error so failures reach reports with a
/// stable code, without this crate depending on any backend.
pub trait BackendError: std::error::Error {
    /// Stable code, e.g. `"TEXTURE_004"`.
    fn code(&self) -> &'static str;

    /// Grouping for related codes, e.g. `"texture"`.
    fn category(&self) -> &'static str;
}

/// A backend failure with its code and category captured.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct GenerationError {
    pub code: &'static str,
    pub message: String,
    pub category: &'static str,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Capture `err`, keeping it as the source.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }
}
