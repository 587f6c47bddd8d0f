//! Backend dispatch module
//!
//! Routes a validated spec to the texture pipeline named by its recipe and
//! writes the resulting images under the output root.

mod texture;

use std::fmt;
use std::fs;
use std::path::Path;

use topograin_spec::{BackendError, GenerationError, OutputKind, OutputResult, Recipe, Spec};

/// Errors that can occur during backend dispatch
#[derive(Debug)]
pub enum DispatchError {
    /// An output file or directory could not be written
    Io(String),
    /// The spec lacks an output the recipe needs
    MissingOutput(OutputKind),
    /// The backend execution failed
    Backend(GenerationError),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Io(msg) => write!(f, "Output error: {}", msg),
            DispatchError::MissingOutput(kind) => {
                write!(f, "Spec has no output of kind '{}'", kind)
            }
            DispatchError::Backend(err) => write!(f, "Backend error: {}", err),
        }
    }
}

impl std::error::Error for DispatchError {}

impl BackendError for DispatchError {
    fn code(&self) -> &'static str {
        match self {
            DispatchError::Io(_) => "DISPATCH_001",
            DispatchError::MissingOutput(_) => "DISPATCH_002",
            DispatchError::Backend(err) => err.code,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            DispatchError::Backend(err) => err.category,
            _ => "dispatch",
        }
    }
}

/// Dispatch generation to the appropriate backend
///
/// # Arguments
/// * `spec` - The validated spec to generate from
/// * `out_root` - The output root directory
///
/// # Returns
/// One output result per file written, in spec order
pub fn dispatch_generate(spec: &Spec, out_root: &Path) -> Result<Vec<OutputResult>, DispatchError> {
    fs::create_dir_all(out_root).map_err(|e| {
        DispatchError::Io(format!(
            "Failed to create output directory {}: {}",
            out_root.display(),
            e
        ))
    })?;

    match &spec.recipe {
        Recipe::Topography(params) => texture::generate_topography(spec, params, out_root),
        Recipe::Speckle(params) => texture::generate_speckle(spec, params, out_root),
    }
}

/// Write bytes to `out_root/rel_path`, creating parent directories.
pub(crate) fn write_output_bytes(
    out_root: &Path,
    rel_path: &str,
    bytes: &[u8],
) -> Result<(), DispatchError> {
    let output_path = out_root.join(rel_path);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DispatchError::Io(format!(
                "Failed to create output directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    fs::write(&output_path, bytes).map_err(|e| {
        DispatchError::Io(format!(
            "Failed to write output file {}: {}",
            output_path.display(),
            e
        ))
    })
}
