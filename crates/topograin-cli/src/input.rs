//! Reading spec files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use topograin_spec::Spec;

/// A parsed spec plus the hash of the bytes it came from.
#[derive(Debug)]
pub struct LoadResult {
    pub spec: Spec,
    /// BLAKE3 of the file content, lowercase hex. Differs from the
    /// canonical spec hash whenever formatting differs.
    pub source_hash: String,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} (expected .json)", describe_extension(.extension))]
    UnknownExtension { extension: Option<String> },

    #[error("JSON parse error: {0}")]
    JsonParse(#[source] serde_json::Error),
}

fn describe_extension(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!("unknown file extension '.{ext}'"),
        None => "file has no extension".to_string(),
    }
}

impl InputError {
    /// Stable `CLI_0xx` code for `--json` output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => "CLI_001",
            InputError::UnknownExtension { .. } => "CLI_002",
            InputError::JsonParse(_) => "CLI_003",
        }
    }
}

/// Load a spec from a `.json` file (extension matched case-insensitively).
///
/// Unknown fields anywhere in the document are a parse error.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use topograin_cli::input::load_spec;
///
/// let loaded = load_spec(Path::new("topography.json")).unwrap();
/// println!("Loaded {}", loaded.spec.asset_id);
/// ```
pub fn load_spec(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if extension.as_deref() != Some("json") {
        return Err(InputError::UnknownExtension { extension });
    }

    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let spec: Spec = serde_json::from_str(&content).map_err(InputError::JsonParse)?;

    Ok(LoadResult {
        spec,
        source_hash: blake3::hash(content.as_bytes()).to_hex().to_string(),
    })
}
