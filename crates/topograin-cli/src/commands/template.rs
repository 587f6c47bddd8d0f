//! Template command implementation
//!
//! Emits the reference spec for a recipe so users have a starting point to
//! edit.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use topograin_spec::Spec;

/// Built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// Seven-band topography map
    Topography,
    /// Light and dark grain overlays
    Speckle,
}

impl TemplateKind {
    /// The reference spec for this preset.
    pub fn spec(self) -> Spec {
        match self {
            TemplateKind::Topography => Spec::reference_topography(),
            TemplateKind::Speckle => Spec::reference_speckle(),
        }
    }
}

/// Run the template command
///
/// # Arguments
/// * `kind` - Which preset to emit
/// * `output` - Destination file (default: print to stdout)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(kind: TemplateKind, output: Option<&str>) -> Result<ExitCode> {
    let mut json = kind
        .spec()
        .to_json_pretty()
        .context("Failed to serialize template")?;
    json.push('\n');

    match output {
        None => print!("{}", json),
        Some(path) => {
            let dest = Path::new(path);
            if dest.exists() {
                bail!("Destination already exists: {}", dest.display());
            }
            if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(dest, &json)
                .with_context(|| format!("Failed to write to {}", dest.display()))?;
            println!("{} Wrote template to: {}", "SUCCESS".green().bold(), path);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use topograin_spec::validate_spec;

    #[test]
    fn test_templates_validate() {
        for kind in [TemplateKind::Topography, TemplateKind::Speckle] {
            let result = validate_spec(&kind.spec());
            assert!(result.is_ok(), "{:?}: {:?}", kind, result.errors);
        }
    }

    #[test]
    fn test_run_writes_parseable_spec() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("grain.json");
        let code = run(TemplateKind::Speckle, Some(path.to_str().unwrap())).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let spec = Spec::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(spec, Spec::reference_speckle());
    }

    #[test]
    fn test_run_refuses_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("topo.json");
        fs::write(&path, "keep").unwrap();
        assert!(run(TemplateKind::Topography, Some(path.to_str().unwrap())).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    }
}
