//! Test fixture utilities for creating spec trees on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use topograin_spec::{OutputSpec, Recipe, Spec, SpeckleParams, TopographyParams};

/// A temporary directory holding a `specs/` tree and an `out/` root.
pub struct SpecTree {
    pub root: TempDir,
    pub specs_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl SpecTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let specs_dir = root.path().join("specs");
        let out_dir = root.path().join("out");
        fs::create_dir_all(&specs_dir).expect("Failed to create specs dir");
        Self {
            root,
            specs_dir,
            out_dir,
        }
    }

    /// The temporary root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `spec` as `specs/<relative>` and return its path.
    pub fn add_spec(&self, relative: &str, spec: &Spec) -> PathBuf {
        let json = spec.to_json_pretty().expect("Failed to serialize spec");
        self.add_raw(relative, &json)
    }

    /// Write arbitrary text as `specs/<relative>` and return its path.
    pub fn add_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.specs_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create spec subdirectory");
        }
        fs::write(&path, content).expect("Failed to write spec file");
        path
    }
}

impl Default for SpecTree {
    fn default() -> Self {
        Self::new()
    }
}

/// The reference topography recipe on a smaller canvas.
pub fn topography_spec(asset_id: &str, size: u32) -> Spec {
    Spec::builder(
        asset_id,
        Recipe::Topography(TopographyParams {
            size,
            ..Default::default()
        }),
    )
    .description("test topography")
    .output(OutputSpec::primary("topography.png"))
    .build()
}

/// The reference speckle recipe on a smaller canvas.
pub fn speckle_spec(asset_id: &str, size: u32) -> Spec {
    Spec::builder(
        asset_id,
        Recipe::Speckle(SpeckleParams {
            size,
            ..Default::default()
        }),
    )
    .description("test grain")
    .output(OutputSpec::light_overlay("light.png"))
    .output(OutputSpec::dark_overlay("dark.png"))
    .build()
}
