//! Recipe types for the texture pipelines.
//!
//! Each recipe kind maps to one renderer in the texture backend. The recipe
//! is tagged by `kind` and carries its `params` object alongside.

pub mod speckle;
pub mod topography;

pub use speckle::*;
pub use topography::*;

use serde::{Deserialize, Serialize};

use crate::output::OutputKind;

/// Recipe specification containing kind and params.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum Recipe {
    /// `texture.topography_v1` - Banded value-noise color map.
    #[serde(rename = "texture.topography_v1")]
    Topography(TopographyParams),
    /// `texture.speckle_v1` - Paired light/dark grain overlays.
    #[serde(rename = "texture.speckle_v1")]
    Speckle(SpeckleParams),
}

impl Recipe {
    /// Returns the recipe kind as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            Recipe::Topography(_) => "texture.topography_v1",
            Recipe::Speckle(_) => "texture.speckle_v1",
        }
    }

    /// The outputs this recipe writes, in write order. A spec must declare
    /// each exactly once.
    pub fn output_kinds(&self) -> &'static [OutputKind] {
        match self {
            Recipe::Topography(_) => &[OutputKind::Primary],
            Recipe::Speckle(_) => &[OutputKind::LightOverlay, OutputKind::DarkOverlay],
        }
    }

    /// Side length of the canvas this recipe renders.
    pub fn size(&self) -> u32 {
        match self {
            Recipe::Topography(params) => params.size,
            Recipe::Speckle(params) => params.size,
        }
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
