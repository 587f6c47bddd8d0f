//! Speckle recipe parameters.

use serde::{Deserialize, Serialize};

/// Parameters for the `texture.speckle_v1` recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeckleParams {
    /// Canvas side length in pixels.
    pub size: u32,
    /// Peak alpha of a grain, as a fraction of full opacity.
    pub opacity: f64,
}

impl Default for SpeckleParams {
    fn default() -> Self {
        Self {
            size: 1024,
            opacity: 0.02,
        }
    }
}
