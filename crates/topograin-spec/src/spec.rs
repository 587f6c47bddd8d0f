//! Main spec types.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::output::OutputSpec;
use crate::recipe::{Recipe, SpeckleParams, TopographyParams};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Seed used when a spec does not declare one.
pub const DEFAULT_SEED: u64 = 1;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// A Topograin spec.
///
/// Contract fields (id, seed, outputs) plus the recipe that drives
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spec {
    /// Schema version; must be 1 for v1 specs.
    pub spec_version: u32,

    /// Stable identifier for the asset.
    /// Format: `[a-z][a-z0-9_-]{2,63}`
    pub asset_id: String,

    /// Initial state of the hash generator.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Human-readable description of the asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Generation recipe.
    pub recipe: Recipe,

    /// Expected output artifacts.
    pub outputs: Vec<OutputSpec>,
}

impl Spec {
    /// Creates a new spec builder.
    pub fn builder(asset_id: impl Into<String>, recipe: Recipe) -> SpecBuilder {
        SpecBuilder::new(asset_id, recipe)
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the spec to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// The banded topography map at its default settings.
    pub fn reference_topography() -> Self {
        Spec::builder("topography", Recipe::Topography(TopographyParams::default()))
            .description("Seven-band value-noise topography map")
            .output(OutputSpec::primary("topography.png"))
            .build()
    }

    /// The paired grain overlays at their default settings.
    pub fn reference_speckle() -> Self {
        Spec::builder("background", Recipe::Speckle(SpeckleParams::default()))
            .description("Film-grain overlays for light and dark backgrounds")
            .output(OutputSpec::light_overlay("background-light.png"))
            .output(OutputSpec::dark_overlay("background-dark.png"))
            .build()
    }
}

/// Builder for [`Spec`].
#[derive(Debug, Clone)]
pub struct SpecBuilder {
    asset_id: String,
    seed: u64,
    description: Option<String>,
    recipe: Recipe,
    outputs: Vec<OutputSpec>,
}

impl SpecBuilder {
    /// Creates a new builder with the required fields.
    pub fn new(asset_id: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            asset_id: asset_id.into(),
            seed: DEFAULT_SEED,
            description: None,
            recipe,
            outputs: Vec::new(),
        }
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an output.
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Builds the spec.
    pub fn build(self) -> Spec {
        Spec {
            spec_version: SPEC_VERSION,
            asset_id: self.asset_id,
            seed: self.seed,
            description: self.description,
            recipe: self.recipe,
            outputs: self.outputs,
        }
    }
}
