//! Topography recipe parameters.

use serde::{Deserialize, Serialize};

/// Lattice cells span `REFERENCE_CELL_PIXELS` pixels when no frequency is given.
pub const REFERENCE_CELL_PIXELS: u32 = 128;

/// A color in hue-lightness-saturation space.
///
/// All components are fractions in `[0, 1]`; hue is measured in turns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HlsColor {
    /// Hue in turns.
    pub hue: f64,
    /// Lightness.
    pub lightness: f64,
    /// Saturation.
    pub saturation: f64,
}

impl HlsColor {
    /// Creates a new HLS color.
    pub const fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self {
            hue,
            lightness,
            saturation,
        }
    }

    /// Components in declaration order, paired with their field names.
    pub fn components(&self) -> [(&'static str, f64); 3] {
        [
            ("hue", self.hue),
            ("lightness", self.lightness),
            ("saturation", self.saturation),
        ]
    }
}

/// Parameters for the `texture.topography_v1` recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TopographyParams {
    /// Canvas side length in pixels.
    pub size: u32,
    /// Lattice side length.
    pub period: u32,
    /// Coordinate scale applied before lattice lookup.
    /// Defaults to `1 / (128 * period)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Output scale of the noise field.
    pub amplitude: f64,
    /// Number of discrete color bands.
    pub steps: u32,
    /// Start and end colors of the band ramp.
    pub colors: [HlsColor; 2],
}

impl TopographyParams {
    /// The frequency used for sampling, resolving the default.
    pub fn effective_frequency(&self) -> f64 {
        self.frequency
            .unwrap_or_else(|| 1.0 / (REFERENCE_CELL_PIXELS as f64 * self.period as f64))
    }
}

impl Default for TopographyParams {
    fn default() -> Self {
        Self {
            size: 1024,
            period: 7,
            frequency: None,
            amplitude: 1.0,
            steps: 7,
            colors: [
                HlsColor::new(5.0 / 7.0, 3.0 / 7.0, 1.0),
                HlsColor::new(3.0 / 7.0, 3.0 / 7.0, 1.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frequency() {
        let params = TopographyParams::default();
        assert_eq!(params.effective_frequency(), 1.0 / 896.0);
    }

    #[test]
    fn test_explicit_frequency() {
        let params = TopographyParams {
            frequency: Some(0.25),
            ..Default::default()
        };
        assert_eq!(params.effective_frequency(), 0.25);
    }

    #[test]
    fn test_frequency_omitted_when_default() {
        let json = serde_json::to_string(&TopographyParams::default()).unwrap();
        assert!(!json.contains("frequency"));
    }
}
