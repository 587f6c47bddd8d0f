//! Main entry point for texture generation.
//!
//! This module provides the high-level API for turning recipe parameters into
//! encoded PNG images. Each pipeline builds its own generator from the seed,
//! so running one never shifts the draws of another.


use std::path::Path;

use thiserror::Error;

use topograin_spec::recipe::{SpeckleParams, TopographyParams};
use topograin_spec::BackendError;

use crate::canvas::{Canvas, RgbCanvas};
use crate::color::{BandPalette, Color};
use crate::noise::{ValueLattice, ValueNoise};
use crate::png::{self, EncodedPng, PngConfig, PngError};
use crate::rng::SlashRng;
use crate::speckle::render_speckle;
use crate::topography::{render_topography, TopographyError};

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Render error: {0}")]
    Render(#[from] TopographyError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Png(_) => "TEXTURE_001",
            GenerateError::Io(_) => "TEXTURE_002",
            GenerateError::InvalidParameter(_) => "TEXTURE_003",
            GenerateError::Render(_) => "TEXTURE_004",
        }
    }

    fn category(&self) -> &'static str {
        "texture"
    }
}

/// A single encoded image.
#[derive(Debug, Clone)]
pub struct ImageResult {
    /// PNG file bytes.
    pub data: Vec<u8>,
    /// Side length in pixels.
    pub size: u32,
    /// BLAKE3 hash of the PNG file.
    pub hash: String,
}

impl ImageResult {
    /// Write the PNG bytes to `path`.
    pub fn save(&self, path: &Path) -> Result<(), GenerateError> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

/// The pair of encoded grain overlays.
#[derive(Debug, Clone)]
pub struct SpeckleResult {
    /// Black grain, for light backgrounds.
    pub light: ImageResult,
    /// White grain, for dark backgrounds.
    pub dark: ImageResult,
}

/// Generate the banded topography map.
pub fn generate_topography(
    params: &TopographyParams,
    seed: u64,
) -> Result<ImageResult, GenerateError> {
    let canvas = render_topography_canvas(params, seed)?;
    encode(&canvas)
}

/// Render the topography map without encoding it.
pub fn render_topography_canvas(
    params: &TopographyParams,
    seed: u64,
) -> Result<RgbCanvas, GenerateError> {
    validate_topography(params)?;

    let mut rng = SlashRng::new(seed);
    let lattice = ValueLattice::build(params.period as usize, &mut rng);
    let noise = ValueNoise::new(lattice, params.effective_frequency(), params.amplitude);

    let [start, end] = params.colors;
    let palette = BandPalette::new(
        Color::from_hls(start.hue, start.lightness, start.saturation),
        Color::from_hls(end.hue, end.lightness, end.saturation),
        params.steps as usize,
    );

    Ok(render_topography(params.size, &noise, &palette)?)
}

/// Generate the light and dark grain overlays.
pub fn generate_speckle(params: &SpeckleParams, seed: u64) -> Result<SpeckleResult, GenerateError> {
    validate_size(params.size)?;
    if !(0.0..=1.0).contains(&params.opacity) {
        return Err(GenerateError::InvalidParameter(format!(
            "opacity must be in [0, 1], got {}",
            params.opacity
        )));
    }

    let mut rng = SlashRng::new(seed);
    let overlays = render_speckle(params.size, &mut rng, params.opacity);

    Ok(SpeckleResult {
        light: encode(&overlays.light)?,
        dark: encode(&overlays.dark)?,
    })
}

fn validate_size(size: u32) -> Result<(), GenerateError> {
    if size == 0 {
        return Err(GenerateError::InvalidParameter(
            "size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_topography(params: &TopographyParams) -> Result<(), GenerateError> {
    validate_size(params.size)?;
    if params.period == 0 {
        return Err(GenerateError::InvalidParameter(
            "period must be at least 1".to_string(),
        ));
    }
    if params.steps < 2 {
        return Err(GenerateError::InvalidParameter(format!(
            "steps must be at least 2, got {}",
            params.steps
        )));
    }
    let frequency = params.effective_frequency();
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(GenerateError::InvalidParameter(format!(
            "frequency must be positive and finite, got {}",
            frequency
        )));
    }
    if !params.amplitude.is_finite() || params.amplitude <= 0.0 {
        return Err(GenerateError::InvalidParameter(format!(
            "amplitude must be positive and finite, got {}",
            params.amplitude
        )));
    }
    Ok(())
}

fn encode<const C: usize>(canvas: &Canvas<C>) -> Result<ImageResult, GenerateError> {
    let EncodedPng { data, hash } = png::encode(canvas, &PngConfig::default())?;
    Ok(ImageResult {
        data,
        size: canvas.size(),
        hash,
    })
}
