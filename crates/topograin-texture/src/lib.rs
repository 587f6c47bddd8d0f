//! Topograin Texture Generation Backend
//!
//! This crate renders the two Topograin image families: a banded topography
//! map drawn from periodic value noise, and a pair of film-grain speckle
//! overlays. All output is byte-identical given the same seed and
//! parameters.
//!
//! # Features
//!
//! - **Hash generator**: byte substitution plus odd multiplications, state
//!   fed back as the next key
//! - **Value noise**: quintic interpolation over a lattice whose last row and
//!   column hold their own value at the edge
//! - **Banding**: `floor(value * steps)` into an evenly spaced HLS palette
//! - **Deterministic PNG**: fixed compression settings
//!
//! # Example
//!
//! ```no_run
//! use topograin_texture::generate::generate_topography;
//! use topograin_spec::recipe::TopographyParams;
//! use std::path::Path;
//!
//! let result = generate_topography(&TopographyParams::default(), 1).unwrap();
//! result.save(Path::new("topography.png")).unwrap();
//! ```
//!
//! # Determinism
//!
//! - Same params + same seed = byte-identical output
//! - Every pipeline owns its [`SlashRng`]; nothing is shared between runs
//! - Draws are normalized with correct rounding, so values match an exact
//!   `raw / (2^64 - 1)` quotient

pub mod canvas;
pub mod color;
pub mod generate;
pub mod noise;
pub mod png;
pub mod rng;
pub mod speckle;
pub mod topography;

// Re-export main types for convenience
pub use canvas::{Canvas, RgbCanvas, RgbaCanvas};
pub use color::{BandPalette, Color};
pub use generate::{
    generate_speckle, generate_topography, GenerateError, ImageResult, SpeckleResult,
};
pub use noise::{Noise2D, ValueLattice, ValueNoise};
pub use png::{EncodedPng, PngConfig, PngError};
pub use rng::SlashRng;
pub use speckle::{render_speckle, SpeckleOverlays};
pub use topography::{render_topography, TopographyError};
