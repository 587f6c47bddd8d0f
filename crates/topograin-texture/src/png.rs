//! PNG encoding with fixed settings.
//!
//! Same canvas and same [`PngConfig`] give the same bytes. Only IHDR, IDAT
//! and IEND are written; no time or text chunks.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::canvas::Canvas;

#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("no PNG color type has {0} channels")]
    UnsupportedChannels(usize),
}

/// Encoder settings. Pixels decode the same under any config; bytes only
/// match for the same config.
#[derive(Debug, Clone, Copy)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files, slower encode.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }
}

/// Encoded bytes plus their BLAKE3 hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPng {
    pub data: Vec<u8>,
    pub hash: String,
}

fn color_type(channels: usize) -> Result<ColorType, PngError> {
    match channels {
        1 => Ok(ColorType::Grayscale),
        2 => Ok(ColorType::GrayscaleAlpha),
        3 => Ok(ColorType::Rgb),
        4 => Ok(ColorType::Rgba),
        n => Err(PngError::UnsupportedChannels(n)),
    }
}

/// Encode `canvas` into `writer`; the color type follows the channel count.
pub fn write_png<W: Write, const C: usize>(
    canvas: &Canvas<C>,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if canvas.size() == 0 {
        return Err(PngError::InvalidDimensions(
            "canvas must be at least 1x1".into(),
        ));
    }

    let mut encoder = Encoder::new(writer, canvas.size(), canvas.size());
    encoder.set_color(color_type(C)?);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);
    encoder.write_header()?.write_image_data(&canvas.to_bytes())?;
    Ok(())
}

/// Encode in memory and hash the result.
pub fn encode<const C: usize>(canvas: &Canvas<C>, config: &PngConfig) -> Result<EncodedPng, PngError> {
    let mut data = Vec::new();
    write_png(canvas, &mut data, config)?;
    let hash = content_hash(&data);
    Ok(EncodedPng { data, hash })
}

/// Encode straight to a file, creating or truncating it.
pub fn write_file<const C: usize>(
    canvas: &Canvas<C>,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    write_png(canvas, std::io::BufWriter::new(file), config)
}

/// BLAKE3 of `data`, lowercase hex.
pub fn content_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
