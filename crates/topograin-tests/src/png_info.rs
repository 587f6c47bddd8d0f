//! Reading written PNG files back for inspection.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A fully decoded 8-bit PNG.
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel (3 for RGB, 4 for RGBA).
    pub channels: usize,
    /// Row-major interleaved samples.
    pub pixels: Vec<u8>,
}

impl DecodedPng {
    /// Samples of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = (y as usize * self.width as usize + x as usize) * self.channels;
        &self.pixels[start..start + self.channels]
    }
}

/// Decode the PNG at `path`.
pub fn read_png(path: &Path) -> Result<DecodedPng, png::DecodingError> {
    let decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    let mut reader = decoder.read_info()?;
    let mut pixels = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels)?;
    pixels.truncate(info.buffer_size());

    Ok(DecodedPng {
        width: info.width,
        height: info.height,
        channels: info.color_type.samples(),
        pixels,
    })
}
