//! Banded topography renderer.
//!
//! Each pixel samples the noise field at its own coordinates, quantizes the
//! value into one of `steps` bands, and takes that band's palette color.

use thiserror::Error;

use crate::canvas::RgbCanvas;
use crate::color::BandPalette;
use crate::noise::Noise2D;

/// Errors from rendering a topography map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopographyError {
    /// The field produced a value whose band does not exist.
    #[error("noise at ({x}, {y}) falls in band {index}, but only {steps} bands exist")]
    BandOutOfRange {
        x: u32,
        y: u32,
        index: usize,
        steps: usize,
    },
}

/// Band a noise value falls into: `floor(value * steps)`.
///
/// A value of exactly 1.0 maps to `steps`, one past the last band.
#[inline]
pub fn band_index(value: f64, steps: usize) -> usize {
    (value * steps as f64).floor() as usize
}

/// Band index of every pixel of a `size x size` canvas, row-major.
pub fn render_band_indices<N: Noise2D>(
    size: u32,
    noise: &N,
    steps: usize,
) -> Result<Vec<usize>, TopographyError> {
    let mut indices = Vec::with_capacity(size as usize * size as usize);
    for y in 0..size {
        for x in 0..size {
            let index = band_index(noise.sample(x as f64, y as f64), steps);
            if index >= steps {
                return Err(TopographyError::BandOutOfRange { x, y, index, steps });
            }
            indices.push(index);
        }
    }
    Ok(indices)
}

/// Render the colored map.
pub fn render_topography<N: Noise2D>(
    size: u32,
    noise: &N,
    palette: &BandPalette,
) -> Result<RgbCanvas, TopographyError> {
    let indices = render_band_indices(size, noise, palette.steps())?;

    let mut canvas = RgbCanvas::new(size);
    for (i, &index) in indices.iter().enumerate() {
        let x = (i % size as usize) as u32;
        let y = (i / size as usize) as u32;
        canvas.set(x, y, palette.band(index).to_rgb8());
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    struct Constant(f64);

    impl Noise2D for Constant {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    /// Increases along x only.
    struct RampX {
        width: f64,
    }

    impl Noise2D for RampX {
        fn sample(&self, x: f64, _y: f64) -> f64 {
            x / self.width
        }
    }

    fn gray_palette(steps: usize) -> BandPalette {
        BandPalette::new(Color::black(), Color::rgb(1.0, 1.0, 1.0), steps)
    }

    #[test]
    fn test_band_index() {
        assert_eq!(band_index(0.0, 7), 0);
        assert_eq!(band_index(0.6254747827060618, 7), 4);
        assert_eq!(band_index(0.999_999, 7), 6);
        assert_eq!(band_index(1.0, 7), 7);
    }

    #[test]
    fn test_value_of_one_is_rejected() {
        let err = render_band_indices(2, &Constant(1.0), 7).unwrap_err();
        assert_eq!(
            err,
            TopographyError::BandOutOfRange {
                x: 0,
                y: 0,
                index: 7,
                steps: 7
            }
        );
    }

    #[test]
    fn test_bands_follow_field() {
        let indices = render_band_indices(4, &RampX { width: 4.0 }, 2).unwrap();
        assert_eq!(indices, vec![0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn test_render_uses_palette_colors() {
        let canvas = render_topography(4, &RampX { width: 4.0 }, &gray_palette(2)).unwrap();
        assert_eq!(canvas.get(0, 3), [0, 0, 0]);
        assert_eq!(canvas.get(3, 0), [255, 255, 255]);
    }

    #[test]
    fn test_zero_size_renders_empty() {
        let canvas = render_topography(0, &Constant(0.5), &gray_palette(3)).unwrap();
        assert!(canvas.pixels().is_empty());
    }
}
