//! Color utilities for the topography palette.

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create a color from HLS values.
    /// - h: hue in turns (0-1)
    /// - l: lightness (0-1)
    /// - s: saturation (0-1)
    pub fn from_hls(h: f64, l: f64, s: f64) -> Self {
        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;

        Self::rgb(
            hls_channel(m1, m2, h + ONE_THIRD),
            hls_channel(m1, m2, h),
            hls_channel(m1, m2, h - ONE_THIRD),
        )
    }

    /// Convert to 8-bit RGB.
    ///
    /// Channels are scaled by 255 and truncated, not rounded.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Evenly spaced colors between two endpoints, one per band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPalette {
    colors: Vec<Color>,
}

impl BandPalette {
    /// Build `steps` colors from `start` to `end` inclusive.
    ///
    /// `steps` must be at least 2.
    pub fn new(start: Color, end: Color, steps: usize) -> Self {
        let divisor = (steps - 1) as f64;
        let delta = Color::rgb(
            (end.r - start.r) / divisor,
            (end.g - start.g) / divisor,
            (end.b - start.b) / divisor,
        );

        let colors = (0..steps)
            .map(|i| {
                let i = i as f64;
                Color::rgb(
                    i * delta.r + start.r,
                    i * delta.g + start.g,
                    i * delta.b + start.b,
                )
            })
            .collect();

        Self { colors }
    }

    /// Number of bands.
    pub fn steps(&self) -> usize {
        self.colors.len()
    }

    /// Color of band `index`. Panics when out of range.
    #[inline]
    pub fn band(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// Color of band `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// All band colors, first to last.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
