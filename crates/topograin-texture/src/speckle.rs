//! Film-grain speckle overlays.
//!
//! One draw per pixel sets a faint alpha. The light overlay is black grain
//! for light backgrounds and the dark overlay is white grain for dark ones;
//! both share the same alpha plane.

use crate::canvas::RgbaCanvas;
use crate::rng::{SlashRng, TWO_POW_64};

/// Grain opacity of the reference overlays.
pub const DEFAULT_OPACITY: f64 = 0.02;

/// Paired grain overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeckleOverlays {
    /// Black grain, for light backgrounds.
    pub light: RgbaCanvas,
    /// White grain, for dark backgrounds.
    pub dark: RgbaCanvas,
}

/// Alpha for one raw draw: `trunc(255 * (opacity * raw / 2^64))`.
#[inline]
pub fn speckle_alpha(raw: u64, opacity: f64) -> u8 {
    (255.0 * (opacity * raw as f64 / TWO_POW_64)) as u8
}

/// Render both overlays from `size * size` draws.
///
/// Draws are consumed column by column: pixel `(x, y)` takes draw
/// `x * size + y`.
pub fn render_speckle(size: u32, rng: &mut SlashRng, opacity: f64) -> SpeckleOverlays {
    let mut light = RgbaCanvas::new(size);
    let mut dark = RgbaCanvas::new(size);

    for x in 0..size {
        for y in 0..size {
            let alpha = speckle_alpha(rng.next_raw(), opacity);
            light.set(x, y, [0, 0, 0, alpha]);
            dark.set(x, y, [255, 255, 255, alpha]);
        }
    }

    SpeckleOverlays { light, dark }
}
