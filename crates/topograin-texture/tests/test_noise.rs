//! Property tests for the value-noise field and band quantization.
//!
//! These tests check continuity, output range, and band bounds for arbitrary
//! lattices and coordinates.

use proptest::prelude::*;

use topograin_texture::noise::{quintic, Noise2D, ValueLattice, ValueNoise};
use topograin_texture::rng::SlashRng;
use topograin_texture::topography::{band_index, render_band_indices};

fn reference_noise(seed: u64) -> ValueNoise {
    let mut rng = SlashRng::new(seed);
    ValueNoise::with_reference_frequency(ValueLattice::build(7, &mut rng))
}

/// Strategy for a lattice with caller-chosen anchors.
fn arbitrary_lattice() -> impl Strategy<Value = ValueLattice> {
    (1usize..6).prop_flat_map(|period| {
        prop::collection::vec(0.0f64..=1.0, period * period)
            .prop_map(move |values| ValueLattice::from_values(period, values).unwrap())
    })
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Two lattices built from the same seed sample identically.
#[test]
fn test_value_noise_determinism_across_instances() {
    let noise1 = reference_noise(1);
    let noise2 = reference_noise(1);

    for i in 0..100 {
        let x = i as f64 * 10.3;
        let y = i as f64 * 7.9;
        assert_eq!(
            noise1.sample(x, y),
            noise2.sample(x, y),
            "Two ValueNoise instances with same seed should produce identical results"
        );
    }
}

/// Different seeds give different lattices.
#[test]
fn test_value_noise_seed_variation() {
    let a = reference_noise(1);
    let b = reference_noise(2);
    assert_ne!(a.lattice().values(), b.lattice().values());
}

// ============================================================================
// Continuity Tests
// ============================================================================

proptest! {
    /// Sampled values stay within [0, amplitude] for anchors in [0, 1].
    #[test]
    fn sample_within_amplitude(
        lattice in arbitrary_lattice(),
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        amplitude in 0.01f64..=1.0,
    ) {
        let noise = ValueNoise::new(lattice, 1.0, amplitude);
        let v = noise.sample(x, y);
        prop_assert!(v >= -1e-12 && v <= amplitude + 1e-12, "value {} outside [0, {}]", v, amplitude);
    }

    /// Approaching a lattice line from above converges on the value at the line.
    #[test]
    fn sample_continuous_across_cell_boundaries(
        lattice in arbitrary_lattice(),
        xi in -20i32..20,
        y in 0.0f64..20.0,
    ) {
        let noise = ValueNoise::new(lattice, 1.0, 1.0);
        let at = noise.sample(xi as f64, y);
        let above = noise.sample(xi as f64 + 1e-9, y);
        prop_assert!((at - above).abs() < 1e-6, "jump of {} at x = {}", (at - above).abs(), xi);
    }

    /// Inside one lattice period the field is continuous from below as well.
    /// Crossing from the last row back to row 0 is a seam, since the last
    /// row blends toward itself.
    #[test]
    fn sample_continuous_from_below_inside_period(
        lattice in arbitrary_lattice(),
        yi in 1usize..20,
        x in 0.0f64..20.0,
    ) {
        prop_assume!(yi % lattice.period() != 0);
        let noise = ValueNoise::new(lattice, 1.0, 1.0);
        let at = noise.sample(x, yi as f64);
        let below = noise.sample(x, yi as f64 - 1e-9);
        prop_assert!((at - below).abs() < 1e-6, "jump of {} at y = {}", (at - below).abs(), yi);
    }

    /// The smoothstep stays in [0, 1] and is monotonic.
    #[test]
    fn quintic_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quintic(lo) <= quintic(hi) + 1e-15);
        prop_assert!(quintic(lo) >= -1e-15 && quintic(lo) <= 1.0 + 1e-15);
    }
}

// ============================================================================
// Quantization Bounds
// ============================================================================

proptest! {
    /// Any value in [0, 1) lands inside the band range.
    #[test]
    fn band_index_in_range(v in 0.0f64..1.0, steps in 2usize..64) {
        prop_assert!(band_index(v, steps) < steps);
    }

    /// Unit-amplitude noise never overflows the bands, whatever the seed.
    #[test]
    fn reference_field_stays_in_bands(seed in any::<u64>(), steps in 2usize..16) {
        let noise = reference_noise(seed);
        prop_assert!(render_band_indices(32, &noise, steps).is_ok());
    }
}
