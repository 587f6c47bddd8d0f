//! Noise generation primitives.
//!
//! All noise functions are pure Rust and produce deterministic output given
//! the same lattice.

mod value;

pub use value::{LatticeError, ValueLattice, ValueNoise};

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivatives at both ends.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Blend `a` into `b` along the quintic curve.
///
/// The coefficients are folded into the endpoints. `lerp(a, b, quintic(t))`
/// is mathematically equal but rounds differently, which moves band edges.
#[inline]
pub fn quintic_lerp(a: f64, b: f64, t: f64) -> f64 {
    t * t * t * (t * (t * (6.0 * b - 6.0 * a) + (15.0 * a - 15.0 * b)) + (10.0 * b - 10.0 * a)) + a
}
