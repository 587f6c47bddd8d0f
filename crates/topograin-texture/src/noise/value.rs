//! Value noise over a periodic lattice.
//!
//! The lattice is filled from the hash generator; the sampler blends the four
//! lattice values around a point with the quintic curve. At the last row or
//! column the "next" neighbor is the last index itself, not index 0, so the
//! field flattens along the lattice edge instead of wrapping into a torus.

use thiserror::Error;

use super::{quintic_lerp, Noise2D};
use crate::rng::SlashRng;

/// Errors from building a lattice out of caller-supplied values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    #[error("lattice period must be at least 1")]
    ZeroPeriod,

    #[error("lattice of period {period} needs {expected} values, got {actual}")]
    LengthMismatch {
        period: usize,
        expected: usize,
        actual: usize,
    },

    #[error("lattice value {value} at index {index} is outside [0, 1]")]
    OutOfRange { index: usize, value: f64 },
}

/// Square grid of anchor values, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLattice {
    period: usize,
    values: Vec<f64>,
}

impl ValueLattice {
    /// Fill a `period x period` lattice with `period^2` successive draws.
    ///
    /// Advances `rng` by exactly `period^2` steps. `period` must be positive.
    pub fn build(period: usize, rng: &mut SlashRng) -> Self {
        let values = (0..period * period).map(|_| rng.next_unit()).collect();
        Self { period, values }
    }

    /// Wrap existing anchor values.
    pub fn from_values(period: usize, values: Vec<f64>) -> Result<Self, LatticeError> {
        if period == 0 {
            return Err(LatticeError::ZeroPeriod);
        }
        let expected = period * period;
        if values.len() != expected {
            return Err(LatticeError::LengthMismatch {
                period,
                expected,
                actual: values.len(),
            });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(LatticeError::OutOfRange { index, value });
        }
        Ok(Self { period, values })
    }

    /// Side length.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.period + col]
    }

    /// All values, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The index one past `index`, held at the last index.
    #[inline]
    fn next_index(&self, index: usize) -> usize {
        if index == self.period - 1 {
            index
        } else {
            index + 1
        }
    }
}

/// Smooth scalar field sampled from a [`ValueLattice`].
#[derive(Debug, Clone)]
pub struct ValueNoise {
    lattice: ValueLattice,
    frequency: f64,
    amplitude: f64,
}

impl ValueNoise {
    /// Create a sampler with explicit frequency and amplitude.
    pub fn new(lattice: ValueLattice, frequency: f64, amplitude: f64) -> Self {
        Self {
            lattice,
            frequency,
            amplitude,
        }
    }

    /// Create a sampler where each lattice cell spans 128 pixels and the
    /// output lies in `[0, 1]`.
    pub fn with_reference_frequency(lattice: ValueLattice) -> Self {
        let frequency = 1.0 / (128.0 * lattice.period() as f64);
        Self::new(lattice, frequency, 1.0)
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &ValueLattice {
        &self.lattice
    }

    /// Coordinate scale.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Output scale.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl Noise2D for ValueNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let x = x * self.frequency;
        let y = y * self.frequency;

        let xi = x.floor();
        let yi = y.floor();

        let period = self.lattice.period() as i64;
        let xp = (xi as i64).rem_euclid(period) as usize;
        let yp = (yi as i64).rem_euclid(period) as usize;
        let xn = self.lattice.next_index(xp);
        let yn = self.lattice.next_index(yp);

        let oa = self.lattice.get(xp, yp);
        let ob = self.lattice.get(xp, yn);
        let oc = self.lattice.get(xn, yn);
        let od = self.lattice.get(xn, yp);

        let fx = x - xi;
        let fy = y - yi;

        let oad = quintic_lerp(oa, od, fx);
        let obc = quintic_lerp(ob, oc, fx);

        quintic_lerp(oad, obc, fy) * self.amplitude
    }
}
