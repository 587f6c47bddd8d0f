//! Deterministic hash generator.
//!
//! A byte substitution followed by two odd multiplications scrambles a 64-bit
//! key. Feeding each output back in as the next key yields the stream every
//! texture pipeline draws from. All texture generation MUST use this module
//! so that a seed reproduces the same images bit for bit.

use rand::{Error, RngCore, SeedableRng};

/// Byte permutation applied to each of the eight lanes of a key.
pub const SUBSTITUTION_TABLE: [u8; 256] = [
    0x9E, 0xA3, 0xC8, 0xEB, 0xDF, 0x2F, 0xFA, 0x23, 0x65, 0xBF, 0x05, 0x84, 0xA1, 0x47, 0x8E, 0x12,
    0x07, 0x85, 0xB0, 0xFD, 0xF6, 0xCF, 0x75, 0xE9, 0x8A, 0x5C, 0x4A, 0x10, 0xBB, 0x0A, 0x5B, 0xF9,
    0x5E, 0xD2, 0x50, 0xA7, 0x0D, 0x88, 0xCA, 0x96, 0x3E, 0x7E, 0xA0, 0xA2, 0xBA, 0x16, 0x6C, 0x7C,
    0x70, 0x15, 0xE8, 0x0E, 0x94, 0x7F, 0xDA, 0x8F, 0xD6, 0xDC, 0x27, 0x39, 0xBE, 0x90, 0x9F, 0x82,
    0x58, 0x02, 0x9A, 0xF2, 0x51, 0x18, 0x6F, 0x93, 0x42, 0x36, 0xEE, 0x1C, 0x25, 0x3F, 0x2D, 0x99,
    0xA9, 0x66, 0xD0, 0xF7, 0xE2, 0x30, 0x4F, 0x1B, 0xB7, 0x91, 0xB8, 0xE4, 0xB4, 0x59, 0x38, 0x14,
    0x0B, 0xAA, 0x28, 0x54, 0x98, 0xC6, 0x37, 0x67, 0xED, 0xDD, 0xB2, 0xAE, 0x08, 0x1D, 0x5A, 0x7A,
    0xCD, 0x9B, 0x0C, 0x43, 0x1E, 0x60, 0xF3, 0x2B, 0xFE, 0x1A, 0x2C, 0x0F, 0xC1, 0xFB, 0x3B, 0x04,
    0x4E, 0x81, 0x89, 0x1F, 0xCB, 0x01, 0xDB, 0x46, 0xB5, 0xEC, 0x9D, 0x48, 0xE1, 0x68, 0xC2, 0xDE,
    0x35, 0x00, 0xF1, 0x55, 0x83, 0xC0, 0x06, 0x09, 0x72, 0x2E, 0xF8, 0x5F, 0xF0, 0x79, 0x80, 0xF4,
    0xEF, 0x6B, 0x13, 0xC9, 0x19, 0x95, 0x74, 0x69, 0x22, 0xAF, 0x4C, 0xE0, 0x92, 0x33, 0x8B, 0x29,
    0x4B, 0xCC, 0x34, 0x17, 0xAB, 0x44, 0xC4, 0xA4, 0x32, 0x4D, 0xF5, 0xE5, 0x86, 0x6A, 0xFC, 0xD9,
    0x73, 0x21, 0xBC, 0x61, 0x3D, 0xE3, 0x56, 0x57, 0x52, 0x20, 0xA6, 0x11, 0x62, 0x5D, 0x3C, 0xE7,
    0x8C, 0xAC, 0x7D, 0xC3, 0xD4, 0xCE, 0x49, 0xB1, 0x03, 0x45, 0x3A, 0xC7, 0x76, 0x8D, 0xD1, 0xC5,
    0x6D, 0xAD, 0x7B, 0xD3, 0x87, 0xBD, 0x97, 0x6E, 0xD5, 0x53, 0x26, 0x71, 0xD8, 0x77, 0xB3, 0x63,
    0x24, 0x2A, 0x78, 0xFF, 0xB9, 0x40, 0xA8, 0xE6, 0x31, 0xEA, 0xA5, 0x41, 0x9C, 0xD7, 0xB6, 0x64,
];

/// Multiplier applied after byte substitution.
pub const MULTIPLIER_1: u64 = 0xA78A_CE24_B258_35F3;

/// Multiplier applied after folding the top byte into the bottom byte.
pub const MULTIPLIER_2: u64 = 0xA785_A2A2_D742_E537;

/// Initial generator state for every reference asset.
pub const DEFAULT_SEED: u64 = 1;

/// 2^64 as an exact f64.
pub(crate) const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Scramble a 64-bit key.
///
/// Pure and deterministic. All arithmetic wraps modulo 2^64.
#[inline]
pub fn slash(key: u64) -> u64 {
    let mut substituted = 0u64;
    for lane in 0..8 {
        let shift = lane * 8;
        let byte = ((key >> shift) & 0xFF) as usize;
        substituted |= (SUBSTITUTION_TABLE[byte] as u64) << shift;
    }

    let mut result = substituted.wrapping_mul(MULTIPLIER_1);
    result ^= result >> 56;
    result.wrapping_mul(MULTIPLIER_2)
}

/// Map a raw draw to `[0, 1]` as `raw / (2^64 - 1)`, correctly rounded.
///
/// `raw as f64 / 2^64` agrees with the exact quotient except when the bits
/// dropped by the conversion sit exactly at the halfway point. There the
/// exact quotient is a hair above the tie and must round up.
#[inline]
pub fn normalize(raw: u64) -> f64 {
    let bits = 64 - raw.leading_zeros();
    if bits > f64::MANTISSA_DIGITS {
        let shift = bits - f64::MANTISSA_DIGITS;
        let dropped = raw & ((1u64 << shift) - 1);
        if dropped == 1u64 << (shift - 1) {
            let kept = (raw >> shift) + 1;
            return kept as f64 * (1u64 << shift) as f64 / TWO_POW_64;
        }
    }
    raw as f64 / TWO_POW_64
}

/// Caller-owned generator state.
///
/// Each pipeline constructs its own instance, so no run can observe another
/// run's draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashRng {
    state: u64,
}

impl SlashRng {
    /// Create a generator whose first draw is `slash(seed)`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// The current state (the most recent draw, or the seed before any draw).
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the state and return it.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state = slash(self.state);
        self.state
    }

    /// Draw a value in `[0, 1]`.
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        normalize(self.next_raw())
    }
}

impl Default for SlashRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for SlashRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_raw() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SlashRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_permutation() {
        let mut seen = [false; 256];
        for &b in SUBSTITUTION_TABLE.iter() {
            assert!(!seen[b as usize], "byte {:#04x} appears twice", b);
            seen[b as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_multipliers_are_odd() {
        assert_eq!(MULTIPLIER_1 & 1, 1);
        assert_eq!(MULTIPLIER_2 & 1, 1);
    }

    #[test]
    fn test_slash_fixed_points() {
        assert_eq!(slash(0), 0x10cc_4ed1_c4a6_6541);
        assert_eq!(slash(u64::MAX), 0x96bf_0ed9_2b34_eeaf);
    }

    #[test]
    fn test_seed_one_sequence() {
        let expected = [
            0xa01f_1d88_31fb_5ef6,
            0x52b0_7cf3_908b_66fe,
            0x20f6_af24_9ee4_f4bc,
            0xf004_acc6_8bd1_6f1e,
            0xa3e1_40cf_f81b_61dd,
            0x8a86_cafe_7064_4026,
            0x91f3_2098_7c1a_53a0,
            0x1432_4da0_1d8b_107f,
        ];
        let mut rng = SlashRng::default();
        for &value in expected.iter() {
            assert_eq!(rng.next_raw(), value);
        }
        assert_eq!(rng.state(), expected[7]);
    }

    #[test]
    fn test_normalize_rounds_ties_up() {
        // Low 11 bits are exactly half of the dropped range.
        let tie = (1u64 << 63) | (1u64 << 10);
        assert_eq!(tie as f64 / TWO_POW_64, 0.5);
        assert_eq!(normalize(tie), 0.5 + f64::EPSILON / 2.0);
    }

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(u64::MAX), 1.0);
        assert_eq!(normalize(1 << 53), 0.00048828125);
    }

    #[test]
    fn test_rng_core_words() {
        let mut rng = SlashRng::default();
        assert_eq!(rng.next_u32(), 0xa01f_1d88);

        let mut rng = SlashRng::seed_from_u64(1);
        let mut bytes = [0u8; 12];
        rng.fill_bytes(&mut bytes);
        assert_eq!(&bytes[..8], &0xa01f_1d88_31fb_5ef6u64.to_le_bytes());
        assert_eq!(&bytes[8..], &0x52b0_7cf3_908b_66feu64.to_le_bytes()[..4]);
    }

    #[test]
    fn test_from_seed_little_endian() {
        let rng = SlashRng::from_seed(1u64.to_le_bytes());
        assert_eq!(rng, SlashRng::new(1));
    }
}
