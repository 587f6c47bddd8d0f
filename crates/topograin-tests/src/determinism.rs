//! Determinism verification.
//!
//! Runs a generation closure several times and compares every output against
//! the first, byte by byte.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first output.
    pub hash: String,
    /// The first difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference. Equals the shorter length when the
    /// outputs differ only in length.
    pub offset: usize,
    /// Byte from the first run, if it extends that far.
    pub expected: Option<u8>,
    /// Byte from the differing run, if it extends that far.
    pub actual: Option<u8>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

fn fmt_byte(byte: Option<u8>) -> String {
    byte.map(|b| format!("0x{:02X}", b))
        .unwrap_or_else(|| "EOF".to_string())
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            fmt_byte(self.expected),
            fmt_byte(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run `generate_fn` `runs` times and verify all outputs are identical.
///
/// # Panics
///
/// Panics if `runs < 2`.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
    })
}

/// Compute the BLAKE3 hash of data as lowercase hex.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
