//! Topograin End-to-End Test Infrastructure
//!
//! Shared helpers for the integration tests in `tests/`:
//!
//! - **Fixtures**: temporary spec trees built from [`topograin_spec::Spec`] values
//! - **Determinism**: byte-for-byte comparison of repeated runs
//! - **PNG inspection**: decoding written files back into pixels
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p topograin-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod png_info;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::SpecTree;
pub use png_info::{read_png, DecodedPng};
