//! End-to-End Determinism Tests for Topograin
//!
//! Tests verify:
//! - Same seed produces byte-identical PNGs, in memory and on disk
//! - Different seeds produce different images
//! - Pipelines run in any order without disturbing each other
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p topograin-tests --test e2e_determinism
//! ```

use std::fs;

use topograin_cli::commands::generate::generate_spec;
use topograin_spec::{SpeckleParams, TopographyParams};
use topograin_tests::fixtures::{speckle_spec, topography_spec};
use topograin_tests::{verify_determinism, SpecTree};

fn topography(size: u32) -> TopographyParams {
    TopographyParams {
        size,
        ..Default::default()
    }
}

fn speckle(size: u32) -> SpeckleParams {
    SpeckleParams {
        size,
        ..Default::default()
    }
}

// ============================================================================
// In-memory generation
// ============================================================================

#[test]
fn test_topography_determinism() {
    let params = topography(64);
    let result = verify_determinism(
        || topograin_texture::generate_topography(&params, 1).unwrap().data,
        3,
    );
    result.assert_deterministic();
}

#[test]
fn test_speckle_determinism() {
    let params = speckle(64);
    verify_determinism(
        || topograin_texture::generate_speckle(&params, 1).unwrap().light.data,
        3,
    )
    .assert_deterministic();
    verify_determinism(
        || topograin_texture::generate_speckle(&params, 1).unwrap().dark.data,
        3,
    )
    .assert_deterministic();
}

#[test]
fn test_different_seeds_different_output() {
    let params = topography(256);
    let a = topograin_texture::generate_topography(&params, 111).unwrap();
    let b = topograin_texture::generate_topography(&params, 222).unwrap();
    assert_ne!(a.hash, b.hash, "Different seeds should produce different hashes");

    let a = topograin_texture::generate_speckle(&speckle(32), 111).unwrap();
    let b = topograin_texture::generate_speckle(&speckle(32), 222).unwrap();
    assert_ne!(a.light.hash, b.light.hash);
}

#[test]
fn test_pipeline_order_does_not_matter() {
    let grain_first = topograin_texture::generate_speckle(&speckle(16), 1).unwrap();
    let map_second = topograin_texture::generate_topography(&topography(16), 1).unwrap();

    let map_first = topograin_texture::generate_topography(&topography(16), 1).unwrap();
    let grain_second = topograin_texture::generate_speckle(&speckle(16), 1).unwrap();

    assert_eq!(grain_first.light.hash, grain_second.light.hash);
    assert_eq!(map_first.hash, map_second.hash);
}

// ============================================================================
// Files on disk
// ============================================================================

#[test]
fn test_output_files_identical_across_runs() {
    let first = SpecTree::new();
    let second = SpecTree::new();

    for spec in [topography_spec("topo-det", 32), speckle_spec("grain-det", 32)] {
        let a = generate_spec(&spec, &first.out_dir).unwrap();
        let b = generate_spec(&spec, &second.out_dir).unwrap();
        assert_eq!(a.report.spec_hash, b.report.spec_hash);
        assert_eq!(a.report.outputs, b.report.outputs);

        for output in &a.report.outputs {
            let bytes_a = fs::read(first.out_dir.join(&output.path)).unwrap();
            let bytes_b = fs::read(second.out_dir.join(&output.path)).unwrap();
            assert_eq!(bytes_a, bytes_b, "{} differs", output.path.display());
        }
    }
}

#[test]
fn test_report_hash_matches_in_memory_generation() {
    let tree = SpecTree::new();
    let spec = topography_spec("topo-mem", 32);
    let outcome = generate_spec(&spec, &tree.out_dir).unwrap();

    let in_memory = topograin_texture::generate_topography(&topography(32), spec.seed).unwrap();
    assert_eq!(outcome.report.outputs[0].hash, in_memory.hash);
}
