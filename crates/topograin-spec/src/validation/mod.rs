//! Spec validation.
//!
//! The texture core assumes its parameters are in range and does not check
//! them again on the hot path. Every check lives here; [`validate_spec`]
//! runs them all and collects the findings rather than stopping at the
//! first.

mod path_safety;
mod recipe_outputs;
mod recipe_params;


use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::spec::{Spec, SPEC_VERSION};

pub use path_safety::is_safe_output_path;
pub use recipe_params::{LARGE_CANVAS_WARNING_SIZE, MAX_CANVAS_SIZE, MAX_PERIOD, MAX_STEPS};

/// Lowercase letter, then 2 to 63 of `[a-z0-9_-]`.
pub const ASSET_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

fn asset_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ASSET_ID_PATTERN).expect("asset id pattern compiles"))
}

/// Checks whether an asset id matches [`ASSET_ID_PATTERN`].
pub fn is_valid_asset_id(asset_id: &str) -> bool {
    asset_id_regex().is_match(asset_id)
}

/// Validate a spec.
///
/// Contract checks run first (version, id, outputs), then recipe parameter
/// and recipe/output checks, then warnings.
///
/// # Example
/// ```
/// use topograin_spec::Spec;
/// use topograin_spec::validation::validate_spec;
///
/// let result = validate_spec(&Spec::reference_topography());
/// assert!(result.is_ok());
/// ```
pub fn validate_spec(spec: &Spec) -> ValidationResult {
    let mut result = ValidationResult::default();

    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!("expected spec_version {}, got {}", SPEC_VERSION, spec.spec_version),
            "spec_version",
        ));
    }

    if !is_valid_asset_id(&spec.asset_id) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAssetId,
            format!("'{}' does not match {}", spec.asset_id, ASSET_ID_PATTERN),
            "asset_id",
        ));
    }

    check_output_paths(spec, &mut result);
    recipe_params::validate_recipe_params(&spec.recipe, &mut result);
    recipe_outputs::validate_outputs_for_recipe(spec, &mut result);
    collect_warnings(spec, &mut result);

    result
}

fn check_output_paths(spec: &Spec, result: &mut ValidationResult) {
    if spec.outputs.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoOutputs,
            "at least one output is required",
            "outputs",
        ));
        return;
    }

    let mut seen = HashSet::with_capacity(spec.outputs.len());
    for (i, output) in spec.outputs.iter().enumerate() {
        if !seen.insert(output.path.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateOutputPath,
                format!("'{}' is written more than once", output.path),
                format!("outputs[{}].path", i),
            ));
        }
        path_safety::validate_output_path(output, i, result);
    }
}

fn collect_warnings(spec: &Spec, result: &mut ValidationResult) {
    let size = spec.recipe.size();
    // Oversized canvases are already an E012; don't repeat them as warnings.
    if (LARGE_CANVAS_WARNING_SIZE + 1..=MAX_CANVAS_SIZE).contains(&size) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::LargeCanvas,
            format!(
                "{0}x{0} canvas is above {1}x{1} and will be slow to render",
                size, LARGE_CANVAS_WARNING_SIZE
            ),
            "recipe.params.size",
        ));
    }

    if spec.description.as_deref().map_or(true, |d| d.trim().is_empty()) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "spec has no description",
            "description",
        ));
    }
}
