//! Range checks for recipe parameters.
//!
//! The texture core treats these as caller preconditions; this is where the
//! caller upholds them.

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::recipe::{Recipe, SpeckleParams, TopographyParams};

/// Largest canvas side accepted.
pub const MAX_CANVAS_SIZE: u32 = 16384;

/// Canvas side above which a warning is emitted.
pub const LARGE_CANVAS_WARNING_SIZE: u32 = 4096;

/// Largest lattice side accepted.
pub const MAX_PERIOD: u32 = 4096;

/// Largest number of color bands accepted.
pub const MAX_STEPS: u32 = 4096;

pub(super) fn validate_recipe_params(recipe: &Recipe, result: &mut ValidationResult) {
    match recipe {
        Recipe::Topography(params) => validate_topography(params, result),
        Recipe::Speckle(params) => validate_speckle(params, result),
    }
}

fn param_error(result: &mut ValidationResult, field: &str, message: String) {
    result.add_error(ValidationError::with_path(
        ErrorCode::InvalidRecipeParams,
        message,
        format!("recipe.params.{}", field),
    ));
}

fn validate_size(size: u32, result: &mut ValidationResult) {
    if size == 0 {
        param_error(result, "size", "size must be at least 1".to_string());
    } else if size > MAX_CANVAS_SIZE {
        param_error(
            result,
            "size",
            format!("size must be at most {}, got {}", MAX_CANVAS_SIZE, size),
        );
    }
}

fn validate_topography(params: &TopographyParams, result: &mut ValidationResult) {
    validate_size(params.size, result);

    if params.period == 0 {
        param_error(result, "period", "period must be at least 1".to_string());
    } else if params.period > MAX_PERIOD {
        param_error(
            result,
            "period",
            format!("period must be at most {}, got {}", MAX_PERIOD, params.period),
        );
    }

    if params.steps < 2 {
        param_error(
            result,
            "steps",
            format!("steps must be at least 2, got {}", params.steps),
        );
    } else if params.steps > MAX_STEPS {
        param_error(
            result,
            "steps",
            format!("steps must be at most {}, got {}", MAX_STEPS, params.steps),
        );
    }

    if let Some(frequency) = params.frequency {
        if !frequency.is_finite() || frequency <= 0.0 {
            param_error(
                result,
                "frequency",
                format!("frequency must be a positive finite number, got {}", frequency),
            );
        }
    }

    if !params.amplitude.is_finite() || params.amplitude <= 0.0 {
        param_error(
            result,
            "amplitude",
            format!(
                "amplitude must be a positive finite number, got {}",
                params.amplitude
            ),
        );
    } else if params.amplitude > 1.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::BandOverflow,
            format!(
                "amplitude {} can push the band index past {} (amplitude must be at most 1)",
                params.amplitude, params.steps
            ),
            "recipe.params.amplitude",
        ));
    }

    for (i, color) in params.colors.iter().enumerate() {
        for (name, value) in color.components() {
            if !(0.0..=1.0).contains(&value) {
                param_error(
                    result,
                    &format!("colors[{}].{}", i, name),
                    format!("{} must be in [0, 1], got {}", name, value),
                );
            }
        }
    }
}

fn validate_speckle(params: &SpeckleParams, result: &mut ValidationResult) {
    validate_size(params.size, result);

    if !(0.0..=1.0).contains(&params.opacity) {
        param_error(
            result,
            "opacity",
            format!("opacity must be in [0, 1], got {}", params.opacity),
        );
    }
}
