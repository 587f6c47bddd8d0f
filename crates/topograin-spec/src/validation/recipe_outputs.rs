//! Declared outputs against the set the recipe writes (E015).

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::spec::Spec;

pub(super) fn validate_outputs_for_recipe(spec: &Spec, result: &mut ValidationResult) {
    let recipe = spec.recipe.kind();
    let expected = spec.recipe.output_kinds();

    let stray = spec
        .outputs
        .iter()
        .enumerate()
        .filter(|(_, output)| !expected.contains(&output.kind));
    for (i, output) in stray {
        result.add_error(ValidationError::with_path(
            ErrorCode::OutputValidationFailed,
            format!("{recipe} has no '{}' output", output.kind),
            format!("outputs[{i}].kind"),
        ));
    }

    for kind in expected {
        match spec.outputs.iter().filter(|o| o.kind == *kind).count() {
            1 => {}
            n => result.add_error(ValidationError::with_path(
                ErrorCode::OutputValidationFailed,
                format!("{recipe} writes one '{kind}' output, spec declares {n}"),
                "outputs",
            )),
        }
    }
}
