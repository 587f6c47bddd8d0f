//! Output paths are joined onto a caller-chosen root, so they must stay
//! inside it on every platform.

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::output::OutputSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathProblem {
    Empty,
    Absolute,
    DriveLetter,
    Backslash,
    ParentSegment,
}

impl PathProblem {
    fn describe(self) -> &'static str {
        match self {
            PathProblem::Empty => "is empty",
            PathProblem::Absolute => "is absolute",
            PathProblem::DriveLetter => "starts with a drive letter",
            PathProblem::Backslash => "uses backslashes",
            PathProblem::ParentSegment => "has a '..' segment",
        }
    }
}

fn path_problems(path: &str) -> Vec<PathProblem> {
    if path.is_empty() {
        return vec![PathProblem::Empty];
    }

    let bytes = path.as_bytes();
    let checks = [
        (bytes[0] == b'/' || bytes[0] == b'\\', PathProblem::Absolute),
        (bytes.get(1) == Some(&b':'), PathProblem::DriveLetter),
        (bytes.contains(&b'\\'), PathProblem::Backslash),
        (path.split('/').any(|s| s == ".."), PathProblem::ParentSegment),
    ];
    checks
        .into_iter()
        .filter_map(|(hit, problem)| hit.then_some(problem))
        .collect()
}

/// True when `path` is relative, forward-slashed and never climbs out of
/// the directory it is joined onto.
pub fn is_safe_output_path(path: &str) -> bool {
    path_problems(path).is_empty()
}

/// Reports E008 per problem with the path, then E009 if the extension
/// disagrees with the declared format.
pub(super) fn validate_output_path(output: &OutputSpec, index: usize, result: &mut ValidationResult) {
    let field = format!("outputs[{}].path", index);

    for problem in path_problems(&output.path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeOutputPath,
            format!("output path '{}' {}", output.path, problem.describe()),
            field.as_str(),
        ));
    }

    if !output.extension_matches() {
        result.add_error(ValidationError::with_path(
            ErrorCode::PathFormatMismatch,
            format!("'{}' is not a .{} file", output.path, output.format),
            field,
        ));
    }
}
