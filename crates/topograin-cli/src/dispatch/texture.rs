//! Texture backend dispatch handler

use std::path::{Path, PathBuf};

use topograin_spec::{
    GenerationError, OutputKind, OutputResult, OutputSpec, Spec, SpeckleParams, TopographyParams,
};
use topograin_texture::ImageResult;

use super::{write_output_bytes, DispatchError};

/// Outputs of one kind, in spec order. At least one must exist.
fn outputs_of_kind(spec: &Spec, kind: OutputKind) -> Result<Vec<&OutputSpec>, DispatchError> {
    let outputs: Vec<&OutputSpec> = spec.outputs.iter().filter(|o| o.kind == kind).collect();
    if outputs.is_empty() {
        return Err(DispatchError::MissingOutput(kind));
    }
    Ok(outputs)
}

fn write_image(
    out_root: &Path,
    output: &OutputSpec,
    image: &ImageResult,
) -> Result<OutputResult, DispatchError> {
    write_output_bytes(out_root, &output.path, &image.data)?;
    Ok(OutputResult::new(
        output.kind,
        output.format,
        PathBuf::from(&output.path),
        image.hash.clone(),
    ))
}

/// Generate the banded map and write it to every primary output.
pub(super) fn generate_topography(
    spec: &Spec,
    params: &TopographyParams,
    out_root: &Path,
) -> Result<Vec<OutputResult>, DispatchError> {
    let primary = outputs_of_kind(spec, OutputKind::Primary)?;

    let image = topograin_texture::generate_topography(params, spec.seed)
        .map_err(|e| DispatchError::Backend(GenerationError::from_backend(e)))?;

    primary
        .into_iter()
        .map(|output| write_image(out_root, output, &image))
        .collect()
}

/// Generate both grain overlays and write each to its outputs.
pub(super) fn generate_speckle(
    spec: &Spec,
    params: &SpeckleParams,
    out_root: &Path,
) -> Result<Vec<OutputResult>, DispatchError> {
    outputs_of_kind(spec, OutputKind::LightOverlay)?;
    outputs_of_kind(spec, OutputKind::DarkOverlay)?;

    let result = topograin_texture::generate_speckle(params, spec.seed)
        .map_err(|e| DispatchError::Backend(GenerationError::from_backend(e)))?;

    let mut outputs = Vec::new();
    for output in &spec.outputs {
        let image = match output.kind {
            OutputKind::LightOverlay => &result.light,
            OutputKind::DarkOverlay => &result.dark,
            OutputKind::Primary => continue,
        };
        outputs.push(write_image(out_root, output, image)?);
    }
    Ok(outputs)
}
