//! Topograin Spec Library
//!
//! This crate provides types, validation, and hashing for Topograin specs.
//! Specs are JSON documents that describe one deterministic texture
//! generation run: a recipe (topography bands or speckle overlays), a seed,
//! and the PNG outputs to write.
//!
//! # Example
//!
//! ```
//! use topograin_spec::{OutputSpec, Recipe, Spec, TopographyParams};
//! use topograin_spec::validation::validate_spec;
//! use topograin_spec::hash::canonical_spec_hash;
//!
//! let spec = Spec::builder("site-topography", Recipe::Topography(TopographyParams::default()))
//!     .seed(1)
//!     .description("Banded topography backdrop")
//!     .output(OutputSpec::primary("topography.png"))
//!     .build();
//!
//! let result = validate_spec(&spec);
//! assert!(result.is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`output`]: Output specification types (kind, format, path)
//! - [`recipe`]: Recipe types for the texture pipelines
//! - [`report`]: Report types for generation results
//! - [`spec`]: Main spec type and builder
//! - [`validation`]: Spec validation functions
//! - [`hash`]: Canonical hashing

pub mod error;
pub mod hash;
pub mod output;
pub mod recipe;
pub mod report;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, Diagnostic, ErrorCode, GenerationError, SpecError, ValidationError,
    ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::{canonical_spec_hash, canonical_value_hash, canonicalize_json};
pub use output::{OutputFormat, OutputKind, OutputSpec};
pub use recipe::{HlsColor, Recipe, SpeckleParams, TopographyParams};
pub use report::{OutputResult, Report, ReportBuilder, ReportEntry, ReportError, ReportWarning};
pub use spec::{Spec, SpecBuilder, DEFAULT_SEED, SPEC_VERSION};
pub use validation::{is_safe_output_path, validate_spec};
