//! CLI command implementations

pub mod fmt;
pub mod generate;
pub mod generate_all;
pub mod json_output;
pub mod reporting;
pub mod template;
pub mod validate;
