//! Declared outputs: what a spec asks to be written, and where.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role an image plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    /// The banded topography map.
    Primary,
    /// Black grain, for light backgrounds.
    LightOverlay,
    /// White grain, for dark backgrounds.
    DarkOverlay,
}

impl OutputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Primary => "primary",
            OutputKind::LightOverlay => "light_overlay",
            OutputKind::DarkOverlay => "dark_overlay",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File format. PNG is the only one, and the default when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Png,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One file a spec asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSpec {
    pub kind: OutputKind,
    #[serde(default)]
    pub format: OutputFormat,
    /// Relative, forward-slashed path under the output root.
    pub path: String,
}

impl OutputSpec {
    pub fn new(kind: OutputKind, format: OutputFormat, path: impl Into<String>) -> Self {
        Self {
            kind,
            format,
            path: path.into(),
        }
    }

    pub fn primary(path: impl Into<String>) -> Self {
        Self::new(OutputKind::Primary, OutputFormat::Png, path)
    }

    pub fn light_overlay(path: impl Into<String>) -> Self {
        Self::new(OutputKind::LightOverlay, OutputFormat::Png, path)
    }

    pub fn dark_overlay(path: impl Into<String>) -> Self {
        Self::new(OutputKind::DarkOverlay, OutputFormat::Png, path)
    }

    /// Case-insensitive check of the path's extension against `format`.
    pub fn extension_matches(&self) -> bool {
        match self.path.rsplit_once('.') {
            Some((_, ext)) => ext.eq_ignore_ascii_case(self.format.extension()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_names_match_serde() {
        for kind in [
            OutputKind::Primary,
            OutputKind::LightOverlay,
            OutputKind::DarkOverlay,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        let parsed: OutputKind = serde_json::from_str("\"dark_overlay\"").unwrap();
        assert_eq!(parsed, OutputKind::DarkOverlay);
    }

    #[test]
    fn test_format_defaults_to_png() {
        let output: OutputSpec =
            serde_json::from_str(r#"{"kind":"primary","path":"topography.png"}"#).unwrap();
        assert_eq!(output.format, OutputFormat::Png);
    }

    #[test]
    fn test_unknown_output_field_rejected() {
        let json = r#"{"kind":"primary","path":"t.png","quality":9}"#;
        assert!(serde_json::from_str::<OutputSpec>(json).is_err());
    }

    #[test]
    fn test_extension_matches() {
        assert!(OutputSpec::primary("maps/topography.png").extension_matches());
        assert!(OutputSpec::primary("TOPO.PNG").extension_matches());
        assert!(!OutputSpec::primary("topography.jpg").extension_matches());
        assert!(!OutputSpec::primary("topography").extension_matches());
    }
}
