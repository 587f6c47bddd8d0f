//! Fmt command implementation
//!
//! Rewrites a spec file with sorted keys and two-space indentation.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{Map, Value};
use topograin_spec::Spec;

/// Run the fmt command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `output` - Output file path (default: overwrite the input file)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(spec_path: &str, output: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Formatting:".cyan().bold(), spec_path);

    let content = fs::read_to_string(spec_path)
        .with_context(|| format!("Failed to read spec file: {}", spec_path))?;

    let formatted = format_spec_json(&content)
        .with_context(|| format!("Failed to parse JSON: {}", spec_path))?;

    // Unknown fields survive formatting; flag them so the user is not surprised
    // when validate later rejects the file.
    if let Err(e) = Spec::from_json(&content) {
        println!("  {} not a valid spec: {}", "!".yellow(), e);
    }

    let output_path = output.unwrap_or(spec_path);
    fs::write(output_path, &formatted)
        .with_context(|| format!("Failed to write to: {}", output_path))?;

    if output_path == spec_path {
        println!("{} Formatted in place", "SUCCESS".green().bold());
    } else {
        println!("{} Formatted to: {}", "SUCCESS".green().bold(), output_path);
    }

    Ok(ExitCode::SUCCESS)
}

/// Format JSON text canonically: keys sorted at every depth, two-space
/// indentation, trailing newline.
pub fn format_spec_json(content: &str) -> Result<String> {
    let value: Value = serde_json::from_str(content)?;
    let mut formatted = serde_json::to_string_pretty(&sort_json_keys(&value))?;
    formatted.push('\n');
    Ok(formatted)
}

fn sort_json_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_json_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_json_keys).collect()),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_keys_sorted() {
        let formatted =
            format_spec_json(r#"{"seed": 3, "recipe": {"params": {"size": 8}, "kind": "k"}}"#)
                .unwrap();

        let kind = formatted.find("\"kind\"").unwrap();
        let params = formatted.find("\"params\"").unwrap();
        let seed = formatted.find("\"seed\"").unwrap();
        assert!(kind < params);
        assert!(params < seed);
        assert!(formatted.ends_with("}\n"));
    }

    #[test]
    fn test_array_order_preserved() {
        let formatted = format_spec_json(r#"{"outputs": [{"path": "b"}, {"path": "a"}]}"#).unwrap();
        let value: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(value["outputs"][0]["path"], "b");
        assert_eq!(value["outputs"][1]["path"], "a");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let once = format_spec_json(&Spec::reference_speckle().to_json_pretty().unwrap()).unwrap();
        let twice = format_spec_json(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_formatted_spec_still_parses() {
        let formatted =
            format_spec_json(&Spec::reference_topography().to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            Spec::from_json(&formatted).unwrap(),
            Spec::reference_topography()
        );
    }

    #[test]
    fn test_run_writes_output_file() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("in.json");
        let output = tmp.path().join("out.json");
        fs::write(&input, r#"{"b": 1, "a": 2}"#).unwrap();

        let code = run(input.to_str().unwrap(), Some(output.to_str().unwrap())).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"a\": 2,\n  \"b\": 1\n}\n"
        );
        assert_eq!(fs::read_to_string(&input).unwrap(), r#"{"b": 1, "a": 2}"#);
    }

    #[test]
    fn test_run_rejects_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("broken.json");
        fs::write(&input, "{not json").unwrap();
        assert!(run(input.to_str().unwrap(), None).is_err());
    }
}
