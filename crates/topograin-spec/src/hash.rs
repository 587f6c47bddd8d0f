//! Canonical spec hashing.
//!
//! `spec_hash = hex(BLAKE3(JCS(spec)))`, where JCS is the RFC 8785 JSON
//! canonical form: sorted keys, no insignificant whitespace, ECMAScript
//! number formatting, minimal string escaping. Two specs that differ only
//! in formatting or key order hash the same.
//!
//! JSON integers are written exactly, so `u64` seeds above 2^53 keep
//! distinct hashes instead of collapsing through a double.

use std::fmt::{self, Write as _};

use serde_json::{Number, Value};

use crate::error::SpecError;
use crate::spec::Spec;

/// Hash of the spec's canonical JSON, lowercase hex.
///
/// # Example
/// ```
/// use topograin_spec::Spec;
/// use topograin_spec::hash::canonical_spec_hash;
///
/// let hash = canonical_spec_hash(&Spec::reference_speckle()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &Spec) -> Result<String, SpecError> {
    canonical_value_hash(&spec.to_value()?)
}

pub fn canonical_value_hash(value: &Value) -> Result<String, SpecError> {
    let canonical = canonicalize_json(value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Serialize `value` in JCS form.
pub fn canonicalize_json(value: &Value) -> Result<String, SpecError> {
    let mut out = String::new();
    write!(out, "{}", Jcs(value))
        .map_err(|_| SpecError::Canonicalization("number has no JCS form".to_string()))?;
    Ok(out)
}

struct Jcs<'a>(&'a Value);

impl fmt::Display for Jcs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(n, f),
            Value::String(s) => write_string(s, f),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}", Jcs(item))?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort_unstable();
                f.write_char('{')?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_string(key, f)?;
                    write!(f, ":{}", Jcs(&map[key]))?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_number(n: &Number, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_i64() || n.is_u64() {
        return write!(f, "{n}");
    }
    let x = n.as_f64().ok_or(fmt::Error)?;
    if !x.is_finite() {
        return Err(fmt::Error);
    }
    if x == 0.0 {
        return f.write_char('0');
    }
    if x < 0.0 {
        f.write_char('-')?;
    }

    // `{:e}` gives the shortest round-trip digits; lay them out the way
    // ECMAScript's Number::toString does.
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = sci.split_once('e').ok_or(fmt::Error)?;
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let point = exp + 1;

    if k <= point && point <= 21 {
        write!(f, "{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        write!(f, "{int}.{frac}")
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{lead}e{sign}{}", exp.unsigned_abs())
        } else {
            write!(f, "{lead}.{rest}e{sign}{}", exp.unsigned_abs())
        }
    }
}

fn write_string(s: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            c if c < '\u{20}' => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputSpec;
    use crate::recipe::{Recipe, TopographyParams};

    fn topo_spec(seed: u64) -> Spec {
        Spec::builder("topo-01", Recipe::Topography(TopographyParams::default()))
            .seed(seed)
            .output(OutputSpec::primary("topography.png"))
            .build()
    }

    fn canonical(json: &str) -> String {
        canonicalize_json(&serde_json::from_str(json).unwrap()).unwrap()
    }

    #[test]
    fn test_spec_hash_tracks_content() {
        let hash = canonical_spec_hash(&topo_spec(1)).unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, canonical_spec_hash(&topo_spec(1)).unwrap());
        assert_ne!(hash, canonical_spec_hash(&topo_spec(2)).unwrap());
    }

    #[test]
    fn test_key_order_and_whitespace_ignored() {
        assert_eq!(canonical(r#"{"b": 1, "a": 2}"#), r#"{"a":2,"b":1}"#);
        assert_eq!(canonical(r#"{ "a" : 2,"b":1 }"#), r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            canonical(r#"{"z": [1, 2.0, 0.5, -0.0, 0.02]}"#),
            r#"{"z":[1,2,0.5,0,0.02]}"#
        );
    }

    #[test]
    fn test_numbers_use_ecmascript_exponents() {
        assert_eq!(
            canonical(r#"[1e-7, 0.000001, -2.5e-8, 1e20, 1e21, 1.5e300, 123.456]"#),
            "[1e-7,0.000001,-2.5e-8,100000000000000000000,1e+21,1.5e+300,123.456]"
        );
    }

    #[test]
    fn test_large_integers_stay_exact() {
        assert_eq!(
            canonical("[18446744073709551615, -9007199254740993]"),
            "[18446744073709551615,-9007199254740993]"
        );
    }

    #[test]
    fn test_nested_values() {
        assert_eq!(
            canonical(r#"{"z": [true], "a": {"c": true, "b": null}}"#),
            r#"{"a":{"b":null,"c":true},"z":[true]}"#
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            canonical(r#"{"text": "band\n\"seven\"\u0001"}"#),
            r#"{"text":"band\n\"seven\"\u0001"}"#
        );
    }
}
