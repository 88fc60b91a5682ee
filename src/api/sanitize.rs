/// Response sanitizer for `/data` payloads.
///
/// The upstream API pads string values with whitespace and, when the API key
/// lacks a permission, returns the literal string "Access Denied" in place of
/// the section (an object, a list, or a scalar). Typed decoding would reject
/// a string where a structure is expected, so the tree is repaired first:
///
/// 1. every string leaf is trimmed,
/// 2. a trimmed leaf equal to `"Access Denied"` becomes `null`,
/// 3. objects and arrays are walked depth-first; other scalars pass through.
///
/// Keys, array lengths and nesting are never changed.

use serde_json::{Map, Value};

use crate::model::FloodApiError;

/// The in-band marker the API uses for fields the key may not read.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Sanitizes a JSON tree. Pure; running it twice equals running it once.
pub fn sanitize(value: Value) -> Value {
    let mut denied = Vec::new();
    walk(value, "", &mut denied)
}

/// Like `sanitize`, also returning the path of every leaf that was an
/// "Access Denied" marker, e.g. `result.census_bureau.cbsa` or `result.loma[2]`.
/// Keys that contain a dot are bracketed: `result["flood.s_firm_pan"][0]`.
pub fn sanitize_with_report(value: Value) -> (Value, Vec<String>) {
    let mut denied = Vec::new();
    let value = walk(value, "", &mut denied);
    (value, denied)
}

/// Parses a raw body and sanitizes it. Fails without partial output when
/// the body is not JSON.
pub fn sanitize_body(raw: &[u8]) -> Result<(Value, Vec<String>), FloodApiError> {
    let value: Value = serde_json::from_slice(raw).map_err(FloodApiError::Sanitize)?;
    Ok(sanitize_with_report(value))
}

fn walk(value: Value, path: &str, denied: &mut Vec<String>) -> Value {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed == ACCESS_DENIED {
                denied.push(path.to_string());
                Value::Null
            } else if trimmed.len() == s.len() {
                Value::String(s)
            } else {
                Value::String(trimmed.to_string())
            }
        }
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .into_iter()
                .map(|(key, child)| {
                    let child = walk(child, &key_path(path, &key), denied);
                    (key, child)
                })
                .collect();
            Value::Object(map)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, child)| walk(child, &format!("{}[{}]", path, i), denied))
                .collect(),
        ),
        other => other,
    }
}

/// Appends an object key to a report path. Keys with path syntax in them
/// are written as quoted brackets.
fn key_path(path: &str, key: &str) -> String {
    if key.contains(['.', '[', ']', '"']) {
        format!("{}[{:?}]", path, key)
    } else if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::*;
    use serde_json::json;

    /// Collects (path, leaf) pairs so shapes can be compared.
    fn leaves(value: &Value, path: String, out: &mut Vec<(String, Value)>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    leaves(v, format!("{}/{}", path, k), out);
                }
            }
            Value::Array(items) => {
                for (i, v) in items.iter().enumerate() {
                    leaves(v, format!("{}/{}", path, i), out);
                }
            }
            leaf => out.push((path, leaf.clone())),
        }
    }

    fn sample_trees() -> Vec<Value> {
        vec![
            serde_json::from_str(fixture_flood_data_json()).unwrap(),
            serde_json::from_str(fixture_access_denied_sections_json()).unwrap(),
            json!(["  Access Denied ", [" x ", ["Access Denied"]], { "k": "Access Denied" }]),
            json!(" padded "),
            json!(null),
            json!(42.5),
        ]
    }

    #[test]
    fn test_trims_string_leaves() {
        let out = sanitize(json!({ "label": "  430 Australian Ave  ", "tags": ["\ta\n", "b "] }));
        assert_eq!(out, json!({ "label": "430 Australian Ave", "tags": ["a", "b"] }));
    }

    #[test]
    fn test_access_denied_becomes_null_at_any_depth() {
        let out = sanitize(json!({
            "result": {
                "census_bureau": { "cbsa": "Access Denied", "census_block": "1201" },
                "property": "Access Denied   ",
                "loma": ["Access Denied", { "status": "  Access Denied" }]
            }
        }));
        assert_eq!(
            out,
            json!({
                "result": {
                    "census_bureau": { "cbsa": null, "census_block": "1201" },
                    "property": null,
                    "loma": [null, { "status": null }]
                }
            })
        );
    }

    #[test]
    fn test_top_level_marker_is_nulled() {
        assert_eq!(sanitize(json!("Access Denied")), Value::Null);
    }

    #[test]
    fn test_only_exact_marker_is_nulled() {
        let input = json!(["access denied", "ACCESS DENIED", "Access Denied.", "Access  Denied", "Access Denied for key"]);
        let out = sanitize(input.clone());
        assert_eq!(out, input, "near-miss variants must be left alone");
    }

    #[test]
    fn test_non_string_scalars_pass_through() {
        let input = json!({ "n": 1, "f": -2.5, "t": true, "z": null, "big": 12345678901234i64 });
        assert_eq!(sanitize(input.clone()), input);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for tree in sample_trees() {
            let once = sanitize(tree);
            let twice = sanitize(once.clone());
            assert_eq!(once, twice, "second pass must not change the tree");
        }
    }

    #[test]
    fn test_shape_is_preserved_and_only_string_leaves_change() {
        for tree in sample_trees() {
            let mut before = Vec::new();
            leaves(&tree, String::new(), &mut before);
            let out = sanitize(tree);
            let mut after = Vec::new();
            leaves(&out, String::new(), &mut after);

            assert_eq!(before.len(), after.len(), "leaf count must not change");
            for ((path_in, leaf_in), (path_out, leaf_out)) in before.iter().zip(after.iter()) {
                assert_eq!(path_in, path_out, "keys and indices must not change");
                match leaf_in {
                    Value::String(s) if s.trim() == ACCESS_DENIED => {
                        assert_eq!(leaf_out, &Value::Null, "{} should be nulled", path_in)
                    }
                    Value::String(s) => {
                        assert_eq!(leaf_out, &Value::String(s.trim().to_string()), "{} should be trimmed", path_in)
                    }
                    other => assert_eq!(leaf_out, other, "{} should be unchanged", path_in),
                }
            }
        }
    }

    #[test]
    fn test_report_lists_denied_paths() {
        let (_, denied) = sanitize_with_report(json!({
            "result": {
                "census_bureau": { "cbsa": "Access Denied" },
                "loma": [{}, {}, "Access Denied"]
            },
            "status": " match "
        }));
        assert_eq!(
            denied,
            vec!["result.census_bureau.cbsa".to_string(), "result.loma[2]".to_string()]
        );
    }

    #[test]
    fn test_report_brackets_dotted_keys() {
        let (_, denied) = sanitize_with_report(json!({
            "result": {
                "flood.s_firm_pan": ["Access Denied"],
                "flood.s_pol_ar": "Access Denied"
            },
            "a.b": "Access Denied"
        }));
        assert_eq!(
            denied,
            vec![
                r#"["a.b"]"#.to_string(),
                r#"result["flood.s_firm_pan"][0]"#.to_string(),
                r#"result["flood.s_pol_ar"]"#.to_string(),
            ],
            "dotted keys must not read as nested objects"
        );
    }

    #[test]
    fn test_sanitize_body_rejects_invalid_json() {
        let result = sanitize_body(br#"{"invalid_json":"#);
        assert!(
            matches!(result, Err(FloodApiError::Sanitize(_))),
            "truncated JSON should fail sanitization, got {:?}",
            result
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("error unmarshalling JSON"), "got: {}", err);
    }

    #[test]
    fn test_sanitize_body_accepts_fixture() {
        let (value, denied) = sanitize_body(fixture_access_denied_sections_json().as_bytes())
            .expect("fixture is valid JSON");
        assert!(value["result"]["property"].is_null());
        assert!(!denied.is_empty());
    }
}
