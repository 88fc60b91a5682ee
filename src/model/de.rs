/// Serde helpers for the loosely typed upstream payloads.
///
/// The API freely mixes `null`, numbers and numeric strings for the same
/// field, and the sanitizer turns "Access Denied" leaves into `null`.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a list of records, treating a `null` list as empty and dropping
/// `null` elements (records the sanitizer blanked out).
pub fn vec_skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().flatten().collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

/// Decodes a float sent either as a JSON number or as a numeric string.
/// Empty or unparsable strings become `None`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_f64")]
        lat: Option<f64>,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "vec_skip_nulls")]
        records: Vec<u32>,
    }

    #[test]
    fn test_lenient_f64_accepts_number_and_string() {
        let p: Probe = serde_json::from_str(r#"{"lat": 34.071783}"#).unwrap();
        assert_eq!(p.lat, Some(34.071783));

        let p: Probe = serde_json::from_str(r#"{"lat": "-118.2596"}"#).unwrap();
        assert_eq!(p.lat, Some(-118.2596), "numeric strings should parse");

        let p: Probe = serde_json::from_str(r#"{"lat": ""}"#).unwrap();
        assert_eq!(p.lat, None, "empty string is no value");

        let p: Probe = serde_json::from_str(r#"{"lat": null}"#).unwrap();
        assert_eq!(p.lat, None);
    }

    #[test]
    fn test_null_as_default_for_missing_and_null() {
        let p: Probe = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(p.items.is_empty(), "null list should decode as empty");

        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert!(p.items.is_empty(), "missing list should decode as empty");

        let p: Probe = serde_json::from_str(r#"{"items": ["a"]}"#).unwrap();
        assert_eq!(p.items, vec!["a".to_string()]);
    }

    #[test]
    fn test_vec_skip_nulls_drops_blanked_elements() {
        let p: Probe = serde_json::from_str(r#"{"records": [1, null, 3]}"#).unwrap();
        assert_eq!(p.records, vec![1, 3], "null elements should be dropped");

        let p: Probe = serde_json::from_str(r#"{"records": null}"#).unwrap();
        assert!(p.records.is_empty());
    }
}
