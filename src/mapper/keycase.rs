use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

// Boundary before an uppercase run that continues in lowercase ("HTTPServer"
// -> "HTTP_Server") and boundary between a lowercase/digit and an uppercase
// ("revisionId" -> "revision_Id").
static UPPER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("(.)([A-Z][a-z]+)").unwrap());
static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").unwrap());

/// Converts one camelCase identifier to snake_case.
///
/// The two-pass rewrite is a heuristic; it is stable and injective over the
/// field names the Songle service actually emits, which is the contract the
/// mapper relies on.
pub fn to_snake_case(name: &str) -> String {
    let split = UPPER_RUN.replace_all(name, "${1}_${2}");
    LOWER_UPPER.replace_all(&split, "${1}_${2}").to_lowercase()
}

/// Rebuilds a JSON value with every object key, at every depth, converted to
/// snake_case. Array order and leaf values pass through untouched.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (to_snake_case(&key), normalize_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn converts_service_field_names() {
        assert_eq!(to_snake_case("startedAt"), "started_at");
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("revisionId"), "revision_id");
        assert_eq!(to_snake_case("isChorus"), "is_chorus");
        assert_eq!(to_snake_case("rmsAmplitude"), "rms_amplitude");
        assert_eq!(to_snake_case("chorusSegments"), "chorus_segments");
    }

    #[test]
    fn leaves_already_converted_names_untouched() {
        assert_eq!(to_snake_case("duration"), "duration");
        assert_eq!(to_snake_case("created_at"), "created_at");
    }

    #[test]
    fn normalize_keys_walks_nested_structures() {
        let raw = json!({
            "chorusSegments": [
                {
                    "isChorus": true,
                    "repeats": [{"index": 0, "startedAt": 10}],
                }
            ],
            "plainValue": "camelCase text stays as-is",
        });
        let expected = json!({
            "chorus_segments": [
                {
                    "is_chorus": true,
                    "repeats": [{"index": 0, "started_at": 10}],
                }
            ],
            "plain_value": "camelCase text stays as-is",
        });
        assert_eq!(normalize_keys(raw), expected);
    }

    #[test]
    fn normalize_keys_passes_scalars_through() {
        assert_eq!(normalize_keys(json!(42)), json!(42));
        assert_eq!(normalize_keys(json!("someText")), json!("someText"));
        assert_eq!(normalize_keys(json!(null)), json!(null));
    }
}
