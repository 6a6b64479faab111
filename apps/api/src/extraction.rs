//! Best-effort recovery of a JSON object from free-form model output.
//!
//! Models asked for "strict JSON" still wrap it in code fences or prose.
//! Nothing here returns an error: failure is an empty map.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("code fence pattern is valid"));

/// Extracts a JSON object from `text`, returning an empty map when none can be recovered.
pub fn extract_json(text: &str) -> Map<String, Value> {
    try_extract_json(text).unwrap_or_default()
}

/// Tries, in order: the fence-stripped text as a whole, then the greedy
/// span from the first `{` to the last `}`.
pub fn try_extract_json(text: &str) -> Option<Map<String, Value>> {
    let stripped = strip_code_fences(text);

    parse_object(&stripped).or_else(|| {
        let start = stripped.find('{')?;
        let end = stripped.rfind('}')?;
        if end < start {
            return None;
        }
        parse_object(&stripped[start..=end])
    })
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker, wherever it appears.
fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_value(map: Map<String, Value>) -> Value {
        Value::Object(map)
    }

    #[test]
    fn test_extract_json_from_tagged_fence() {
        let input = "```json\n{\"a\":1}\n```";
        assert_eq!(as_value(extract_json(input)), json!({"a": 1}));
    }

    #[test]
    fn test_extract_json_from_untagged_fence() {
        let input = "```\n{\"selected\": []}\n```";
        assert_eq!(as_value(extract_json(input)), json!({"selected": []}));
    }

    #[test]
    fn test_extract_json_from_surrounding_prose() {
        let input = "here is the answer {\"a\":1} thanks";
        assert_eq!(as_value(extract_json(input)), json!({"a": 1}));
    }

    #[test]
    fn test_extract_json_without_json_is_empty() {
        assert!(extract_json("no json here").is_empty());
        assert!(try_extract_json("no json here").is_none());
    }

    #[test]
    fn test_extract_json_prose_and_fences_combined() {
        let input = "Sure! Here you go:\n```json\n{\"selected\": [{\"name\": \"Rahul\"}]}\n```\nLet me know.";
        assert_eq!(
            as_value(extract_json(input)),
            json!({"selected": [{"name": "Rahul"}]})
        );
    }

    #[test]
    fn test_greedy_span_covers_nested_objects() {
        let input = "result: {\"outer\": {\"inner\": true}} done";
        assert_eq!(
            as_value(extract_json(input)),
            json!({"outer": {"inner": true}})
        );
    }

    #[test]
    fn test_greedy_span_across_two_objects_fails_to_empty() {
        // First `{` to last `}` spans both objects, which is not valid JSON.
        let input = "{\"a\": 1} and also {\"b\": 2}";
        assert!(extract_json(input).is_empty());
    }

    #[test]
    fn test_non_object_json_is_treated_as_failure() {
        assert!(extract_json("[1, 2, 3]").is_empty());
        assert!(extract_json("42").is_empty());
    }

    #[test]
    fn test_array_wrapping_an_object_recovers_the_object_span() {
        let input = "[{\"a\": 1}]";
        assert_eq!(as_value(extract_json(input)), json!({"a": 1}));
    }

    #[test]
    fn test_reversed_braces_do_not_panic() {
        assert!(extract_json("} nothing {").is_empty());
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(extract_json("").is_empty());
    }
}
