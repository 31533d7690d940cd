//! Best-effort JSON recovery from free-form LLM output.
//!
//! Models wrap their answer in code fences, prepend chatter, or get truncated.
//! `safe_extract_json` never fails: anything it cannot recover becomes `{}`,
//! and callers decide whether the object they got back is usable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Candidate patterns, strictest first. The first one that matches wins and its
/// first capture group becomes the candidate text.
static CANDIDATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // ```json ... ```
        r"(?is)```json\s*(.*?)\s*```",
        // ```lang\n ... \n``` or ```\n ... \n```
        r"(?s)```[A-Za-z0-9_-]*[ \t]*\n(.*?)\n\s*```",
        // ```{ ... }``` on a single line
        r"(?s)```\s*(\{.*?\})\s*```",
        // opening fence with no closing fence (truncated output)
        r"(?is)```(?:json)?\s*(\{.*)$",
        // bare object carrying the carousel's top-level key
        r#"(?s)(\{\s*"slides"\s*:.*\})"#,
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Returns the parsed JSON object found in `text`, or an empty object.
pub fn safe_extract_json(text: &str) -> Value {
    let candidate = select_candidate(text);
    let candidate = trim_to_braces(candidate.trim());

    match serde_json::from_str::<Value>(candidate) {
        Ok(value @ Value::Object(_)) => value,
        Ok(other) => {
            tracing::debug!("Extracted JSON is not an object (got {})", json_kind(&other));
            empty_object()
        }
        Err(e) => {
            tracing::debug!("JSON extraction failed: {e}");
            empty_object()
        }
    }
}

fn select_candidate(text: &str) -> &str {
    CANDIDATE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
        .unwrap_or(text)
}

/// Slices from the first `{` to the last `}` when the candidate does not already
/// start with an object.
fn trim_to_braces(candidate: &str) -> &str {
    if candidate.starts_with('{') {
        return candidate;
    }
    match (candidate.find('{'), candidate.rfind('}')) {
        (Some(start), Some(end)) if start < end => &candidate[start..=end],
        _ => candidate,
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fenced_json_block_is_returned_exactly() {
        let text = "Aquí tienes tu carrusel:\n```json\n{\"slides\": [{\"title\": \"Hola\"}], \"hashtags\": [\"#rust\"]}\n```\n¡Suerte!";
        assert_eq!(
            safe_extract_json(text),
            json!({"slides": [{"title": "Hola"}], "hashtags": ["#rust"]})
        );
    }

    #[test]
    fn test_uppercase_json_tag() {
        let text = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(safe_extract_json(text), json!({"a": 1}));
    }

    #[test]
    fn test_untagged_fence() {
        let text = "Result:\n```\n{\"a\": [1, 2, 3]}\n```";
        assert_eq!(safe_extract_json(text), json!({"a": [1, 2, 3]}));
    }

    #[test]
    fn test_single_line_fence() {
        let text = "```{\"ok\": true}```";
        assert_eq!(safe_extract_json(text), json!({"ok": true}));
    }

    #[test]
    fn test_unterminated_fence_with_complete_object() {
        let text = "```json\n{\"slides\": []}";
        assert_eq!(safe_extract_json(text), json!({"slides": []}));
    }

    #[test]
    fn test_bare_object_with_known_key_inside_prose() {
        let text = "Sure! {\"slides\": [{\"title\": \"T\", \"bullets\": [\"b\"]}]} Hope it helps.";
        assert_eq!(
            safe_extract_json(text),
            json!({"slides": [{"title": "T", "bullets": ["b"]}]})
        );
    }

    #[test]
    fn test_bare_object_without_markers_is_sliced_from_braces() {
        let text = "The answer is {\"title\": \"x\", \"n\": 2} as requested.";
        assert_eq!(safe_extract_json(text), json!({"title": "x", "n": 2}));
    }

    #[test]
    fn test_plain_object_input() {
        assert_eq!(safe_extract_json("  {\"k\": \"v\"}  "), json!({"k": "v"}));
    }

    #[test]
    fn test_malformed_input_returns_empty_object() {
        assert_eq!(safe_extract_json("{\"slides\": [ {\"title\": "), json!({}));
        assert_eq!(safe_extract_json("no json here at all"), json!({}));
        assert_eq!(safe_extract_json(""), json!({}));
        assert_eq!(safe_extract_json("}{"), json!({}));
    }

    #[test]
    fn test_truncated_fence_returns_empty_object() {
        let text = "```json\n{\"slides\": [{\"title\": \"cut off";
        assert_eq!(safe_extract_json(text), json!({}));
    }

    #[test]
    fn test_non_object_json_returns_empty_object() {
        assert_eq!(safe_extract_json("```json\n[1, 2, 3]\n```"), json!({}));
        assert_eq!(safe_extract_json("42"), json!({}));
    }

    #[test]
    fn test_braces_inside_strings_survive() {
        let text = "```json\n{\"code\": \"fn main() { println!(\\\"}\\\"); }\"}\n```";
        let value = safe_extract_json(text);
        assert_eq!(value["code"], "fn main() { println!(\"}\"); }");
    }
}
