//! Shared test utilities for the occurrence workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`).

use serde_json::Value;

pub const ID_PLACEHOLDER: &str = "__ID__";
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `id` is replaced with `"__ID__"` only when the root object
///    looks like an occurrence (has `fingerprint`, `event`, `issue_title`, `type`).
///    Nested `id` keys (e.g. a transaction doc) are left alone.
///
/// 2. **Recursive**: `detection_time` is replaced at any depth; the placeholder
///    cannot collide with real data.
///
/// The fingerprint is deterministic and is never touched.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_occurrence = obj.contains_key("fingerprint")
            && obj.contains_key("event")
            && obj.contains_key("issue_title")
            && obj.contains_key("type");
        if is_occurrence && obj.contains_key("id") {
            obj.insert("id".to_string(), Value::String(ID_PLACEHOLDER.to_string()));
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.contains_key("detection_time") {
                map.insert(
                    "detection_time".to_string(),
                    Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                );
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_root_occurrence_id_and_time() {
        let input = json!({
            "detection_time": "2024-05-01T12:00:00Z",
            "event": { "event_id": "abc", "received": "2024-05-01T11:59:30Z" },
            "fingerprint": "deadbeef",
            "id": "0b7c5e1e-4c1f-4b0e-9a55-1f0f3c2d7e11",
            "issue_title": "Blocking function called on the main thread",
            "type": 2000
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["id"], ID_PLACEHOLDER);
        assert_eq!(result["detection_time"], TIMESTAMP_PLACEHOLDER);
        // Deterministic fields are untouched.
        assert_eq!(result["fingerprint"], "deadbeef");
        assert_eq!(result["event"]["event_id"], "abc");
        assert_eq!(result["event"]["received"], "2024-05-01T11:59:30Z");
    }

    #[test]
    fn nested_id_not_normalized() {
        let input = json!({
            "transaction": { "id": "t-1", "name": "checkout" },
            "id": "keep-me"
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["id"], "keep-me");
        assert_eq!(result["transaction"]["id"], "t-1");
    }

    #[test]
    fn detection_time_normalized_in_arrays() {
        let input = json!([
            { "detection_time": "2024-05-01T12:00:00Z" },
            { "detection_time": "2025-01-01T00:00:00Z" }
        ]);

        let result = normalize_nondeterministic(input);

        assert_eq!(result[0]["detection_time"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(result[1]["detection_time"], TIMESTAMP_PLACEHOLDER);
    }
}
