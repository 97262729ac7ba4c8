//! Element properties that docx-rs does not expose as public fields
//!
//! docx-rs serializes its model for its JSON output. Grid spans, vertical
//! merges and break kinds are read back from that form.

use serde::Serialize;
use serde_json::Value;

pub(crate) fn serialized<T: Serialize>(element: &T) -> Option<Value> {
    match serde_json::to_value(element) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Could not serialize element properties: {e}");
            None
        }
    }
}

/// First value stored under `key`, searching nested objects
pub(crate) fn find_key<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    let Value::Object(map) = value else {
        return None;
    };
    if let Some(found) = map.get(key).filter(|v| !v.is_null()) {
        return Some(found);
    }
    map.values().find_map(|nested| find_key(nested, key))
}

/// A count stored either bare or as `{"val": n}`
pub(crate) fn as_count(value: &Value) -> Option<usize> {
    match unwrap_val(value) {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A keyword stored either bare or as `{"val": "..."}`, lowercased
pub(crate) fn as_keyword(value: &Value) -> Option<String> {
    match unwrap_val(value) {
        Value::String(s) => Some(s.to_ascii_lowercase()),
        _ => None,
    }
}

fn unwrap_val(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("val").unwrap_or(value),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_nested_key() {
        let value = json!({"width": null, "inner": {"gridSpan": 3}});
        assert_eq!(find_key(&value, "gridSpan"), Some(&json!(3)));
        assert_eq!(find_key(&value, "width"), None);
    }

    #[test]
    fn test_wrapped_and_bare_values() {
        assert_eq!(as_count(&json!(2)), Some(2));
        assert_eq!(as_count(&json!({"val": 4})), Some(4));
        assert_eq!(as_keyword(&json!("Continue")), Some("continue".to_string()));
        assert_eq!(as_keyword(&json!({"val": "restart"})), Some("restart".to_string()));
        assert_eq!(as_keyword(&json!(7)), None);
    }
}
