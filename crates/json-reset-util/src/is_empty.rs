use serde_json::Value;

/// Returns true for an array or object with no entries.
///
/// Scalars are never "empty containers", including `null`, `""`, `0`
/// and `false`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_reset_util::is_empty_container;
///
/// assert!(is_empty_container(&json!([])));
/// assert!(is_empty_container(&json!({})));
/// assert!(!is_empty_container(&json!([[]])));
/// assert!(!is_empty_container(&json!("")));
/// ```
pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
