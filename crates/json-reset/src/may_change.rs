use json_reset_pointer::{get, IntoPath};
use json_reset_util::deep_equal_opt;
use serde_json::Value;

/// Whether the value at `path` is safe to change.
///
/// Compares `current` against `original`: true when the path exists in only
/// one of them, when both hold different values, or when neither has it.
/// False only when both hold equal values, i.e. nobody touched it.
///
/// ```
/// use json_reset::may_change;
/// use serde_json::json;
///
/// let current = json!({"name": "Mike", "color": "red"});
/// let original = json!({"name": "Julia", "color": "red"});
/// assert!(may_change(&current, &original, "name"));
/// assert!(!may_change(&current, &original, "color"));
/// assert!(may_change(&current, &original, "size.name"));
/// ```
pub fn may_change(current: &Value, original: &Value, path: impl IntoPath) -> bool {
    let path = path.into_path();
    let a = get(current, &path);
    let b = get(original, &path);
    !(a.is_some() && b.is_some() && deep_equal_opt(a, b))
}
