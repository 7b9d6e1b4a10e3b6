//! Pruning of empty containers left behind by a reset.

use json_reset_util::is_empty_container;
use serde_json::Value;

/// Recursively remove empty arrays and objects from `data`, deepest first.
///
/// A container that becomes empty because its children were pruned is pruned
/// too. Scalars are kept, including `null` and `""`. `data` itself is never
/// removed, even when it ends up empty.
///
/// ```
/// use json_reset::clean;
/// use serde_json::json;
///
/// let mut data = json!({"a": {"b": [[]]}, "c": null, "d": [1, {}]});
/// clean(&mut data);
/// assert_eq!(data, json!({"c": null, "d": [1]}));
/// ```
pub fn clean(data: &mut Value) {
    match data {
        Value::Array(arr) => arr.retain_mut(|child| !prune(child)),
        Value::Object(map) => map.retain(|_, child| !prune(child)),
        _ => {}
    }
}

/// Clean `value` and report whether it should be dropped from its parent.
fn prune(value: &mut Value) -> bool {
    clean(value);
    is_empty_container(value)
}
