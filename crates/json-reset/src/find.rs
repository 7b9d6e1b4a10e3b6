//! Locating array elements by value.
//!
//! Recorded array indices drift when other actors insert or delete elements.
//! The nearest-match search tolerates that by scanning outward from the
//! recorded index.

use json_reset_util::deep_equal;
use serde_json::Value;

/// Find `value` in `array`, starting from the recorded index `start`.
///
/// With `exact`, only `start` itself is checked. Otherwise the scan starts at
/// `start` (clamped to the array length) and alternates `+1`, `-1`, `+2`,
/// `-2`, … until a deep-equal element is found or both ends are exhausted.
///
/// An absent `value` never matches.
///
/// ```
/// use json_reset::find::find_index;
/// use serde_json::json;
///
/// let arr = vec![json!(0), json!(9), json!(1)];
/// assert_eq!(find_index(&arr, 1, Some(&json!(1)), false), Some(2));
/// assert_eq!(find_index(&arr, 1, Some(&json!(1)), true), None);
/// ```
pub fn find_index(array: &[Value], start: usize, value: Option<&Value>, exact: bool) -> Option<usize> {
    let value = value?;
    let matches = |idx: usize| array.get(idx).is_some_and(|el| deep_equal(el, value));

    if exact {
        return matches(start).then_some(start);
    }

    let len = array.len();
    if len == 0 {
        return None;
    }

    let pos = start.min(len);
    if matches(pos) {
        return Some(pos);
    }

    let mut d = 1;
    while pos + d < len || d <= pos {
        if matches(pos + d) {
            return Some(pos + d);
        }
        if d <= pos && matches(pos - d) {
            return Some(pos - d);
        }
        d += 1;
    }
    None
}

/// True if any element of `array` deep-equals `value`.
pub fn contains(array: &[Value], value: &Value) -> bool {
    array.iter().any(|el| deep_equal(el, value))
}
