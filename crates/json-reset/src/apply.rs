//! Mutation primitives.
//!
//! Each primitive applies one operation in place and reports whether it
//! executed. Refusing to execute is a normal outcome: the data was changed by
//! someone else in a way that makes the recorded operation unsafe.

use json_reset_pointer::{get_mut, set};
use json_reset_util::deep_equal_opt;
use serde_json::Value;

use crate::context::{resolve, ContainerKind, Target};
use crate::find::find_index;
use crate::types::OperationOptions;

// ── Helpers ───────────────────────────────────────────────────────────────

fn array_at<'a>(data: &'a mut Value, parent: &[String]) -> Option<&'a mut Vec<Value>> {
    get_mut(data, parent).and_then(Value::as_array_mut)
}

// ── add ───────────────────────────────────────────────────────────────────

/// Add `value` at `path`.
///
/// Array slots insert at the recorded index (clamped to the length), unless
/// `check_duplicate` finds the value already at or near that index. A missing
/// array is only created with `force`. Object slots are only written when the
/// key is absent, or with `force`.
///
/// ```
/// use json_reset::{add, OperationOptions};
/// use serde_json::json;
///
/// let mut data = json!({"option": [0, 2]});
/// let path = vec!["option".to_string(), "1".to_string()];
/// assert!(add(&mut data, &path, json!(1), &OperationOptions::default()));
/// assert_eq!(data, json!({"option": [0, 1, 2]}));
/// ```
pub fn add(data: &mut Value, path: &[String], value: Value, opts: &OperationOptions) -> bool {
    let Some(ctx) = resolve(data, path) else {
        return false;
    };

    match ctx.kind() {
        Some(ContainerKind::Array) => {
            let Some(idx) = ctx.key.index() else {
                return false;
            };
            match ctx.target {
                Target::Array(arr) => {
                    if opts.check_duplicate && find_index(arr, idx, Some(&value), opts.exact).is_some() {
                        return false;
                    }
                    let at = idx.min(arr.len());
                    let parent = ctx.parent;
                    match array_at(data, &parent) {
                        Some(arr) => {
                            arr.insert(at, value);
                            true
                        }
                        None => false,
                    }
                }
                Target::Missing if opts.force => {
                    let parent = ctx.parent;
                    set(data, &parent, Value::Array(vec![value])).is_ok()
                }
                _ => false,
            }
        }
        Some(ContainerKind::Object) => {
            if !opts.force && ctx.has() {
                return false;
            }
            let slot = ctx.slot_path();
            set(data, &slot, value).is_ok()
        }
        None => false,
    }
}

// ── remove ────────────────────────────────────────────────────────────────

/// Remove `expected` from `path`.
///
/// An absent slot counts as already removed. Array elements are located by
/// value (honoring `exact`) and spliced out. Object keys are deleted when the
/// current value equals `expected`, or with `force`.
pub fn remove(data: &mut Value, path: &[String], expected: Option<&Value>, opts: &OperationOptions) -> bool {
    let Some(ctx) = resolve(data, path) else {
        return false;
    };
    if !ctx.has() {
        return true;
    }

    match (ctx.target, ctx.key.index()) {
        (Target::Array(arr), Some(idx)) => {
            let Some(found) = find_index(arr, idx, expected, opts.exact) else {
                return false;
            };
            let parent = ctx.parent;
            match array_at(data, &parent) {
                Some(arr) => {
                    arr.remove(found);
                    true
                }
                None => false,
            }
        }
        (Target::Object(_), _) => {
            if !opts.force && !deep_equal_opt(ctx.value, expected) {
                return false;
            }
            let key = ctx.key.as_step();
            let parent = ctx.parent;
            match get_mut(data, &parent) {
                Some(Value::Object(map)) => map.remove(&key).is_some(),
                _ => false,
            }
        }
        _ => false,
    }
}

// ── replace ───────────────────────────────────────────────────────────────

/// Replace the value at `path`, which is expected to be `old`, with `new`.
///
/// A slot that no longer exists is only filled with `force` or
/// `add_not_found`. In arrays, `old` is located by value; when it is gone
/// `force` falls back to [`add`]. `check_duplicate` refuses to write a value
/// already present near the index. Object slots are written when the current
/// value equals `old`; `add_not_found` also fills absent slots.
pub fn replace(
    data: &mut Value,
    path: &[String],
    old: Option<&Value>,
    new: Value,
    opts: &OperationOptions,
) -> bool {
    let Some(ctx) = resolve(data, path) else {
        return false;
    };
    if !ctx.has() && !opts.force && !opts.add_not_found {
        return false;
    }

    match ctx.kind() {
        Some(ContainerKind::Array) => {
            let Some(idx) = ctx.key.index() else {
                return false;
            };
            let arr = match ctx.target {
                Target::Array(arr) => Some(arr),
                _ => None,
            };
            let found = arr.and_then(|arr| find_index(arr, idx, old, opts.exact));

            if found.is_none() && opts.force {
                return add(data, path, new, opts);
            }
            let Some(arr) = arr else {
                return false;
            };
            if opts.check_duplicate && find_index(arr, idx, Some(&new), false).is_some() {
                return false;
            }
            let Some(found) = found else {
                return false;
            };
            let parent = ctx.parent;
            match array_at(data, &parent).and_then(|arr| arr.get_mut(found)) {
                Some(slot) => {
                    *slot = new;
                    true
                }
                None => false,
            }
        }
        Some(ContainerKind::Object) => {
            let writable = opts.force
                || deep_equal_opt(old, ctx.value)
                || (!ctx.has() && opts.add_not_found);
            if !writable {
                return false;
            }
            let slot = ctx.slot_path();
            set(data, &slot, new).is_ok()
        }
        None => false,
    }
}
