use serde_json::{Map, Value};

use crate::types::Key;
use crate::JsonPointerError;

/// Get a value from a JSON document by path.
///
/// Returns `None` if the path doesn't exist or is invalid.
///
/// # Example
///
/// ```
/// use json_reset_pointer::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// assert_eq!(get(&doc, &["foo".to_string(), "bar".to_string()]), Some(&json!(42)));
/// assert_eq!(get(&doc, &["missing".to_string()]), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for path_step in path {
        current = match current {
            Value::Array(arr) => arr.get(path_step.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(path_step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Returns `None` if the path doesn't exist or is invalid.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for path_step in path {
        current = match current {
            Value::Array(arr) => arr.get_mut(path_step.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get_mut(path_step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Returns true if `path` addresses an existing slot.
///
/// Explicit `null` values exist; missing keys and out-of-range indices don't.
///
/// # Example
///
/// ```
/// use json_reset_pointer::has;
/// use serde_json::json;
///
/// let doc = json!({"a": null, "list": [1]});
/// assert!(has(&doc, &["a".to_string()]));
/// assert!(has(&doc, &["list".to_string(), "0".to_string()]));
/// assert!(!has(&doc, &["list".to_string(), "1".to_string()]));
/// ```
pub fn has(val: &Value, path: &[String]) -> bool {
    get(val, path).is_some()
}

/// Set `value` at `path`, creating missing intermediate containers.
///
/// A missing (or `null`) intermediate becomes an array when the step after
/// it is numeric and an object otherwise. An array step may address an
/// existing index or the index one past the end, which appends. The root
/// path replaces the whole document. The document is left untouched when
/// the path cannot be stored.
///
/// # Errors
///
/// - [`JsonPointerError::NotFound`] when an intermediate slot holds a scalar
/// - [`JsonPointerError::InvalidIndex`] when an array step is not an index or
///   lies beyond the end of the array
///
/// # Example
///
/// ```
/// use json_reset_pointer::set;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set(&mut doc, &["a".to_string(), "0".to_string()], json!(1)).unwrap();
/// assert_eq!(doc, json!({"a": [1]}));
/// ```
pub fn set(doc: &mut Value, path: &[String], value: Value) -> Result<(), JsonPointerError> {
    let Some((last, init)) = path.split_last() else {
        *doc = value;
        return Ok(());
    };

    check_settable(doc, path)?;

    let mut current = doc;
    for (depth, path_step) in init.iter().enumerate() {
        // init is non-empty here, so depth + 1 is either in init or is `last`
        let next = init.get(depth + 1).unwrap_or(last);
        current = descend_or_create(current, path_step, next)?;
    }
    store(current, last, value)
}

/// Where a read-only walk of a `set` path currently stands.
enum Slot<'a> {
    At(&'a Value),
    /// A container `set` would create, still empty.
    Fresh { array: bool },
}

fn fresh_for(next_step: Option<&String>) -> Slot<'static> {
    Slot::Fresh {
        array: next_step.is_some_and(|step| Key::from_step(step).is_index()),
    }
}

/// Walk `path` without mutating `doc`, failing where [`set`] would fail.
fn check_settable(doc: &Value, path: &[String]) -> Result<(), JsonPointerError> {
    let mut slot = if doc.is_null() { Slot::Fresh { array: false } } else { Slot::At(doc) };
    for (depth, step) in path.iter().enumerate() {
        let next = path.get(depth + 1);
        slot = match slot {
            Slot::At(Value::Object(map)) => match map.get(step) {
                Some(child) if !child.is_null() => Slot::At(child),
                _ => fresh_for(next),
            },
            Slot::At(Value::Array(arr)) => {
                let idx: usize = step.parse().map_err(|_| JsonPointerError::InvalidIndex)?;
                match arr.get(idx) {
                    Some(child) if !child.is_null() => Slot::At(child),
                    Some(_) => fresh_for(next),
                    None if idx == arr.len() => fresh_for(next),
                    None => return Err(JsonPointerError::InvalidIndex),
                }
            }
            Slot::At(_) => return Err(JsonPointerError::NotFound),
            Slot::Fresh { array: true } => {
                let idx: usize = step.parse().map_err(|_| JsonPointerError::InvalidIndex)?;
                if idx != 0 {
                    return Err(JsonPointerError::InvalidIndex);
                }
                fresh_for(next)
            }
            Slot::Fresh { array: false } => fresh_for(next),
        };
    }
    Ok(())
}

fn empty_container_for(next_step: &str) -> Value {
    if Key::from_step(next_step).is_index() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn descend_or_create<'a>(
    current: &'a mut Value,
    step: &str,
    next_step: &str,
) -> Result<&'a mut Value, JsonPointerError> {
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => {
            let slot = map
                .entry(step.to_string())
                .or_insert_with(|| empty_container_for(next_step));
            if slot.is_null() {
                *slot = empty_container_for(next_step);
            }
            Ok(slot)
        }
        Value::Array(arr) => {
            let idx: usize = step.parse().map_err(|_| JsonPointerError::InvalidIndex)?;
            if idx == arr.len() {
                arr.push(empty_container_for(next_step));
            }
            let slot = arr.get_mut(idx).ok_or(JsonPointerError::InvalidIndex)?;
            if slot.is_null() {
                *slot = empty_container_for(next_step);
            }
            Ok(slot)
        }
        _ => Err(JsonPointerError::NotFound),
    }
}

fn store(container: &mut Value, step: &str, value: Value) -> Result<(), JsonPointerError> {
    if container.is_null() {
        *container = Value::Object(Map::new());
    }
    match container {
        Value::Object(map) => {
            map.insert(step.to_string(), value);
            Ok(())
        }
        Value::Array(arr) => {
            let idx: usize = step.parse().map_err(|_| JsonPointerError::InvalidIndex)?;
            match idx.cmp(&arr.len()) {
                std::cmp::Ordering::Less => {
                    arr[idx] = value;
                    Ok(())
                }
                std::cmp::Ordering::Equal => {
                    arr.push(value);
                    Ok(())
                }
                std::cmp::Ordering::Greater => Err(JsonPointerError::InvalidIndex),
            }
        }
        _ => Err(JsonPointerError::NotFound),
    }
}
