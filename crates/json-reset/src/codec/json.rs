//! JSON codec for operation lists.
//!
//! Operations are RFC 6902 shaped objects: `{"op", "path", "value"}` with
//! `path` as a JSON Pointer string. `remove` carries `value` only when it
//! knows what it removes.

use json_reset_pointer::{format_json_pointer, parse_json_pointer, validate_json_pointer, validate_path};
use serde_json::{json, Map, Value};

use crate::types::{Operation, ResetError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(v: &Value) -> Result<Vec<String>, ResetError> {
    let s = v
        .as_str()
        .ok_or_else(|| ResetError::InvalidOp("path must be a string".into()))?;
    validate_json_pointer(s)?;
    let path = parse_json_pointer(s);
    validate_path(&path)?;
    Ok(path)
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an [`Operation`] to its JSON form.
pub fn to_json(op: &Operation) -> Value {
    match op {
        Operation::Remove { path, value } => {
            let mut m = Map::new();
            m.insert("op".into(), json!("remove"));
            m.insert("path".into(), encode_path(path));
            if let Some(v) = value {
                m.insert("value".into(), v.clone());
            }
            Value::Object(m)
        }
        Operation::Test { path, value }
        | Operation::Add { path, value }
        | Operation::Replace { path, value } => json!({
            "op": op.op_name(),
            "path": encode_path(path),
            "value": value
        }),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation.
///
/// # Errors
///
/// [`ResetError::InvalidOp`] for non-objects, unknown `op` names and missing
/// fields; [`ResetError::InvalidPointer`] for malformed paths.
pub fn from_json(v: &Value) -> Result<Operation, ResetError> {
    let obj = v
        .as_object()
        .ok_or_else(|| ResetError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| ResetError::InvalidOp("missing 'op' field".into()))?;
    let path = decode_path(
        obj.get("path")
            .ok_or_else(|| ResetError::InvalidOp(format!("{op_str} requires 'path'")))?,
    )?;
    let required_value = || {
        obj.get("value")
            .cloned()
            .ok_or_else(|| ResetError::InvalidOp(format!("{op_str} requires 'value'")))
    };

    match op_str {
        "test" => Ok(Operation::Test { path, value: required_value()? }),
        "remove" => Ok(Operation::Remove { path, value: obj.get("value").cloned() }),
        "add" => Ok(Operation::Add { path, value: required_value()? }),
        "replace" => Ok(Operation::Replace { path, value: required_value()? }),
        other => Err(ResetError::InvalidOp(format!("unknown op '{other}'"))),
    }
}

/// Deserialize a JSON array of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Operation>, ResetError> {
    v.as_array()
        .ok_or_else(|| ResetError::InvalidOp("operation list must be an array".into()))?
        .iter()
        .map(from_json)
        .collect()
}
