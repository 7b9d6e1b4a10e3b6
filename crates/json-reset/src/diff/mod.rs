//! Invertible diff: the operation list that turns one document into another.
//!
//! Every operation that overwrites or deletes a value is preceded by a `test`
//! carrying that value, so a reset can tell whether the slot still holds what
//! the history expects.

use json_reset_util::deep_equal;
use serde_json::{Map, Value};

use crate::types::Operation;

// ── Public API ────────────────────────────────────────────────────────────

/// Generate the operations that turn `current` into `original`.
///
/// Absent documents count as empty objects.
///
/// ```
/// use json_reset::{diff, Operation};
/// use serde_json::json;
///
/// let ops = diff(Some(&json!({"name": "Julia"})), Some(&json!({"name": "Mike"})));
/// assert_eq!(ops.len(), 2);
/// assert_eq!(ops[0], Operation::Test { path: vec!["name".into()], value: json!("Julia") });
/// assert_eq!(ops[1], Operation::Replace { path: vec!["name".into()], value: json!("Mike") });
///
/// assert!(diff(None, None).is_empty());
/// ```
pub fn diff(current: Option<&Value>, original: Option<&Value>) -> Vec<Operation> {
    let empty = Value::Object(Map::new());
    let mut ops = Vec::new();
    diff_at_path(&mut ops, &[], current.unwrap_or(&empty), original.unwrap_or(&empty));
    ops
}

// ── Core recursive differ ─────────────────────────────────────────────────

fn child(path: &[String], step: impl Into<String>) -> Vec<String> {
    let mut p = path.to_vec();
    p.push(step.into());
    p
}

fn diff_at_path(ops: &mut Vec<Operation>, path: &[String], src: &Value, dst: &Value) {
    if deep_equal(src, dst) {
        return;
    }
    match (src, dst) {
        (Value::Object(s), Value::Object(d)) => diff_obj(ops, path, s, d),
        (Value::Array(s), Value::Array(d)) => diff_arr(ops, path, s, d),
        _ => diff_val(ops, path, src, dst),
    }
}

fn diff_val(ops: &mut Vec<Operation>, path: &[String], src: &Value, dst: &Value) {
    ops.push(Operation::Test { path: path.to_vec(), value: src.clone() });
    ops.push(Operation::Replace { path: path.to_vec(), value: dst.clone() });
}

fn push_remove(ops: &mut Vec<Operation>, path: Vec<String>, old: &Value) {
    ops.push(Operation::Test { path: path.clone(), value: old.clone() });
    ops.push(Operation::Remove { path, value: Some(old.clone()) });
}

fn diff_obj(
    ops: &mut Vec<Operation>,
    path: &[String],
    src: &Map<String, Value>,
    dst: &Map<String, Value>,
) {
    // Remove keys in src that are not in dst
    for (key, src_val) in src {
        if !dst.contains_key(key) {
            push_remove(ops, child(path, key.as_str()), src_val);
        }
    }
    // Add/change keys in dst
    for (key, dst_val) in dst {
        let p = child(path, key.as_str());
        match src.get(key) {
            None => ops.push(Operation::Add { path: p, value: dst_val.clone() }),
            Some(src_val) => diff_at_path(ops, &p, src_val, dst_val),
        }
    }
}

// ── Arrays ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Eql,
    Del,
    Ins,
}

/// Edit script from `src` to `dst` over whole elements, following a longest
/// common subsequence. Deletions come before insertions at the same spot.
fn lcs_script(src: &[Value], dst: &[Value]) -> Vec<Edit> {
    let (n, m) = (src.len(), dst.len());
    let width = m + 1;
    // table[i * width + j] = LCS length of src[i..] and dst[j..]
    let mut table = vec![0usize; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if deep_equal(&src[i], &dst[j]) {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut script = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if deep_equal(&src[i], &dst[j]) {
            script.push(Edit::Eql);
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            script.push(Edit::Del);
            i += 1;
        } else {
            script.push(Edit::Ins);
            j += 1;
        }
    }
    script.extend(std::iter::repeat(Edit::Del).take(n - i));
    script.extend(std::iter::repeat(Edit::Ins).take(m - j));
    script
}

fn diff_arr(ops: &mut Vec<Operation>, path: &[String], src: &[Value], dst: &[Value]) {
    let (mut s, mut d) = (0, 0);
    // Index in the array as it looks after the ops emitted so far
    let mut at = 0usize;

    for edit in lcs_script(src, dst) {
        match edit {
            Edit::Eql => {
                s += 1;
                d += 1;
                at += 1;
            }
            Edit::Del => {
                push_remove(ops, child(path, at.to_string()), &src[s]);
                s += 1;
            }
            Edit::Ins => {
                ops.push(Operation::Add {
                    path: child(path, at.to_string()),
                    value: dst[d].clone(),
                });
                d += 1;
                at += 1;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
