//! Addressing info for one operation: which container holds the slot, what
//! is in it now, and whether it is an array or object slot.

use json_reset_pointer::{get, Key};
use serde_json::{Map, Value};

use crate::path::{resolve_parent, ParentPath};

/// The container that directly holds the addressed slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target<'a> {
    /// No container at the parent path (absent or a nested `null`).
    Missing,
    Array(&'a Vec<Value>),
    Object(&'a Map<String, Value>),
    /// The parent path holds a scalar, or the root itself is not a
    /// container; nothing can be stored under it.
    Scalar(&'a Value),
}

/// Container semantics for the slot: splice-by-index or key-delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Object,
}

/// Addressing info for a `(data, path)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Context<'a> {
    pub target: Target<'a>,
    pub key: Key,
    /// Current value of the slot, `None` when absent.
    pub value: Option<&'a Value>,
    /// JSON Pointer of the parent container.
    pub pointer: String,
    /// Steps of the parent container.
    pub parent: Vec<String>,
}

impl<'a> Context<'a> {
    /// True iff the slot exists in its container.
    pub fn has(&self) -> bool {
        self.value.is_some()
    }

    /// Array vs. object semantics.
    ///
    /// An existing container decides by its own kind. A missing container is
    /// inferred from the key: numeric keys mean an array. A scalar parent has
    /// no container kind.
    pub fn kind(&self) -> Option<ContainerKind> {
        match self.target {
            Target::Array(_) => Some(ContainerKind::Array),
            Target::Object(_) => Some(ContainerKind::Object),
            Target::Scalar(_) => None,
            Target::Missing if self.key.is_index() => Some(ContainerKind::Array),
            Target::Missing => Some(ContainerKind::Object),
        }
    }

    /// Full path of the addressed slot.
    pub fn slot_path(&self) -> Vec<String> {
        let mut path = self.parent.clone();
        path.push(self.key.as_step());
        path
    }
}

/// Resolve the context of `path` within `data`.
///
/// Returns `None` for the root path only; absent containers resolve to
/// [`Target::Missing`]. A non-container root resolves to [`Target::Scalar`]
/// since nothing can be attached above it.
pub fn resolve<'a>(data: &'a Value, path: &[String]) -> Option<Context<'a>> {
    let ParentPath { key, pointer, parent } = resolve_parent(path)?;

    let target = match get(data, &parent) {
        Some(Value::Null) if parent.is_empty() => Target::Scalar(data),
        None | Some(Value::Null) => Target::Missing,
        Some(Value::Array(arr)) => Target::Array(arr),
        Some(Value::Object(map)) => Target::Object(map),
        Some(scalar) => Target::Scalar(scalar),
    };

    let value = match (target, &key) {
        (Target::Array(arr), Key::Index(idx)) => arr.get(*idx),
        (Target::Object(map), key) => map.get(&key.as_step()),
        _ => None,
    };

    Some(Context { target, key, value, pointer, parent })
}
