//! Splits an operation path into its parent path and final key.

use json_reset_pointer::{format_json_pointer, Key};

/// Where a slot lives: the key inside its container and the container's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentPath {
    /// Key of the slot within the parent container.
    pub key: Key,
    /// JSON Pointer of the parent container (`""` for the root).
    pub pointer: String,
    /// Steps of the parent container.
    pub parent: Vec<String>,
}

/// Resolve the parent of `path`.
///
/// Returns `None` for the root path, which has no parent slot.
///
/// ```
/// use json_reset::path::resolve_parent;
/// use json_reset_pointer::Key;
///
/// let p = resolve_parent(&["option".to_string(), "3".to_string()]).unwrap();
/// assert_eq!(p.key, Key::Index(3));
/// assert_eq!(p.pointer, "/option");
/// ```
pub fn resolve_parent(path: &[String]) -> Option<ParentPath> {
    let (last, parent) = path.split_last()?;
    Some(ParentPath {
        key: Key::from_step(last),
        pointer: format_json_pointer(parent),
        parent: parent.to_vec(),
    })
}
