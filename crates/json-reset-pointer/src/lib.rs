//! Structural paths for json-reset.
//!
//! A path is a `Vec<String>` of steps from the document root. Its canonical
//! string form is a [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901);
//! callers may also use dotted paths (`a.b.0`) through [`IntoPath`].
//!
//! # Example
//!
//! ```
//! use json_reset_pointer::{format_json_pointer, get, parse_json_pointer, set};
//! use serde_json::json;
//!
//! let path = parse_json_pointer("/foo/bar");
//! assert_eq!(format_json_pointer(&path), "/foo/bar");
//!
//! let mut doc = json!({"foo": {}});
//! set(&mut doc, &path, json!(42)).unwrap();
//! assert_eq!(get(&doc, &path), Some(&json!(42)));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Key, Path, PathStep};

pub mod validate;
pub use validate::{validate_json_pointer, validate_path, ValidationError};

pub mod util;
pub use util::{
    escape_component, format_json_pointer, is_valid_index, parse_dotted_path, parse_json_pointer,
    unescape_component,
};

pub mod get;
pub use get::{get, get_mut, has, set};

pub mod into_path;
pub use into_path::IntoPath;

/// Why [`set`] could not store a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
}
