//! Conversions from the path shapes callers hand around into a [`Path`].

use crate::types::Path;
use crate::util::{parse_dotted_path, parse_json_pointer};

/// Anything that can name a location in a document.
///
/// - `"/a/0"`: JSON Pointer (leading `/`)
/// - `"a.0"`, `"a[0]"`: dotted path
/// - `3`: a single array index
/// - `["a", "0"]`: pre-split steps
///
/// # Example
///
/// ```
/// use json_reset_pointer::IntoPath;
///
/// assert_eq!("option.1".into_path(), vec!["option", "1"]);
/// assert_eq!("/option/1".into_path(), vec!["option", "1"]);
/// assert_eq!(["a.b", "c"].into_path(), vec!["a.b", "c"]);
/// assert_eq!(2usize.into_path(), vec!["2"]);
/// ```
pub trait IntoPath {
    fn into_path(self) -> Path;
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        if self.starts_with('/') {
            parse_json_pointer(self)
        } else {
            parse_dotted_path(self)
        }
    }
}

impl IntoPath for &String {
    fn into_path(self) -> Path {
        self.as_str().into_path()
    }
}

impl IntoPath for usize {
    fn into_path(self) -> Path {
        vec![self.to_string()]
    }
}

impl IntoPath for Path {
    fn into_path(self) -> Path {
        self
    }
}

impl IntoPath for &[String] {
    fn into_path(self) -> Path {
        self.to_vec()
    }
}

impl IntoPath for &Path {
    fn into_path(self) -> Path {
        self.clone()
    }
}

impl IntoPath for &[&str] {
    fn into_path(self) -> Path {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    fn into_path(self) -> Path {
        self.iter().map(|s| s.to_string()).collect()
    }
}
