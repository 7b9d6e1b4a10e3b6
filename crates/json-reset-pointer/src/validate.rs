//! Limits and syntax checks for pointers read from untrusted input.

use thiserror::Error;

/// Longest accepted pointer string, in bytes.
const MAX_POINTER_LENGTH: usize = 1024;

/// Deepest accepted path.
const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("PATH_TOO_LONG")]
    PathTooLong,
}

/// Check the syntax of a JSON Pointer string.
///
/// The root pointer `""` is valid; any other pointer must start with `/`
/// and stay under the length limit.
///
/// ```
/// use json_reset_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/option/0").unwrap();
/// validate_json_pointer("option").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    match pointer {
        "" => Ok(()),
        p if !p.starts_with('/') => Err(ValidationError::PointerInvalid),
        p if p.len() > MAX_POINTER_LENGTH => Err(ValidationError::PointerTooLong),
        _ => Ok(()),
    }
}

/// Check the depth of a parsed path.
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    Ok(())
}
