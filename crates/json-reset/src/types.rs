//! Core types: operations, options and errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use json_reset_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

/// Failures that are not history/data divergence.
///
/// Divergence is never an error; it shows up as operations left in the
/// remaining list returned by [`crate::reset`].
#[derive(Debug, Error)]
pub enum ResetError {
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
    #[error("INVALID_POINTER: {0}")]
    InvalidPointer(#[from] json_reset_pointer::ValidationError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ── Operation ─────────────────────────────────────────────────────────────

/// A recorded change operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Records the value at `path` before the next operation touches it.
    Test { path: Path, value: Value },
    /// Removes `value` from `path`. Without a value the preceding `test`
    /// value is expected instead.
    Remove { path: Path, value: Option<Value> },
    Add { path: Path, value: Value },
    /// Sets `path` to `value`; the expected prior value comes from the
    /// preceding `test`.
    Replace { path: Path, value: Value },
}

impl Operation {
    /// Returns the operation name string.
    pub fn op_name(&self) -> &'static str {
        match self {
            Operation::Test { .. } => "test",
            Operation::Remove { .. } => "remove",
            Operation::Add { .. } => "add",
            Operation::Replace { .. } => "replace",
        }
    }

    /// Returns the path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Operation::Test { path, .. }
            | Operation::Remove { path, .. }
            | Operation::Add { path, .. }
            | Operation::Replace { path, .. } => path,
        }
    }

    /// Returns the value carried by the operation, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Operation::Test { value, .. }
            | Operation::Add { value, .. }
            | Operation::Replace { value, .. } => Some(value),
            Operation::Remove { value, .. } => value.as_ref(),
        }
    }

    /// The path as a JSON Pointer string.
    pub fn pointer(&self) -> String {
        json_reset_pointer::format_json_pointer(self.path())
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Safety switches for the mutation primitives and the reset pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationOptions {
    /// Match array elements only at their recorded index instead of
    /// searching outward from it.
    pub exact: bool,
    /// Skip array add/replace when the value is already in the array.
    pub check_duplicate: bool,
    /// Apply operations even when the current data disagrees with history,
    /// creating missing arrays as needed.
    pub force: bool,
    /// Let `replace` fill a slot that no longer exists.
    pub add_not_found: bool,
    /// Prune empty arrays and objects after the reset pass.
    pub clean: bool,
}

impl Default for OperationOptions {
    fn default() -> Self {
        Self {
            exact: false,
            check_duplicate: true,
            force: false,
            add_not_found: true,
            clean: true,
        }
    }
}

impl OperationOptions {
    /// Read options from a JSON object with camelCase keys. Missing keys
    /// keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ResetError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Options for a reset call together with the label used in log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResetConfig {
    #[serde(flatten)]
    pub options: OperationOptions,
    /// Appended to log lines as ` of <name>`.
    pub name: Option<String>,
}

impl ResetConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ResetError> {
        Ok(serde_json::from_str(json)?)
    }
}
