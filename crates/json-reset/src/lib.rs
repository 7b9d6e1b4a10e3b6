//! Best-effort reset of JSON documents from a recorded change history.
//!
//! A history is the invertible operation list produced by [`diff`]. Replaying
//! it with [`reset`] restores the original document while tolerating edits
//! made to the data in the meantime. Array elements are matched by value near
//! their recorded index. Operations that would clobber someone else's edit are
//! handed back instead of applied.
//!
//! # Example
//!
//! ```
//! use json_reset::{diff, reset, OperationOptions};
//! use serde_json::json;
//!
//! let original = json!({"option": [0, 1, 2, 3]});
//! let changed = json!({"option": [0, 1, 2, 3, 4]});
//! let history = diff(Some(&changed), Some(&original));
//!
//! // someone else inserted 999 after the history was recorded
//! let mut data = json!({"option": [0, 999, 1, 2, 3, 4]});
//! let remaining = reset(&mut data, &history, &OperationOptions::default());
//!
//! assert_eq!(data, json!({"option": [0, 999, 1, 2, 3]}));
//! assert!(remaining.is_empty());
//! ```

pub mod types;
pub use types::{Operation, OperationOptions, Path, ResetConfig, ResetError};

pub mod path;
pub mod context;
pub mod find;

pub mod apply;
pub use apply::{add, remove, replace};

pub mod clean;
pub use clean::clean;

pub mod logger;
pub use logger::{Logger, TracingLogger};

pub mod reset;
pub use reset::{reset, reset_logged, reset_optional};

mod may_change;
pub use may_change::may_change;

pub mod diff;
pub use diff::diff;

pub mod codec;
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};

pub mod cli;
