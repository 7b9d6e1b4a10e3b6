//! json-reset-util - value utilities shared by the json-reset crates.

pub mod is_empty;
pub mod json_equal;

pub use is_empty::is_empty_container;
pub use json_equal::{deep_equal, deep_equal_opt};
