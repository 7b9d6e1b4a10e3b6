//! Logger side-channel for reset calls.
//!
//! A reset can report every operation it processes to a caller-provided
//! [`Logger`]. [`TracingLogger`] forwards those lines to `tracing`.

use crate::types::Operation;

/// Green check mark, prefixed to executed operations.
pub const CHECK: &str = "\u{1b}[32;1m✔\u{1b}[0m";
/// Yellow `O`, prefixed to skipped and `test` operations.
pub const WARN: &str = "\u{1b}[33;1mO\u{1b}[0m";

/// Sink for per-operation reset messages.
pub trait Logger {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn verbose(&self, message: &str);
}

/// A [`Logger`] that forwards to the `tracing` macros; `verbose` maps to
/// `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn verbose(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Format the line logged for one processed operation.
///
/// The op name is underlined; `name` labels the document being reset.
///
/// ```
/// use json_reset::logger::{reset_message, CHECK};
/// use json_reset::Operation;
/// use serde_json::json;
///
/// let op = Operation::Add { path: vec!["name".into()], value: json!("Mike") };
/// let line = reset_message(&op, true, Some("name.js"));
/// assert!(line.starts_with(CHECK));
/// assert!(line.ends_with("during reset path \"/name\" of name.js"));
/// ```
pub fn reset_message(op: &Operation, executed: bool, name: Option<&str>) -> String {
    let mark = if executed { CHECK } else { WARN };
    let of_name = name.map(|n| format!(" of {n}")).unwrap_or_default();
    format!(
        "{mark} \u{1b}[4m{}\u{1b}[0m during reset path \"{}\"{of_name}",
        op.op_name(),
        op.pointer()
    )
}
