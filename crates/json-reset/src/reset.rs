//! The reset pass: replays a change history against live data.
//!
//! Operations are applied best-effort and in order. Each `test` operation
//! records the value the next `replace` expects to overwrite. Operations that
//! cannot be applied safely are returned to the caller instead of failing the
//! whole pass.

use serde_json::Value;

use crate::apply::{add, remove, replace};
use crate::clean::clean;
use crate::logger::{reset_message, Logger};
use crate::types::{Operation, OperationOptions};

/// Reset `data` using `history`, returning the operations that were not
/// executed, in their original order.
///
/// ```
/// use json_reset::{diff, reset, OperationOptions};
/// use serde_json::json;
///
/// let original = json!({"name": "Mike"});
/// let mut data = json!({"name": "Julia", "language": "en"});
/// let history = diff(Some(&data), Some(&original));
///
/// let remaining = reset(&mut data, &history, &OperationOptions::default());
/// assert_eq!(data, original);
/// assert!(remaining.is_empty());
/// ```
pub fn reset(data: &mut Value, history: &[Operation], opts: &OperationOptions) -> Vec<Operation> {
    run(data, history, opts, None, None)
}

/// [`reset`] over possibly-absent inputs.
///
/// Absent data or absent history is a no-op: `data` is left as it is, clean
/// pass included, and nothing is returned.
pub fn reset_optional(
    data: Option<&mut Value>,
    history: Option<&[Operation]>,
    opts: &OperationOptions,
) -> Vec<Operation> {
    match (data, history) {
        (Some(data), Some(history)) => reset(data, history, opts),
        _ => Vec::new(),
    }
}

/// [`reset`] that reports every processed operation to `logger`.
///
/// Executed operations go to `info`. Skipped operations go to `warn`, as do
/// `test` operations, which never execute. `name` labels the document in
/// each line.
pub fn reset_logged(
    data: &mut Value,
    history: &[Operation],
    opts: &OperationOptions,
    logger: &dyn Logger,
    name: Option<&str>,
) -> Vec<Operation> {
    run(data, history, opts, Some(logger), name)
}

fn run(
    data: &mut Value,
    history: &[Operation],
    opts: &OperationOptions,
    logger: Option<&dyn Logger>,
    name: Option<&str>,
) -> Vec<Operation> {
    let (_, remaining) = history.iter().fold(
        (None::<&Value>, Vec::new()),
        |(mut old_value, mut remaining), op| {
            let executed = match op {
                Operation::Test { value, .. } => {
                    old_value = Some(value);
                    false
                }
                Operation::Remove { path, value } => {
                    remove(data, path, value.as_ref().or(old_value), opts)
                }
                Operation::Add { path, value } => add(data, path, value.clone(), opts),
                Operation::Replace { path, value } => {
                    replace(data, path, old_value, value.clone(), opts)
                }
            };

            if !executed && !matches!(op, Operation::Test { .. }) {
                remaining.push(op.clone());
            }
            if let Some(logger) = logger {
                let line = reset_message(op, executed, name);
                if executed {
                    logger.info(&line);
                } else {
                    logger.warn(&line);
                }
            }
            (old_value, remaining)
        },
    );

    if opts.clean {
        clean(data);
    }

    tracing::debug!(
        operations = history.len(),
        remaining = remaining.len(),
        clean = opts.clean,
        "reset finished"
    );
    remaining
}
