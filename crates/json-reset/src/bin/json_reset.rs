//! `json-reset`: reset a document with a recorded history.
//!
//! Usage:
//!   json-reset '<history-array-json>' ['<options-json>']
//!
//! The document is read from stdin. Prints `{"data": ..., "remaining": [...]}`;
//! per-operation log lines go to stderr (`RUST_LOG` controls the level).

use json_reset::cli::{run_main, run_reset};

fn main() {
    run_main("First argument must be a JSON operation array.", |history, rest, data| {
        run_reset(data, history, rest.first().map(String::as_str))
    });
}
