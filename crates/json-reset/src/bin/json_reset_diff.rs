//! `json-reset-diff`: print the history that turns a document back into
//! its original.
//!
//! Usage:
//!   json-reset-diff '<original-json>'
//!
//! The current document is read from stdin.

use json_reset::cli::{run_diff, run_main};

fn main() {
    run_main("First argument must be the original JSON document.", |original, _, current| {
        run_diff(current, original)
    });
}
