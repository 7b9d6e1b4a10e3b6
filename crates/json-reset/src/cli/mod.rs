//! Core logic behind the command-line tools.
//!
//! - `json-reset`     : reset a document (stdin) with a recorded history
//! - `json-reset-diff`: print the invertible history between two documents

use std::io::{self, Read, Write};

use serde_json::{json, Value};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::codec::json::{from_json_patch, to_json_patch};
use crate::diff::diff;
use crate::logger::TracingLogger;
use crate::reset::reset_logged;
use crate::types::{ResetConfig, ResetError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Reset(#[from] ResetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Usage(&'static str),
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Install the stderr log subscriber used by the binaries.
///
/// Reads `RUST_LOG`; defaults to `info` so per-operation reset lines show.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().with_target(false))
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────

/// Shared `main` of the binaries.
///
/// Installs logging, requires a first argument (`usage` is printed when it is
/// missing), reads the document from stdin and prints whatever `f` returns for
/// the first argument, the remaining arguments and the trimmed input. Any
/// failure goes to stderr with exit status 1.
pub fn run_main<F>(usage: &'static str, f: F)
where
    F: FnOnce(&str, &[String], &str) -> Result<String, CliError>,
{
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run_with_io(usage, &args, io::stdin().lock(), io::stdout().lock(), f) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run_with_io<R, W, F>(usage: &'static str, args: &[String], mut input: R, mut output: W, f: F) -> Result<(), CliError>
where
    R: Read,
    W: Write,
    F: FnOnce(&str, &[String], &str) -> Result<String, CliError>,
{
    let (first, rest) = args.split_first().ok_or(CliError::Usage(usage))?;
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    let result = f(first, rest, buf.trim())?;
    writeln!(output, "{result}")?;
    Ok(())
}

// ── json-reset ────────────────────────────────────────────────────────────

/// Reset a document with a history.
///
/// `data_json`: the document to reset.
/// `history_json`: the operation list as a JSON array.
/// `config_json`: optional [`ResetConfig`] object (camelCase keys).
///
/// Returns `{"data": ..., "remaining": [...]}` as pretty-printed JSON. Each
/// processed operation is logged through [`TracingLogger`].
pub fn run_reset(
    data_json: &str,
    history_json: &str,
    config_json: Option<&str>,
) -> Result<String, CliError> {
    let mut data: Value = serde_json::from_str(data_json)?;
    let history = from_json_patch(&serde_json::from_str(history_json)?)?;
    let config = match config_json {
        Some(raw) => ResetConfig::from_json_str(raw)?,
        None => ResetConfig::default(),
    };

    let remaining = reset_logged(
        &mut data,
        &history,
        &config.options,
        &TracingLogger,
        config.name.as_deref(),
    );

    let out = json!({
        "data": data,
        "remaining": to_json_patch(&remaining),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

// ── json-reset-diff ───────────────────────────────────────────────────────

/// Diff two documents.
///
/// Returns the operations that turn `current_json` back into
/// `original_json`, as a pretty-printed JSON array.
pub fn run_diff(current_json: &str, original_json: &str) -> Result<String, CliError> {
    let current: Value = serde_json::from_str(current_json)?;
    let original: Value = serde_json::from_str(original_json)?;
    let ops = diff(Some(&current), Some(&original));
    Ok(serde_json::to_string_pretty(&to_json_patch(&ops))?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
