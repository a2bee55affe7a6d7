//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so it logs to a file
//! or nowhere. The command-line tools log to stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

const DEFAULT_FILTER: &str = "lyricount=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send logs to stderr, filtered by `RUST_LOG`.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Msg(format!("Failed to install log subscriber: {e}")))
}

/// Append logs to `path`, filtered by `RUST_LOG`.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(e, path.to_path_buf()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Msg(format!("Failed to install log subscriber: {e}")))
}
