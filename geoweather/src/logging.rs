//! Tracing setup
//!
//! The terminal belongs to the UI, so logs only go to a file. Without
//! `--log-file` no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber. Filter comes from `RUST_LOG`, default `info`.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
