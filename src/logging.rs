use crate::config::Settings;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send tracing output to the log file in the data directory.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let path = settings.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("Invalid log filter: {}", settings.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(())
}
