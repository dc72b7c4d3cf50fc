//! File logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file. Logging is off
//! by default and enabled through the `[logging]` config section.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initializes the global logger from the logging configuration.
///
/// A no-op when logging is disabled; must be called at most once.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}

/// Default log location under the platform data directory.
fn default_log_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("offboard").join("offboard.log"))
}
