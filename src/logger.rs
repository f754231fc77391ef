//! File logging setup.
//!
//! The TUI owns the terminal, so log records go to a file in the cache
//! directory and only when `[logging] enabled = true`. Everything else in the
//! crate logs through the `log` macros.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;

/// Parse a configured level name.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => anyhow::bail!("unknown log level '{other}', expected error, warn, info, debug, trace or off"),
    }
}

/// Global logger installation
pub struct Logger;

impl Logger {
    /// Install the global file logger if logging is enabled.
    ///
    /// Returns the log file path when a logger was installed.
    pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
        if !config.enabled {
            return Ok(None);
        }

        let level = parse_level(&config.level)?;
        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Self::dispatch(level)
            .chain(file)
            .apply()
            .context("A global logger is already installed")?;

        log::info!("Logging to {} at level {}", path.display(), level);
        Ok(Some(path))
    }

    /// Dispatch with the crate's line format and level, without an output.
    #[must_use]
    pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ));
            })
            .level(level)
    }

    /// Log file location inside the user's cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}
