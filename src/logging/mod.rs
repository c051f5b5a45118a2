//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so tracing output goes to a daily file
//! named `mylist_<date>.log` in the configured log directory (default:
//! `~/.local/share/mylist/logs/`). Nothing is installed when logging is
//! disabled, and the `tracing` macros become no-ops.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path when logging is
/// enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(log_file_name(&date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(Some(path))
}

fn log_file_name(date: &str) -> String {
    format!("mylist_{}.log", date)
}

// Expand ~ in log_dir
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}
