//! Logging utilities
//!
//! Logs go to a rotated file under the user's cache directory; stdout and
//! stderr belong to the TUI while it is running.
use std::fs::remove_file;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use env_logger::{Builder, Target, fmt::TimestampPrecision};
use file_rotate::{
    ContentLimit, FileRotate, compression::Compression, suffix::AppendCount,
};
use log::LevelFilter;

/// Maximum number of lines per log file before rotation.
const LOG_ROTATE_LINES: usize = 10_000;

/// Number of rotated files kept around.
const LOG_ROTATE_KEEP: usize = 2;

/// The path of the application log file.
///
/// # Errors
///
/// Returns an error if the user's base directories cannot be determined.
pub fn log_file_path() -> Result<PathBuf>
{
    let base_dirs = BaseDirs::new().context("Failed to determine base directories")?;

    Ok(base_dirs.cache_dir().join("termfolio.log"))
}

/// Initializes the logging system for the application.
///
/// Sets up the log file target, level filters and timestamp format.
///
/// # Errors
///
/// Returns an error if the log file location cannot be determined.
pub fn init_logging() -> Result<()>
{
    let log_writer = FileRotate::new(
        log_file_path()?,
        AppendCount::new(LOG_ROTATE_KEEP),
        ContentLimit::Lines(LOG_ROTATE_LINES),
        Compression::None,
        None,
    );

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("termfolio", LevelFilter::Debug)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Pipe(Box::new(log_writer)))
        .init();

    Ok(())
}

/// Removes the log file.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_log_file() -> Result<()>
{
    let log_path = log_file_path()?;

    if log_path.exists()
    {
        remove_file(&log_path).context("Failed to remove the log file")?;
    }

    Ok(())
}
