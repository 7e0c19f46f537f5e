//! Error types for haul-summary.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for a whole run
//!   - [`InputError`] - Log file reading failures (missing file, I/O, bad UTF-8)
//!   - [`OutputError`] - Report file writing failures
//!   - [`ConfigError`] - Config file read/parse failures
//!   - `std::io::Error` - Console printing failures
//!
//! # Recovery Strategy
//!
//! Malformed log lines are **not errors**: lines no recognizer matches are simply
//! ignored. Input errors abort the run before any report is produced. Output errors
//! happen after the report was already printed to the console; that output stands.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use haul_summary::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _lines = read_log_file()?;
///     Ok(())
/// }
/// # fn read_log_file() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the activity log.
    ///
    /// **Recovery**: none. Print the message and exit non-zero.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Failed to write the summary report file.
    ///
    /// The console copy of the report has already been printed when this occurs.
    #[error("Failed to write output: {0}")]
    Output(#[from] OutputError),

    /// Printing the report to the console failed (e.g. a closed pipe).
    #[error("Console error: {0}")]
    Console(#[source] std::io::Error),

    /// Failed to load the configuration file.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors encountered when reading the activity log.
#[derive(Debug, Error)]
pub enum InputError {
    /// The log file does not exist at the given path.
    ///
    /// Checked up front, before any processing begins.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use haul_summary::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("logs.txt")
    /// };
    /// assert!(err.to_string().contains("logs.txt"));
    /// ```
    #[error("File '{}' does not exist in the current directory.", path.display())]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Any other I/O failure while reading: permissions, disk errors, or
    /// content that is not valid UTF-8.
    #[error("Error reading log file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when writing the report file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating or writing the report file failed.
    #[error("Error writing to output file {}: {source}", path.display())]
    Write {
        /// Destination path of the report.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
