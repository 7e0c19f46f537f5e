//! Log input source.
//!
//! The activity log is read once into memory. The cross-reference pass needs
//! every line again, so the full sequence is buffered rather than streamed.

use crate::model::error::InputError;
use crate::model::LogLine;
use std::path::Path;

pub mod file;

pub use file::{split_lines, FileSource};

/// Fail fast if the activity log is absent, before anything else runs.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if nothing exists at `path`.
pub fn require_input(path: &Path) -> Result<(), InputError> {
    if path.exists() {
        Ok(())
    } else {
        Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Load the activity log at `path` as numbered, trimmed lines.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for I/O errors during reading.
pub fn load_log_lines(path: &Path) -> Result<Vec<LogLine>, InputError> {
    let source = FileSource::new(path)?;
    tracing::info!(
        path = %source.path().display(),
        lines = source.lines().len(),
        "Loaded activity log"
    );
    Ok(source.into_lines())
}
