//! File-based log source.
//!
//! Reads the whole activity log once and splits it into numbered lines.

use crate::model::error::InputError;
use crate::model::LogLine;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read-once file source for the activity log.
///
/// The file is opened, read, and closed inside [`FileSource::new`]; no handle
/// outlives construction.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    lines: Vec<LogLine>,
}

impl FileSource {
    /// Load the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors, including invalid UTF-8.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        super::require_input(path)?;

        let mut content = String::new();
        File::open(path)?.read_to_string(&mut content)?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: split_lines(&content),
        })
    }

    /// Path the log was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Numbered lines in file order.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Consume the source, keeping only its lines.
    pub fn into_lines(self) -> Vec<LogLine> {
        self.lines
    }
}

/// Split raw file content into trimmed, 1-based numbered lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<LogLine> {
    let normalized = content.replace("\r\n", "\n");
    normalized
        .split_terminator(['\n', '\r'])
        .enumerate()
        .map(|(idx, raw)| LogLine::new(idx + 1, raw.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_loads_existing_file() {
        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("haul_summary_file_source_loads.txt");

        fs::write(&test_file, "first\nsecond\n").unwrap();

        let result = FileSource::new(&test_file);

        // Cleanup
        let _ = fs::remove_file(&test_file);

        let source = result.unwrap();
        assert_eq!(source.lines().len(), 2);
        assert_eq!(source.lines()[0].text(), "first");
        assert_eq!(source.lines()[1].line_number(), 2);
    }

    #[test]
    fn new_returns_file_not_found_for_missing_file() {
        let temp_dir = std::env::temp_dir();
        let missing_file = temp_dir.join("haul_summary_nonexistent_12345.txt");

        let result = FileSource::new(&missing_file);

        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn new_rejects_invalid_utf8_as_io_error() {
        let temp_dir = std::env::temp_dir();
        let test_file = temp_dir.join("haul_summary_invalid_utf8.txt");

        fs::write(&test_file, b"J\xff\xfe\n").unwrap();

        let result = FileSource::new(&test_file);

        // Cleanup
        let _ = fs::remove_file(&test_file);

        assert!(
            matches!(result, Err(InputError::Io(_))),
            "Expected Io error, got: {:?}",
            result
        );
    }

    #[test]
    fn new_reports_directory_as_io_error() {
        let temp_dir = std::env::temp_dir();

        let result = FileSource::new(&temp_dir);

        assert!(matches!(result, Err(InputError::Io(_))));
    }

    #[test]
    fn split_lines_trims_and_numbers_from_one() {
        let lines = split_lines("  alpha  \n\tbeta\n");
        assert_eq!(lines, vec![LogLine::new(1, "alpha"), LogLine::new(2, "beta")]);
    }

    #[test]
    fn split_lines_keeps_blank_lines_in_numbering() {
        let lines = split_lines("a\n\n   \nb");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_blank());
        assert!(lines[2].is_blank());
        assert_eq!(lines[3].line_number(), 4);
        assert_eq!(lines[3].text(), "b");
    }

    #[test]
    fn split_lines_handles_crlf_and_lone_cr() {
        let lines = split_lines("a\r\nb\rc\n");
        let texts: Vec<_> = lines.iter().map(LogLine::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn split_lines_empty_content_has_no_lines() {
        assert!(split_lines("").is_empty());
    }
}
