//! Report sinks (impure shell): console and report file.

use crate::model::error::OutputError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write each report line followed by `\n` to `writer`.
pub fn print_report<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Write the report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be created or written.
pub fn write_report_file(path: &Path, lines: &[String]) -> Result<(), OutputError> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    print_report(&mut writer, lines).map_err(to_error)?;

    tracing::info!(path = %path.display(), lines = lines.len(), "Report written");
    Ok(())
}
