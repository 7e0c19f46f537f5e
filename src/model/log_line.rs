//! A single physical line of the activity log.

/// One line of the input file, tagged with its 1-based line number.
///
/// Text is stored trimmed of surrounding whitespace. Blank lines are kept so
/// that numbering stays contiguous with the source file, but nothing downstream
/// matches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    line_number: usize,
    text: String,
}

impl LogLine {
    /// Create a line. `line_number` is 1-based.
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        debug_assert!(line_number > 0, "line numbers are 1-based");
        Self {
            line_number,
            text: text.into(),
        }
    }

    /// 1-based position in the source file.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Trimmed line content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the trimmed text is empty.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}
