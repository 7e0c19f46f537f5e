//! Fixed text used by the summary report.

/// Width of the `=` rule framing the banner.
pub const BANNER_WIDTH: usize = 80;

/// Heading between the two banner rules.
pub const BANNER_TITLE: &str = "JAUNDICE HAULING SUMMARY";

/// Indent in front of every bullet and listed log line.
pub const ITEM_INDENT: &str = "   ";

/// Minimum width of a right-aligned `[Line NNNN]` number.
pub const LINE_NUMBER_WIDTH: usize = 4;

/// Caption under the cross-reference heading.
pub const CROSS_REFERENCE_CAPTION: &str =
    "(Includes all interactions with the specific items Jaundice hauled)";
