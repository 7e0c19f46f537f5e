//! Report rendering and output.
//!
//! `report` builds the text (pure); `output` sends it to the console and the
//! report file (impure shell).

pub mod constants;
mod output;
mod report;

pub use output::{print_report, write_report_file};
pub use report::{numbered_line, render_report};
