//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod error;
pub mod log_line;
pub mod stats;
pub mod summary;

// Re-export for convenience
pub use error::{AppError, InputError, OutputError};
pub use log_line::LogLine;
pub use stats::{HaulEvent, ItemTotals, JobStats};
pub use summary::{Extraction, Summary};
