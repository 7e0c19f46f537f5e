//! PickUpAndHaul log summarizer (haul-summary)
//!
//! Scans a PickUpAndHaul debug log for one pawn's activity and renders a
//! plain-text hauling report.
//!
//! Pure core (`model`, `parser`, `xref`, `view::render_report`) with an impure
//! shell (`source`, `view` sinks, `integration`).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod view;
pub mod xref;

// Pipeline orchestration
pub mod integration;

#[cfg(test)]
mod tests;
