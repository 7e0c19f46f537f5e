//! Pipeline orchestration.
//!
//! Wires the stages together for one run:
//! load lines → extract agent activity → cross-reference hauled items →
//! render report → console + report file.
//!
//! All accumulators are local to [`run`]; nothing survives between calls.

use crate::config::ResolvedConfig;
use crate::model::{AppError, LogLine, Summary};
use crate::parser::ActivityExtractor;
use crate::source::load_log_lines;
use crate::view::{print_report, render_report, write_report_file};
use crate::xref::cross_reference;
use std::io::Write;
use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The rendered report, one entry per line.
    pub report: Vec<String>,
    /// Where the report file was written.
    pub output_path: PathBuf,
    /// Aggregated data the report was rendered from.
    pub summary: Summary,
}

/// Build the summary for an already loaded log.
pub fn summarize(extractor: &ActivityExtractor, lines: &[LogLine]) -> Summary {
    let extraction = extractor.extract(lines);
    let cross_references = cross_reference(&extraction.hauled_items, lines);
    Summary {
        extraction,
        cross_references,
    }
}

/// Run the whole pipeline, printing the report to `console`.
///
/// The report is printed before the file is written. If writing the file
/// fails, the console copy stands and `AppError::Output` is returned. On
/// success a confirmation line naming the output path follows the report.
///
/// # Errors
///
/// - `AppError::Input` if the log is missing or unreadable; nothing is printed
/// - `AppError::Console` if printing to `console` fails
/// - `AppError::Output` if the report file cannot be written
pub fn run<W: Write>(config: &ResolvedConfig, console: &mut W) -> Result<RunOutcome, AppError> {
    let lines = load_log_lines(&config.input)?;

    let summary = summarize(ActivityExtractor::jaundice(), &lines);
    let report = render_report(&summary);

    print_report(console, &report).map_err(AppError::Console)?;

    if let Err(e) = write_report_file(&config.output, &report) {
        tracing::error!(error = %e, "Failed to write report file");
        return Err(e.into());
    }

    writeln!(
        console,
        "\nOutput also written to: {}",
        config.output.display()
    )
    .map_err(AppError::Console)?;

    Ok(RunOutcome {
        report,
        output_path: config.output.clone(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputError;
    use std::fs;

    fn config_for(name: &str) -> ResolvedConfig {
        let temp_dir = std::env::temp_dir();
        ResolvedConfig {
            input: temp_dir.join(format!("haul_summary_{name}_logs.txt")),
            output: temp_dir.join(format!("haul_summary_{name}_summary.txt")),
            log_file_path: temp_dir.join(format!("haul_summary_{name}.log")),
        }
    }

    fn cleanup(config: &ResolvedConfig) {
        let _ = fs::remove_file(&config.input);
        let _ = fs::remove_file(&config.output);
    }

    #[test]
    fn run_prints_report_and_writes_identical_file() {
        let config = config_for("run_identical");
        fs::write(
            &config.input,
            "Jaundice is hauling to inventory Steel:25\nBob dropped Steel\n",
        )
        .unwrap();

        let mut console = Vec::new();
        let result = run(&config, &mut console);
        let written = fs::read_to_string(&config.output);
        cleanup(&config);

        let outcome = result.unwrap();
        let written = written.unwrap();
        let console = String::from_utf8(console).unwrap();

        let expected_file = format!("{}\n", outcome.report.join("\n"));
        assert_eq!(written, expected_file);
        assert_eq!(
            console,
            format!(
                "{expected_file}\nOutput also written to: {}\n",
                config.output.display()
            )
        );
        assert_eq!(outcome.summary.cross_references.len(), 2);
    }

    #[test]
    fn run_missing_input_prints_nothing_and_writes_nothing() {
        let config = config_for("run_missing");
        cleanup(&config);

        let mut console = Vec::new();
        let result = run(&config, &mut console);

        assert!(
            matches!(result, Err(AppError::Input(InputError::FileNotFound { .. }))),
            "Expected FileNotFound, got: {:?}",
            result
        );
        assert!(console.is_empty());
        assert!(!config.output.exists());
    }

    #[test]
    fn run_write_failure_keeps_console_output() {
        let mut config = config_for("run_write_fail");
        config.output = std::env::temp_dir()
            .join("haul_summary_no_such_dir_777")
            .join("summary.txt");
        fs::write(&config.input, "Jaundice is hauling to inventory Steel:25\n").unwrap();

        let mut console = Vec::new();
        let result = run(&config, &mut console);
        let _ = fs::remove_file(&config.input);

        assert!(matches!(result, Err(AppError::Output(_))));
        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("JAUNDICE HAULING SUMMARY"));
        assert!(!console.contains("Output also written to"));
    }
}
