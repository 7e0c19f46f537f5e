//! jaundice-summary - Entry Point

use clap::Parser;
use haul_summary::model::AppError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Summarize Jaundice's hauling activity from a PickUpAndHaul debug log
#[derive(Parser, Debug)]
#[command(name = "jaundice-summary")]
#[command(version)]
#[command(about = "Summarize Jaundice's hauling activity from a PickUpAndHaul debug log")]
pub struct Args {
    /// Activity log to analyze [default: logs.txt]
    pub input: Option<PathBuf>,

    /// Report file to write [default: jaundice_complete_summary.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = haul_summary::config::load_config_with_precedence(args.config)?;
        let merged = haul_summary::config::merge_config(config_file);
        let with_env = haul_summary::config::apply_env_overrides(merged);
        haul_summary::config::apply_cli_overrides(with_env, args.input, args.output)
    };

    // Missing input aborts before the run log is touched
    haul_summary::source::require_input(&config.input)?;

    // The run log is optional; a broken log path must not block the report
    if let Err(e) = haul_summary::logging::init(&config.log_file_path) {
        eprintln!("Warning: run log disabled: {e}");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let outcome = haul_summary::integration::run(&config, &mut console)?;

    info!(
        output = %outcome.output_path.display(),
        report_lines = outcome.report.len(),
        "Run complete"
    );
    Ok(())
}

/// Message for the user, without the wrapper prefix for input/output errors.
fn describe(err: &AppError) -> String {
    match err {
        AppError::Input(inner) => inner.to_string(),
        AppError::Output(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
