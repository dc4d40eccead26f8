//! ReviewSense CLI entrypoint.
//!
//! Starts the interactive analyser by default. Supplying `--product-name` or
//! `--review-text` analyses one review and prints the result; `--history`
//! prints the stored analyses.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewsense::{AnalyzerError, OperationMode, ReviewSenseConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AnalyzerError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Interactive => cli::analyzer_tui::run(&config).await,
        OperationMode::SingleAnalysis => {
            cli::logging::init_logging();
            cli::single_analysis::run(&config).await
        }
        OperationMode::HistoryListing => {
            cli::logging::init_logging();
            cli::history_listing::run(&config).await
        }
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AnalyzerError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewSenseConfig, AnalyzerError> {
    ReviewSenseConfig::load().map_err(|error| AnalyzerError::Configuration {
        message: error.to_string(),
    })
}
