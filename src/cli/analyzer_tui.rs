//! Interactive analyser screen.
//!
//! This module provides the entry point for the full-screen terminal UI with
//! the analysis form, the latest result and the recent history.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use reviewsense::tui::{AnalyzerApp, set_startup_context};
use reviewsense::{AnalyzerError, ReviewGateway, ReviewSenseConfig};

use super::logging::init_file_logging;
use super::{build_gateway, telemetry_sink};

/// Runs the interactive analyser.
///
/// # Errors
///
/// Returns an error if the base URL is invalid, the HTTP client cannot be
/// built, or the TUI fails to initialise.
pub async fn run(config: &ReviewSenseConfig) -> Result<(), AnalyzerError> {
    // Logging is best effort; an unwritable log directory must not stop the
    // analyser from starting.
    let _log_guard = init_file_logging(&config.log_directory()).ok();

    let gateway: Arc<dyn ReviewGateway> = Arc::new(build_gateway(config)?);

    // Store collaborators for Model::init() to retrieve. If already set
    // (e.g. re-running the TUI in the same process), the existing context
    // remains.
    if !set_startup_context(gateway, telemetry_sink(config)) {
        tracing::debug!("startup context already set; reusing existing gateway");
    }

    run_tui().await.map_err(|error| AnalyzerError::Interface {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `AnalyzerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<AnalyzerApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
