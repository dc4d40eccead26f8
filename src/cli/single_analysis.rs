//! One-shot analysis of a review given on the command line.

use std::time::Instant;

use reviewsense::analyzer::record_analysis_telemetry;
use reviewsense::telemetry::elapsed_millis;
use reviewsense::{AnalyzerError, ReviewGateway, ReviewSenseConfig};

use super::output::write_analysis_summary;
use super::{build_gateway, telemetry_sink};

/// Analyses the configured review and prints the result.
///
/// Unlike the interactive screen, failures surface the underlying error
/// rather than the generic alert.
///
/// # Errors
///
/// Returns [`AnalyzerError::MissingSubmission`] if either review field is
/// missing or empty, or the gateway error if the request fails.
pub async fn run(config: &ReviewSenseConfig) -> Result<(), AnalyzerError> {
    let submission = config.require_submission()?;
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);

    let started = Instant::now();
    let response = gateway.analyze_review(&submission).await;
    record_analysis_telemetry(
        telemetry.as_ref(),
        &response,
        elapsed_millis(started.elapsed()),
    );

    write_analysis_summary(&response?)
}
