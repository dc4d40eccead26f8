//! Prints the stored analysis history.

use std::time::Instant;

use reviewsense::analyzer::record_history_telemetry;
use reviewsense::telemetry::elapsed_millis;
use reviewsense::{AnalyzerError, ReviewGateway, ReviewSenseConfig};

use super::output::write_history;
use super::{build_gateway, telemetry_sink};

/// Fetches the history once and prints it.
///
/// # Errors
///
/// Returns the gateway error if the request fails or the body is malformed.
pub async fn run(config: &ReviewSenseConfig) -> Result<(), AnalyzerError> {
    let gateway = build_gateway(config)?;
    let telemetry = telemetry_sink(config);

    let started = Instant::now();
    let response = gateway.list_reviews().await;
    record_history_telemetry(
        telemetry.as_ref(),
        &response,
        elapsed_millis(started.elapsed()),
    );

    write_history(&response?)
}
