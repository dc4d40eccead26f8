//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`analyzer_tui`]: Interactive analyser screen
//! - [`single_analysis`]: Analyse one review and print the result
//! - [`history_listing`]: Print the stored analysis history
//!
//! Output formatting utilities are in [`output`]; subscriber setup is in
//! [`logging`].

use std::sync::Arc;

use reviewsense::{
    AnalyzerError, HttpReviewGateway, NoopTelemetrySink, ReviewSenseConfig,
    StderrJsonlTelemetrySink, TelemetrySink,
};

pub mod analyzer_tui;
pub mod history_listing;
pub mod logging;
pub mod output;
pub mod single_analysis;

/// Builds the HTTP gateway from the configured base URL and timeout.
///
/// # Errors
///
/// Returns [`AnalyzerError::InvalidBaseUrl`] when the base URL is unusable,
/// or [`AnalyzerError::Configuration`] when the HTTP client cannot be built.
pub fn build_gateway(config: &ReviewSenseConfig) -> Result<HttpReviewGateway, AnalyzerError> {
    HttpReviewGateway::new(config.endpoint()?, config.request_timeout())
}

/// Selects the telemetry sink requested by the configuration.
pub fn telemetry_sink(config: &ReviewSenseConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
