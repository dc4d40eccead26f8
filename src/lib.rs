//! ReviewSense library crate providing customer review sentiment analysis.
//!
//! The library talks to a review analysis backend over HTTP, keeps the state
//! of one analyser session (form, latest result, recent history), derives
//! display values, and renders an interactive terminal UI on top.

pub mod analyzer;
pub mod api;
pub mod config;
pub mod presentation;
pub mod telemetry;
pub mod tui;

pub use analyzer::{ReviewAnalyzer, SUBMISSION_FAILED_ALERT, SubmissionOutcome};
pub use api::{
    AnalysisResult, AnalyzerError, BackendEndpoint, HistoryEntry, HttpReviewGateway,
    ReviewGateway, ReviewSubmission,
};
pub use config::{OperationMode, ReviewSenseConfig};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
