//! Scenario state for review submission BDD tests.

use std::sync::Arc;

use reviewsense::telemetry::test_support::RecordingTelemetrySink;
use reviewsense::{ReviewAnalyzer, SubmissionOutcome};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a submission scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct SubmissionState {
    /// Runtime driving the gateway and the mock backend.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock review analysis backend.
    pub(crate) server: Slot<MockServer>,
    /// Analyser under test, stored after the submission.
    pub(crate) analyzer: Slot<ReviewAnalyzer>,
    /// Outcome of the last submission.
    pub(crate) outcome: Slot<SubmissionOutcome>,
    /// Recording telemetry sink for capturing events.
    pub(crate) telemetry: Slot<Arc<RecordingTelemetrySink>>,
}

/// Splits a comma-separated feature-file list, dropping quotes and blanks.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
