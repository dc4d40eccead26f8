//! Submission and history controller for the review analyser.
//!
//! [`ReviewAnalyzer`] owns all view state: the two form fields, the loading
//! flag, the latest analysis result, the cached history and the pending
//! alert. It is deliberately free of I/O in its synchronous half so the TUI
//! can drive requests as asynchronous commands and feed the outcomes back:
//!
//! ```text
//! Idle --submit(valid)--> Loading --Ok--> Idle with result --> refresh history
//!                                 \-Err-> Idle with alert (result untouched)
//! ```
//!
//! Overlapping submissions are not fenced. Whichever response resolves last
//! overwrites the shared state, and the first resolution clears `loading`.

use std::time::Instant;

use crate::api::error::AnalyzerError;
use crate::api::gateway::ReviewGateway;
use crate::api::models::{AnalysisResult, HistoryEntry, ReviewSubmission};
use crate::telemetry::{TelemetryEvent, TelemetrySink, elapsed_millis};

/// Alert text shown for every submission failure.
pub const SUBMISSION_FAILED_ALERT: &str = "Failed to analyze. Check backend connection.";

/// One of the two editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The product name input.
    ProductName,
    /// The review text area.
    ReviewText,
}

/// What happened to a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// A field was empty; nothing was sent and nothing changed.
    Skipped,
    /// The backend returned a result; history must be refreshed.
    Analysed,
    /// The request failed; the alert is raised.
    Failed,
}

/// Locally owned state for one review analyser view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewAnalyzer {
    product_name: String,
    review_text: String,
    loading: bool,
    result: Option<AnalysisResult>,
    history: Vec<HistoryEntry>,
    alert: Option<String>,
}

impl ReviewAnalyzer {
    /// Creates an analyser with empty fields and no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyser with pre-filled form fields.
    #[must_use]
    pub fn with_form(product_name: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            review_text: review_text.into(),
            ..Self::default()
        }
    }

    /// Returns the product name field.
    #[must_use]
    pub const fn product_name(&self) -> &str {
        self.product_name.as_str()
    }

    /// Returns the review text field.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }

    /// Returns the value of a form field.
    #[must_use]
    pub const fn field(&self, field: FormField) -> &str {
        match field {
            FormField::ProductName => self.product_name.as_str(),
            FormField::ReviewText => self.review_text.as_str(),
        }
    }

    /// Replaces the product name field.
    pub fn set_product_name(&mut self, value: impl Into<String>) {
        self.product_name = value.into();
    }

    /// Replaces the review text field.
    pub fn set_review_text(&mut self, value: impl Into<String>) {
        self.review_text = value.into();
    }

    /// Appends a character to a form field.
    pub fn push_char(&mut self, field: FormField, ch: char) {
        self.field_mut(field).push(ch);
    }

    /// Removes the last character of a form field, if any.
    pub fn pop_char(&mut self, field: FormField) {
        self.field_mut(field).pop();
    }

    const fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::ProductName => &mut self.product_name,
            FormField::ReviewText => &mut self.review_text,
        }
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the most recent successful analysis.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Returns the cached history in backend order.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the pending alert message, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Dismisses the pending alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Starts a submission from the current form fields.
    ///
    /// Returns `None` without touching any state when either field is empty.
    /// Otherwise marks the analyser as loading, clears a stale alert, and
    /// returns the payload to send.
    pub fn begin_submission(&mut self) -> Option<ReviewSubmission> {
        let submission =
            ReviewSubmission::new(self.product_name.as_str(), self.review_text.as_str())?;
        self.loading = true;
        self.alert = None;
        Some(submission)
    }

    /// Applies the outcome of an analysis request.
    ///
    /// `loading` is cleared regardless of the outcome. A failure raises the
    /// fixed alert and leaves the previous result in place.
    pub fn finish_submission(
        &mut self,
        outcome: Result<AnalysisResult, AnalyzerError>,
    ) -> SubmissionOutcome {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                SubmissionOutcome::Analysed
            }
            Err(error) => {
                tracing::warn!("review analysis failed: {error}");
                self.alert = Some(SUBMISSION_FAILED_ALERT.to_owned());
                SubmissionOutcome::Failed
            }
        }
    }

    /// Applies the outcome of a history fetch.
    ///
    /// Success replaces the cached list wholesale; failure is logged and the
    /// previous list is kept.
    pub fn apply_history(&mut self, outcome: Result<Vec<HistoryEntry>, AnalyzerError>) {
        match outcome {
            Ok(entries) => self.history = entries,
            Err(error) => tracing::error!("failed to load review history: {error}"),
        }
    }

    /// Runs a complete submission against `gateway`.
    ///
    /// Sends at most one analysis request and, when it succeeds, exactly one
    /// history request.
    pub async fn submit(
        &mut self,
        gateway: &dyn ReviewGateway,
        telemetry: &dyn TelemetrySink,
    ) -> SubmissionOutcome {
        let Some(submission) = self.begin_submission() else {
            return SubmissionOutcome::Skipped;
        };

        let started = Instant::now();
        let response = gateway.analyze_review(&submission).await;
        record_analysis_telemetry(telemetry, &response, elapsed_millis(started.elapsed()));

        let outcome = self.finish_submission(response);
        if outcome == SubmissionOutcome::Analysed {
            self.refresh_history(gateway, telemetry).await;
        }
        outcome
    }

    /// Fetches the history and applies it.
    pub async fn refresh_history(
        &mut self,
        gateway: &dyn ReviewGateway,
        telemetry: &dyn TelemetrySink,
    ) {
        let started = Instant::now();
        let response = gateway.list_reviews().await;
        record_history_telemetry(telemetry, &response, elapsed_millis(started.elapsed()));
        self.apply_history(response);
    }
}

/// Records telemetry for a finished analysis request.
pub fn record_analysis_telemetry(
    telemetry: &dyn TelemetrySink,
    response: &Result<AnalysisResult, AnalyzerError>,
    latency_ms: u64,
) {
    let event = match response {
        Ok(result) => TelemetryEvent::AnalysisCompleted {
            latency_ms,
            key_point_count: result.key_points.len(),
        },
        Err(_) => TelemetryEvent::AnalysisFailed { latency_ms },
    };
    telemetry.record(event);
}

/// Records telemetry for a successful history fetch. Failures stay silent.
pub fn record_history_telemetry(
    telemetry: &dyn TelemetrySink,
    response: &Result<Vec<HistoryEntry>, AnalyzerError>,
    latency_ms: u64,
) {
    if let Ok(entries) = response {
        telemetry.record(TelemetryEvent::HistoryRefreshed {
            latency_ms,
            entry_count: entries.len(),
        });
    }
}
