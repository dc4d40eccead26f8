//! Submission and history request handlers.
//!
//! Requests run as bubbletea commands. Each command measures its own latency,
//! records telemetry, and reports the raw outcome back as a message; the
//! analyser state only changes when that message is handled.

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::AnalyzerApp;
use crate::analyzer::{SubmissionOutcome, record_analysis_telemetry, record_history_telemetry};
use crate::api::error::AnalyzerError;
use crate::api::models::{AnalysisResult, HistoryEntry, ReviewSubmission};
use crate::telemetry::elapsed_millis;
use crate::tui::messages::AppMsg;

fn missing_gateway() -> AnalyzerError {
    AnalyzerError::Configuration {
        message: "backend gateway not configured".to_owned(),
    }
}

impl AnalyzerApp {
    /// Dispatches request messages to their handlers.
    pub(super) fn handle_request_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SubmitRequested => self.handle_submit_requested(),
            AppMsg::AnalysisFinished(response) => self.handle_analysis_finished(response),
            AppMsg::HistoryRequested => Some(self.history_cmd()),
            AppMsg::HistoryLoaded(response) => self.handle_history_loaded(response),
            _ => {
                debug_assert!(false, "non-request message routed to handle_request_msg");
                None
            }
        }
    }

    /// Starts a submission unless one is already in flight.
    ///
    /// Returns no command when a field is empty; the form stays as it is.
    pub(super) fn handle_submit_requested(&mut self) -> Option<Cmd> {
        if self.analyzer.is_loading() {
            return None;
        }
        let submission = self.analyzer.begin_submission()?;
        Some(self.analyze_cmd(submission))
    }

    /// Applies an analysis outcome and refreshes history after a success.
    fn handle_analysis_finished(
        &mut self,
        response: &Result<AnalysisResult, AnalyzerError>,
    ) -> Option<Cmd> {
        match self.analyzer.finish_submission(response.clone()) {
            SubmissionOutcome::Analysed => Some(self.history_cmd()),
            SubmissionOutcome::Failed | SubmissionOutcome::Skipped => None,
        }
    }

    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_history_loaded(
        &mut self,
        response: &Result<Vec<HistoryEntry>, AnalyzerError>,
    ) -> Option<Cmd> {
        self.analyzer.apply_history(response.clone());
        self.history_scroll.clamp(self.analyzer.history().len());
        None
    }

    fn analyze_cmd(&self, submission: ReviewSubmission) -> Cmd {
        let gateway = self.gateway.clone();
        let telemetry = Arc::clone(&self.telemetry);

        Box::pin(async move {
            let started = Instant::now();
            let response = match gateway {
                Some(backend) => backend.analyze_review(&submission).await,
                None => Err(missing_gateway()),
            };
            record_analysis_telemetry(
                telemetry.as_ref(),
                &response,
                elapsed_millis(started.elapsed()),
            );
            Some(Box::new(AppMsg::AnalysisFinished(response)) as Box<dyn Any + Send>)
        })
    }

    pub(super) fn history_cmd(&self) -> Cmd {
        let gateway = self.gateway.clone();
        let telemetry = Arc::clone(&self.telemetry);

        Box::pin(async move {
            let started = Instant::now();
            let response = match gateway {
                Some(backend) => backend.list_reviews().await,
                None => Err(missing_gateway()),
            };
            record_history_telemetry(
                telemetry.as_ref(),
                &response,
                elapsed_millis(started.elapsed()),
            );
            Some(Box::new(AppMsg::HistoryLoaded(response)) as Box<dyn Any + Send>)
        })
    }
}
