//! Gateways for talking to the review analysis backend.
//!
//! The trait-based design lets the controller and TUI be exercised against
//! mocks while [`HttpReviewGateway`] performs the real HTTP requests.

mod error_mapping;
mod http_client;

pub use http_client::HttpReviewGateway;

use async_trait::async_trait;

use super::error::AnalyzerError;
use super::models::{AnalysisResult, HistoryEntry, ReviewSubmission};

/// Gateway that can analyse reviews and list stored analyses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Submit a review for analysis (`POST /api/analyze-review`).
    async fn analyze_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<AnalysisResult, AnalyzerError>;

    /// Fetch the full analysis history (`GET /api/reviews`).
    async fn list_reviews(&self) -> Result<Vec<HistoryEntry>, AnalyzerError>;
}
