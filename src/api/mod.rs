//! Typed client for the review analysis backend.
//!
//! The backend is an opaque HTTP service with two endpoints: one that
//! analyses a submitted review and one that lists stored analyses. This
//! module owns the wire models, URL handling, and the gateway that performs
//! the requests.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod models;

pub use endpoint::{BackendEndpoint, DEFAULT_BASE_URL};
pub use error::AnalyzerError;
pub use gateway::{HttpReviewGateway, ReviewGateway};
pub use models::{AnalysisResult, HistoryEntry, ReviewSubmission};
