//! Error types exposed by the review analysis client.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The configured backend base URL could not be used.
    #[error("backend base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// Single-analysis mode was requested without both review fields.
    #[error("product name and review text are both required (use --product-name and --review-text)")]
    MissingSubmission,

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error detail extracted from the response body.
        message: String,
    },

    /// The backend answered successfully but the body did not match the
    /// expected shape.
    #[error("malformed response from backend: {message}")]
    MalformedResponse {
        /// Decoding failure detail.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The terminal interface failed to start or crashed.
    #[error("terminal interface error: {message}")]
    Interface {
        /// Details reported by the TUI runtime.
        message: String,
    },
}
