//! reqwest-backed implementation of [`ReviewGateway`].

use std::time::Duration;

use async_trait::async_trait;
use http::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::ReviewGateway;
use super::error_mapping::{map_decode_error, map_status_error, map_transport_error};
use crate::api::endpoint::BackendEndpoint;
use crate::api::error::AnalyzerError;
use crate::api::models::{AnalysisResult, HistoryEntry, ReviewSubmission};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Gateway that calls the backend over HTTP.
///
/// No request timeout is applied unless one is passed to
/// [`HttpReviewGateway::new`]; a hung backend then keeps the request open
/// until the transport itself gives up.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    endpoint: BackendEndpoint,
}

impl HttpReviewGateway {
    /// Creates a gateway for the given backend.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Configuration`] if the HTTP client cannot be
    /// built (for example when the TLS backend fails to initialise).
    pub fn new(endpoint: BackendEndpoint, timeout: Option<Duration>) -> Result<Self, AnalyzerError> {
        let builder = Client::builder();
        let configured = match timeout {
            Some(limit) => builder.timeout(limit),
            None => builder,
        };
        let client = configured
            .build()
            .map_err(|error| AnalyzerError::Configuration {
                message: format!("failed to configure backend HTTP client: {error}"),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Returns the backend this gateway talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &BackendEndpoint {
        &self.endpoint
    }

    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
    ) -> Result<T, AnalyzerError> {
        let response = request
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|error| map_transport_error(&error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(map_status_error(status.as_u16(), body.as_deref()));
        }

        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(&error))?;

        serde_json::from_str(&body).map_err(|error| map_decode_error(&error))
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn analyze_review(
        &self,
        submission: &ReviewSubmission,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let url = self.endpoint.analyze_url()?;
        tracing::debug!("submitting review for '{}' to {url}", submission.product_name());
        Self::send_json(self.client.post(url).json(submission)).await
    }

    async fn list_reviews(&self) -> Result<Vec<HistoryEntry>, AnalyzerError> {
        let url = self.endpoint.reviews_url()?;
        tracing::debug!("fetching review history from {url}");
        Self::send_json(self.client.get(url)).await
    }
}

#[cfg(test)]
#[path = "http_client_tests.rs"]
mod tests;
