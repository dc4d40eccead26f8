//! Data models exchanged with the review analysis backend.
//!
//! Requests are serialised straight from [`ReviewSubmission`]. Responses are
//! decoded into [`AnalysisResult`] and [`HistoryEntry`]; any body that does
//! not fit these shapes is rejected by the gateway as a malformed response
//! rather than being displayed half-parsed.
//!
//! History rows are stored by the backend over time and are decoded
//! per-field: a row with an odd `sentiment`, `confidence` or `created_at`
//! still loads with that field blanked, so one bad row never empties the
//! whole list. Only `id`, `product_name` and `review_text` are required.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use timestamp::{TimestampParseError, parse_timestamp};

/// The only sentiment label rendered with the positive badge.
pub const POSITIVE_LABEL: &str = "POSITIVE";

/// Payload sent to the analysis endpoint.
///
/// Both fields are guaranteed non-empty: the only constructor is
/// [`ReviewSubmission::new`], which rejects empty input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSubmission {
    product_name: String,
    review_text: String,
}

impl ReviewSubmission {
    /// Builds a submission from form input.
    ///
    /// Returns `None` when either field is the empty string. Whitespace-only
    /// input is accepted as-is.
    #[must_use]
    pub fn new(product_name: impl Into<String>, review_text: impl Into<String>) -> Option<Self> {
        let product_name = product_name.into();
        let review_text = review_text.into();
        if product_name.is_empty() || review_text.is_empty() {
            return None;
        }
        Some(Self {
            product_name,
            review_text,
        })
    }

    /// Returns the product name.
    #[must_use]
    pub const fn product_name(&self) -> &str {
        self.product_name.as_str()
    }

    /// Returns the review text.
    #[must_use]
    pub const fn review_text(&self) -> &str {
        self.review_text.as_str()
    }
}

/// Sentiment analysis returned for one submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the stored review, when the backend reports it.
    #[serde(default)]
    pub id: Option<u64>,
    /// Product name echoed back by the backend.
    pub product_name: String,
    /// Sentiment label such as `POSITIVE` or `NEGATIVE`.
    pub sentiment: String,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    /// Extracted insights in backend order.
    pub key_points: Vec<String>,
}

impl AnalysisResult {
    /// Returns whether the sentiment label is exactly `POSITIVE`.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sentiment == POSITIVE_LABEL
    }
}

/// A previously analysed review stored by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    /// Backend row identifier.
    pub id: u64,
    /// Product the review was written about.
    pub product_name: String,
    /// Original review text.
    pub review_text: String,
    /// Sentiment label; empty when the backend stored none or a non-string.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sentiment: String,
    /// Classifier confidence, when stored as a number.
    #[serde(default, deserialize_with = "number_or_none")]
    pub confidence: Option<f64>,
    /// When the analysis was stored; `None` when missing or unparseable.
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub created_at: Option<NaiveDateTime>,
}

impl HistoryEntry {
    /// Returns whether the sentiment label is exactly `POSITIVE`.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sentiment == POSITIVE_LABEL
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned).unwrap_or_default())
}

fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| value.as_f64())
}
