//! Test helpers for constructing backend model fixtures.
//!
//! # Examples
//!
//! ```
//! use reviewsense::api::models::test_support::{analysis_result, history_entry};
//!
//! let result = analysis_result("Kettle", "POSITIVE", 0.9, &["Boils fast"]);
//! assert!(result.is_positive());
//!
//! let entry = history_entry(1, "Kettle", "NEGATIVE");
//! assert_eq!(entry.id, 1);
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use super::{AnalysisResult, HistoryEntry};

/// Constructs an [`AnalysisResult`] without a stored id.
#[must_use]
pub fn analysis_result(
    product_name: &str,
    sentiment: &str,
    confidence: f64,
    key_points: &[&str],
) -> AnalysisResult {
    AnalysisResult {
        id: None,
        product_name: product_name.to_owned(),
        sentiment: sentiment.to_owned(),
        confidence,
        key_points: key_points.iter().map(|point| (*point).to_owned()).collect(),
    }
}

/// Constructs a [`HistoryEntry`] with placeholder review text and a fixed
/// creation time of `2025-01-15 09:30:00`.
#[must_use]
pub fn history_entry(id: u64, product_name: &str, sentiment: &str) -> HistoryEntry {
    HistoryEntry {
        id,
        product_name: product_name.to_owned(),
        review_text: format!("Review {id}"),
        sentiment: sentiment.to_owned(),
        confidence: None,
        created_at: Some(fixed_timestamp()),
    }
}

/// Returns the timestamp used by [`history_entry`].
#[must_use]
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}
