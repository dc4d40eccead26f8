//! Pure derivations from backend models to display values.
//!
//! Nothing here holds state or performs I/O; the TUI components and the CLI
//! printers both render from these summaries.

use crate::api::models::{AnalysisResult, HistoryEntry, POSITIVE_LABEL};

/// Placeholder shown instead of an empty history list.
pub const NO_HISTORY_PLACEHOLDER: &str = "No history yet.";

/// Date label for a history entry whose timestamp could not be read.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Badge variant for a sentiment label.
///
/// Only the exact label `POSITIVE` maps to [`SentimentBadge::Positive`];
/// every other label, including unexpected ones such as `NEUTRAL`, collapses
/// into [`SentimentBadge::Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBadge {
    /// Positive sentiment.
    Positive,
    /// Negative or unrecognised sentiment.
    Alert,
}

impl SentimentBadge {
    /// Selects the badge for a sentiment label.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        if label == POSITIVE_LABEL {
            Self::Positive
        } else {
            Self::Alert
        }
    }

    /// Returns the icon glyph for the badge.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Positive => "✔",
            Self::Alert => "⚠",
        }
    }
}

/// Converts a confidence in `[0, 1]` to a whole percentage.
///
/// Rounds half away from zero; values outside the range are clamped and NaN
/// maps to zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "percentage conversion is inherently floating point"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100 before the cast"
)]
pub fn confidence_percent(confidence: f64) -> u32 {
    if confidence.is_nan() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Formats a confidence as `"NN%"`.
#[must_use]
pub fn confidence_label(confidence: f64) -> String {
    format!("{}%", confidence_percent(confidence))
}

/// Display values for one analysis result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary<'a> {
    /// Product the result belongs to.
    pub product_name: &'a str,
    /// Raw sentiment label, shown inside the badge.
    pub sentiment: &'a str,
    /// Badge variant selected from the label.
    pub badge: SentimentBadge,
    /// Rounded confidence, e.g. `87%`.
    pub confidence: String,
    /// Key points in backend order, unmodified.
    pub key_points: &'a [String],
}

impl<'a> ResultSummary<'a> {
    /// Derives the summary for `result`.
    #[must_use]
    pub fn from_result(result: &'a AnalysisResult) -> Self {
        Self {
            product_name: result.product_name.as_str(),
            sentiment: result.sentiment.as_str(),
            badge: SentimentBadge::for_label(&result.sentiment),
            confidence: confidence_label(result.confidence),
            key_points: &result.key_points,
        }
    }
}

/// Display values for one history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    /// Backend row identifier.
    pub id: u64,
    /// Product name heading.
    pub product_name: &'a str,
    /// Raw sentiment label.
    pub sentiment: &'a str,
    /// Badge variant selected from the label.
    pub badge: SentimentBadge,
    /// Review text on one line, wrapped in double quotes.
    pub quoted_review: String,
    /// Creation date as `YYYY-MM-DD`, or [`INVALID_DATE_LABEL`].
    pub date: String,
}

impl<'a> HistoryRow<'a> {
    /// Derives the row for `entry`.
    #[must_use]
    pub fn from_entry(entry: &'a HistoryEntry) -> Self {
        Self {
            id: entry.id,
            product_name: entry.product_name.as_str(),
            sentiment: entry.sentiment.as_str(),
            badge: SentimentBadge::for_label(&entry.sentiment),
            quoted_review: format!("\"{}\"", single_line(&entry.review_text)),
            date: entry.created_at.map_or_else(
                || INVALID_DATE_LABEL.to_owned(),
                |created_at| created_at.format("%Y-%m-%d").to_string(),
            ),
        }
    }
}

/// Joins multi-line text with single spaces so it fits one display row.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derives rows for a history list, preserving backend order.
#[must_use]
pub fn history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRow<'_>> {
    entries.iter().map(HistoryRow::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::api::models::test_support::{analysis_result, history_entry};

    #[rstest]
    #[case::spec_example(0.8734, 87)]
    #[case::ninety_two(0.92, 92)]
    #[case::half_rounds_up(0.125, 13)]
    #[case::zero(0.0, 0)]
    #[case::one(1.0, 100)]
    #[case::above_range(1.7, 100)]
    #[case::below_range(-0.2, 0)]
    #[case::nan(f64::NAN, 0)]
    fn confidence_percent_rounds_and_clamps(#[case] confidence: f64, #[case] expected: u32) {
        assert_eq!(confidence_percent(confidence), expected);
    }

    #[test]
    fn confidence_label_has_no_decimals() {
        assert_eq!(confidence_label(0.8734), "87%");
    }

    #[rstest]
    #[case::positive("POSITIVE", SentimentBadge::Positive)]
    #[case::negative("NEGATIVE", SentimentBadge::Alert)]
    #[case::neutral("NEUTRAL", SentimentBadge::Alert)]
    #[case::lowercase("positive", SentimentBadge::Alert)]
    #[case::backend_error("API_ERR", SentimentBadge::Alert)]
    #[case::empty("", SentimentBadge::Alert)]
    fn badge_collapses_to_binary(#[case] label: &str, #[case] expected: SentimentBadge) {
        assert_eq!(SentimentBadge::for_label(label), expected);
    }

    #[test]
    fn result_summary_keeps_key_points_verbatim() {
        let result = analysis_result(
            "Sony WH-1000XM5",
            "POSITIVE",
            0.92,
            &["Long battery life", "Comfortable fit", "Long battery life"],
        );

        let summary = ResultSummary::from_result(&result);

        assert_eq!(summary.confidence, "92%");
        assert_eq!(summary.badge, SentimentBadge::Positive);
        assert_eq!(
            summary.key_points,
            ["Long battery life", "Comfortable fit", "Long battery life"]
        );
    }

    #[test]
    fn history_row_quotes_review_and_formats_date() {
        let entry = history_entry(4, "Kettle", "NEGATIVE");

        let row = HistoryRow::from_entry(&entry);

        assert_eq!(row.quoted_review, "\"Review 4\"");
        assert_eq!(row.date, "2025-01-15");
        assert_eq!(row.badge, SentimentBadge::Alert);
    }

    #[rstest]
    #[case::unix_newlines("Too loud\nbut fast", "\"Too loud but fast\"")]
    #[case::windows_newlines("Too loud\r\nbut fast\r\n", "\"Too loud but fast\"")]
    #[case::blank_lines("Too loud\n\n\nbut fast", "\"Too loud but fast\"")]
    #[case::single_line("Too loud", "\"Too loud\"")]
    fn history_row_puts_review_on_one_line(#[case] review: &str, #[case] expected: &str) {
        let mut entry = history_entry(4, "Kettle", "NEGATIVE");
        entry.review_text = review.to_owned();

        let row = HistoryRow::from_entry(&entry);

        assert_eq!(row.quoted_review, expected);
    }

    #[test]
    fn history_row_without_timestamp_shows_invalid_date() {
        let mut entry = history_entry(4, "Kettle", "NEGATIVE");
        entry.created_at = None;

        let row = HistoryRow::from_entry(&entry);

        assert_eq!(row.date, "Invalid Date");
    }

    #[test]
    fn history_rows_preserve_order() {
        let entries = vec![
            history_entry(9, "B", "POSITIVE"),
            history_entry(2, "A", "NEGATIVE"),
        ];

        let names: Vec<&str> = history_rows(&entries)
            .iter()
            .map(|row| row.product_name)
            .collect();

        assert_eq!(names, vec!["B", "A"]);
    }
}
