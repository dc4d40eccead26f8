//! Result panel for the most recent analysis.

use crate::api::models::AnalysisResult;
use crate::presentation::ResultSummary;

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Renders the latest analysis result.
///
/// Returns an empty string when no analysis has succeeded yet, so the panel
/// takes no space. Key points are listed verbatim in backend order.
#[must_use]
pub fn render_result_panel(result: Option<&AnalysisResult>, max_width: usize) -> String {
    let Some(summary) = result.map(ResultSummary::from_result) else {
        return String::new();
    };
    let line_width = max_width.saturating_sub(4).max(1);

    let mut output = format!(
        "Result for: {}\n",
        truncate_to_display_width_with_ellipsis(summary.product_name, line_width)
    );
    output.push_str(&format!("  Conf: {}\n", summary.confidence));
    output.push_str(&format!(
        "  Detected Sentiment: {} {}\n",
        summary.badge.icon(),
        summary.sentiment
    ));
    output.push_str("  Key Takeaways\n");
    for point in summary.key_points {
        output.push_str(&format!(
            "    • {}\n",
            truncate_to_display_width_with_ellipsis(point, line_width.saturating_sub(2))
        ));
    }

    output
}
