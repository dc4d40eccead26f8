//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use reviewsense::presentation::{NO_HISTORY_PLACEHOLDER, ResultSummary, history_rows};
use reviewsense::{AnalysisResult, AnalyzerError, HistoryEntry};

/// Writes an analysis result to stdout.
pub fn write_analysis_summary(result: &AnalysisResult) -> Result<(), AnalyzerError> {
    let mut stdout = io::stdout().lock();
    write_analysis_summary_to(&mut stdout, result)
}

/// Writes an analysis result to the given writer.
pub fn write_analysis_summary_to<W: Write>(
    writer: &mut W,
    result: &AnalysisResult,
) -> Result<(), AnalyzerError> {
    let summary = ResultSummary::from_result(result);

    writeln!(writer, "Result for: {}", summary.product_name).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Sentiment: {} {} (Conf: {})",
        summary.badge.icon(),
        summary.sentiment,
        summary.confidence
    )
    .map_err(|e| io_error(&e))?;

    if summary.key_points.is_empty() {
        return Ok(());
    }

    writeln!(writer, "Key Takeaways:").map_err(|e| io_error(&e))?;
    for point in summary.key_points {
        writeln!(writer, "  • {point}").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes the analysis history to stdout.
pub fn write_history(entries: &[HistoryEntry]) -> Result<(), AnalyzerError> {
    let mut stdout = io::stdout().lock();
    write_history_to(&mut stdout, entries)
}

/// Writes the analysis history to the given writer, in backend order.
pub fn write_history_to<W: Write>(
    writer: &mut W,
    entries: &[HistoryEntry],
) -> Result<(), AnalyzerError> {
    if entries.is_empty() {
        writeln!(writer, "{NO_HISTORY_PLACEHOLDER}").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    writeln!(writer, "Recent Analysis").map_err(|e| io_error(&e))?;
    for row in history_rows(entries) {
        writeln!(
            writer,
            "  #{} {}  {} {}  {}",
            row.id,
            row.product_name,
            row.badge.icon(),
            row.sentiment,
            row.date
        )
        .map_err(|e| io_error(&e))?;
        writeln!(writer, "     {}", row.quoted_review).map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to an [`AnalyzerError::Io`].
pub(crate) fn io_error(error: &io::Error) -> AnalyzerError {
    AnalyzerError::Io {
        message: error.to_string(),
    }
}
