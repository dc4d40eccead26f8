//! History list component for recent analyses.
//!
//! This component renders a scrollable list of history entries, each as a
//! heading with badge, the quoted review, and the creation date.

use crate::api::models::HistoryEntry;
use crate::presentation::{NO_HISTORY_PLACEHOLDER, history_rows};

use super::text_truncate::{truncate_to_display_width_with_ellipsis, truncate_to_height};

/// Lines rendered per history entry, including the blank separator.
pub const LINES_PER_ENTRY: usize = 4;

/// Context for rendering the history list view.
#[derive(Debug, Clone, Copy)]
pub struct HistoryListViewContext<'a> {
    /// History entries in backend order.
    pub entries: &'a [HistoryEntry],
    /// Index of the first entry to draw.
    pub scroll_offset: usize,
    /// Maximum visible height in lines; 0 means unbounded.
    pub visible_height: usize,
    /// Maximum width in columns.
    pub max_width: usize,
}

/// Returns how many whole entries fit in `visible_height` lines, at least one.
#[must_use]
pub const fn entries_per_page(visible_height: usize) -> usize {
    let fitted = visible_height.saturating_div(LINES_PER_ENTRY);
    if fitted == 0 { 1 } else { fitted }
}

/// Renders the history list as a string.
///
/// Only entries from the scroll offset onward are drawn, and the output is
/// cut to the visible height.
#[must_use]
pub fn render_history_list(ctx: &HistoryListViewContext<'_>) -> String {
    let mut output = String::from("Recent Analysis\n");

    if ctx.entries.is_empty() {
        output.push_str(&format!("  {NO_HISTORY_PLACEHOLDER}\n"));
        return output;
    }

    let line_width = ctx.max_width.saturating_sub(2).max(1);
    let visible = ctx.entries.get(ctx.scroll_offset..).unwrap_or_default();
    for row in history_rows(visible) {
        let heading = format!("{}  {} {}", row.product_name, row.badge.icon(), row.sentiment);
        output.push_str(&format!(
            "  {}\n",
            truncate_to_display_width_with_ellipsis(&heading, line_width)
        ));
        output.push_str(&format!(
            "  {}\n",
            truncate_to_display_width_with_ellipsis(&row.quoted_review, line_width)
        ));
        output.push_str(&format!("  {}\n\n", row.date));

        if ctx.visible_height > 0 && output.lines().count() > ctx.visible_height {
            break;
        }
    }

    truncate_to_height(&mut output, ctx.visible_height);
    output
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::api::models::test_support::history_entry;

    #[fixture]
    fn entries() -> Vec<HistoryEntry> {
        vec![
            history_entry(3, "Kettle", "NEGATIVE"),
            history_entry(2, "Toaster", "POSITIVE"),
            history_entry(1, "Lamp", "NEUTRAL"),
        ]
    }

    fn context(entries: &[HistoryEntry], scroll_offset: usize) -> HistoryListViewContext<'_> {
        HistoryListViewContext {
            entries,
            scroll_offset,
            visible_height: 0,
            max_width: 80,
        }
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let output = render_history_list(&context(&[], 0));

        assert!(output.contains("Recent Analysis"));
        assert!(output.contains("No history yet."));
    }

    #[rstest]
    fn entries_render_in_backend_order(entries: Vec<HistoryEntry>) {
        let output = render_history_list(&context(&entries, 0));

        let kettle = output.find("Kettle");
        let toaster = output.find("Toaster");
        let lamp = output.find("Lamp");
        assert!(kettle < toaster && toaster < lamp);
        assert!(output.contains("Kettle  ⚠ NEGATIVE"));
        assert!(output.contains("Toaster  ✔ POSITIVE"));
        assert!(output.contains("\"Review 3\""));
        assert!(output.contains("2025-01-15"));
    }

    #[rstest]
    fn scroll_offset_skips_leading_entries(entries: Vec<HistoryEntry>) {
        let output = render_history_list(&context(&entries, 1));

        assert!(!output.contains("Kettle"));
        assert!(output.contains("Toaster"));
    }

    #[rstest]
    fn output_respects_visible_height(entries: Vec<HistoryEntry>) {
        let ctx = HistoryListViewContext {
            visible_height: 6,
            ..context(&entries, 0)
        };

        let output = render_history_list(&ctx);

        assert!(output.lines().count() <= 6);
        assert!(output.ends_with("...\n"));
    }

    #[test]
    fn multi_line_review_keeps_entry_height() {
        let mut entry = history_entry(7, "Kettle", "NEGATIVE");
        entry.review_text = "Too loud\nbut fast\nand cheap".to_owned();
        let entries = vec![entry, history_entry(6, "Lamp", "POSITIVE")];

        let output = render_history_list(&context(&entries, 0));

        assert_eq!(output.lines().count(), 1 + 2 * LINES_PER_ENTRY);
        assert!(output.contains("  \"Too loud but fast and cheap\"\n"));
    }

    #[test]
    fn entries_per_page_never_drops_below_one() {
        assert_eq!(entries_per_page(0), 1);
        assert_eq!(entries_per_page(13), 3);
    }
}
