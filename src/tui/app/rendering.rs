//! Rendering logic for the review analyser TUI.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::AnalyzerApp;
use crate::tui::components::{
    FormPanelViewContext, HistoryListViewContext, render_form_panel, render_history_list,
    render_result_panel,
};

/// Title, subtitle, tagline and a blank line.
const HEADER_HEIGHT: usize = 4;
/// Form heading, two labelled inputs, the control and a blank line.
const FORM_HEIGHT: usize = 7;
/// Single status bar line.
const STATUS_HEIGHT: usize = 1;

impl AnalyzerApp {
    /// Renders the main screen: header, form, result, history and status.
    pub(super) fn render_main_view(&self) -> String {
        let width = self.terminal_width();
        let mut output = self.render_header();

        output.push_str(&render_form_panel(&FormPanelViewContext {
            product_name: self.analyzer.product_name(),
            review_text: self.analyzer.review_text(),
            focus: self.focus,
            loading: self.analyzer.is_loading(),
            max_width: width,
        }));
        output.push('\n');

        let result = self.render_result_section();
        output.push_str(&result);

        output.push_str(&render_history_list(&HistoryListViewContext {
            entries: self.analyzer.history(),
            scroll_offset: self.history_scroll.offset,
            visible_height: self.history_height_below(result.lines().count()),
            max_width: width,
        }));

        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the header with product branding.
    pub(super) fn render_header(&self) -> String {
        let mut header = String::from("ReviewSense.ai");
        if self.analyzer.is_loading() {
            header.push_str(" [Analyzing...]");
        }
        header.push_str("\nAnalyze Customer Feedback\n");
        header.push_str(
            "Leverage AI to understand sentiment and extract key insights from product reviews instantly.\n\n",
        );
        header
    }

    /// Renders the latest result followed by a blank line, or nothing.
    fn render_result_section(&self) -> String {
        let mut section = render_result_panel(self.analyzer.result(), self.terminal_width());
        if !section.is_empty() {
            section.push('\n');
        }
        section
    }

    /// Lines left for the history list on the main screen.
    pub(super) fn history_visible_height(&self) -> usize {
        self.history_height_below(self.render_result_section().lines().count())
    }

    /// Lines left for the history list once `result_height` lines are used.
    ///
    /// Never returns 0, which the list treats as unbounded.
    fn history_height_below(&self, result_height: usize) -> usize {
        usize::from(self.height)
            .saturating_sub(HEADER_HEIGHT)
            .saturating_sub(FORM_HEIGHT)
            .saturating_sub(result_height)
            .saturating_sub(STATUS_HEIGHT)
            .max(1)
    }

    /// Renders the status bar with key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.width <= 80 {
            "Tab:field  Enter:analyze  ^R:refresh  ↑/↓:history  Esc:quit"
        } else {
            "Tab/Shift-Tab:field  Enter/^S:analyze  ^R:refresh history  ↑/↓/PgUp/PgDn:scroll  Esc/^C:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the blocking alert overlay.
    pub(super) fn render_alert_overlay(&self) -> String {
        let Some(message) = self.analyzer.alert() else {
            return String::new();
        };
        format!("\n=== Alert ===\n\n{message}\n\nPress any key to continue.\n")
    }

    pub(super) fn terminal_width(&self) -> usize {
        usize::from(self.width.max(1))
    }

    pub(super) fn terminal_height(&self) -> usize {
        usize::from(self.height.max(1))
    }
}
