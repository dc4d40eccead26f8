//! Form panel with the two inputs and the analyse control.

use crate::tui::state::FormFocus;

use super::text_truncate::{keep_tail_within_display_width, truncate_to_display_width_with_ellipsis};

/// Placeholder shown in the empty product name input.
pub const PRODUCT_PLACEHOLDER: &str = "e.g. Sony WH-1000XM5";
/// Placeholder shown in the empty review input.
pub const REVIEW_PLACEHOLDER: &str = "Paste the customer review here...";
/// Label of the idle analyse control.
pub const SUBMIT_LABEL: &str = "Analyze Review";
/// Label of the analyse control while a request is in flight.
pub const LOADING_LABEL: &str = "Analyzing...";

/// Columns taken by the focus marker and the input brackets.
const INPUT_CHROME_WIDTH: usize = 6;

/// Context for rendering the form panel.
#[derive(Debug, Clone, Copy)]
pub struct FormPanelViewContext<'a> {
    /// Current product name.
    pub product_name: &'a str,
    /// Current review text.
    pub review_text: &'a str,
    /// Control receiving key input.
    pub focus: FormFocus,
    /// Whether a submission is in flight.
    pub loading: bool,
    /// Maximum width in columns.
    pub max_width: usize,
}

/// Renders the "Start New Analysis" form.
///
/// Empty inputs show their placeholder. The focused input keeps its tail
/// visible and ends in a cursor; the analyse control reads "Analyzing..."
/// while loading.
#[must_use]
pub fn render_form_panel(ctx: &FormPanelViewContext<'_>) -> String {
    let input_width = ctx.max_width.saturating_sub(INPUT_CHROME_WIDTH).max(1);
    let mut output = String::from("Start New Analysis\n");

    output.push_str("  Product Name\n");
    output.push_str(&render_input(
        ctx.product_name,
        PRODUCT_PLACEHOLDER,
        ctx.focus == FormFocus::ProductName,
        input_width,
    ));
    output.push_str("  Customer Review\n");
    output.push_str(&render_input(
        ctx.review_text,
        REVIEW_PLACEHOLDER,
        ctx.focus == FormFocus::ReviewText,
        input_width,
    ));
    output.push_str(&render_button(
        ctx.loading,
        ctx.focus == FormFocus::SubmitButton,
    ));

    output
}

const fn focus_marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}

fn render_input(value: &str, placeholder: &str, focused: bool, width: usize) -> String {
    let marker = focus_marker(focused);
    let shown = if value.is_empty() {
        truncate_to_display_width_with_ellipsis(placeholder, width)
    } else if focused {
        keep_tail_within_display_width(value, width.saturating_sub(1))
    } else {
        truncate_to_display_width_with_ellipsis(value, width)
    };
    let cursor = if focused && !value.is_empty() { "_" } else { "" };
    format!("{marker}[ {shown}{cursor} ]\n")
}

fn render_button(loading: bool, focused: bool) -> String {
    let marker = focus_marker(focused);
    let label = if loading { LOADING_LABEL } else { SUBMIT_LABEL };
    format!("{marker}[ {label} ]\n")
}
