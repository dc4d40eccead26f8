//! UI components for the review analyser TUI.
//!
//! Each component renders one region of the screen from borrowed state and
//! returns plain text; the application model composes them.

mod form_panel;
mod history_list;
mod result_panel;
pub(crate) mod text_truncate;

pub use form_panel::{
    FormPanelViewContext, LOADING_LABEL, PRODUCT_PLACEHOLDER, REVIEW_PLACEHOLDER, SUBMIT_LABEL,
    render_form_panel,
};
pub use history_list::{
    HistoryListViewContext, LINES_PER_ENTRY, entries_per_page, render_history_list,
};
pub use result_panel::render_result_panel;
