//! State management for the review analyser TUI.
//!
//! This module holds the view-only state that sits alongside the analyser
//! controller: which control has focus and how far the history list is
//! scrolled.

mod focus;
mod history_scroll;

pub use focus::FormFocus;
pub use history_scroll::HistoryScroll;
