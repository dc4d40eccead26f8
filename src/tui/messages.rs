//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::error::AnalyzerError;
use crate::api::models::{AnalysisResult, HistoryEntry};

/// Messages for the review analyser TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Form editing
    /// Move focus to the next control.
    FocusNext,
    /// Move focus to the previous control.
    FocusPrevious,
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    DeleteChar,
    /// Activate the focused control.
    Confirm,

    // Backend requests
    /// Submit the form for analysis.
    SubmitRequested,
    /// The analysis request resolved.
    AnalysisFinished(Result<AnalysisResult, AnalyzerError>),
    /// Fetch the analysis history.
    HistoryRequested,
    /// The history request resolved.
    HistoryLoaded(Result<Vec<HistoryEntry>, AnalyzerError>),

    // History scrolling
    /// Scroll the history list up one entry.
    ScrollHistoryUp,
    /// Scroll the history list down one entry.
    ScrollHistoryDown,
    /// Scroll the history list up one page.
    PageHistoryUp,
    /// Scroll the history list down one page.
    PageHistoryDown,

    // Application lifecycle
    /// Dismiss the blocking alert.
    DismissAlert,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true if this message edits the form or moves focus.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FocusNext
                | Self::FocusPrevious
                | Self::InsertChar(_)
                | Self::DeleteChar
                | Self::Confirm
        )
    }

    /// Returns true if this message starts or completes a backend request.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(
            self,
            Self::SubmitRequested
                | Self::AnalysisFinished(_)
                | Self::HistoryRequested
                | Self::HistoryLoaded(_)
        )
    }

    /// Returns true if this message scrolls the history list.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollHistoryUp
                | Self::ScrollHistoryDown
                | Self::PageHistoryUp
                | Self::PageHistoryDown
        )
    }
}
