//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! review analyser screen. It wraps [`ReviewAnalyzer`] with view-only state
//! (focus, history scroll, terminal size) and turns backend requests into
//! bubbletea commands.
//!
//! # Module Structure
//!
//! - `form_handlers`: Focus movement and text editing
//! - `request_handlers`: Submission and history commands
//! - `model_impl`: The `bubbletea_rs::Model` implementation
//! - `rendering`: Chrome, status bar and alert overlay

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::analyzer::ReviewAnalyzer;
use crate::api::gateway::ReviewGateway;
use crate::telemetry::TelemetrySink;

use super::messages::AppMsg;
use super::state::{FormFocus, HistoryScroll};

mod form_handlers;
mod model_impl;
mod rendering;
mod request_handlers;

/// Default terminal width before the first resize event.
const DEFAULT_WIDTH: u16 = 80;
/// Default terminal height before the first resize event.
const DEFAULT_HEIGHT: u16 = 24;

/// Main application model for the review analyser TUI.
pub struct AnalyzerApp {
    /// Form, result, history and alert state.
    pub(crate) analyzer: ReviewAnalyzer,
    /// Control receiving key input.
    pub(crate) focus: FormFocus,
    /// Scroll position of the history list.
    pub(crate) history_scroll: HistoryScroll,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Backend used by request commands; `None` fails every request.
    gateway: Option<Arc<dyn ReviewGateway>>,
    /// Sink for request telemetry.
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for AnalyzerApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerApp")
            .field("analyzer", &self.analyzer)
            .field("focus", &self.focus)
            .field("history_scroll", &self.history_scroll)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_gateway", &self.gateway.is_some())
            .finish_non_exhaustive()
    }
}

impl AnalyzerApp {
    /// Creates an application with an empty form.
    #[must_use]
    pub fn new(
        gateway: Option<Arc<dyn ReviewGateway>>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            analyzer: ReviewAnalyzer::new(),
            focus: FormFocus::default(),
            history_scroll: HistoryScroll::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gateway,
            telemetry,
        }
    }

    /// Replaces the analyser state, e.g. to start with a pre-filled form.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: ReviewAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Returns the analyser state.
    #[must_use]
    pub const fn analyzer(&self) -> &ReviewAnalyzer {
        &self.analyzer
    }

    /// Returns the focused control.
    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Returns whether the blocking alert is showing.
    #[must_use]
    pub fn is_alert_visible(&self) -> bool {
        self.analyzer.alert().is_some()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        if msg.is_request() {
            return self.handle_request_msg(msg);
        }
        if msg.is_scroll() {
            return self.handle_scroll_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    fn handle_scroll_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.analyzer.history().len();
        let page = super::components::entries_per_page(self.history_visible_height());
        match msg {
            AppMsg::ScrollHistoryUp => self.history_scroll.up(1),
            AppMsg::ScrollHistoryDown => self.history_scroll.down(1, count),
            AppMsg::PageHistoryUp => self.history_scroll.up(page),
            AppMsg::PageHistoryDown => self.history_scroll.down(page, count),
            _ => debug_assert!(false, "non-scroll message routed to handle_scroll_msg"),
        }
        None
    }

    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::DismissAlert => {
                self.analyzer.dismiss_alert();
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }
}
