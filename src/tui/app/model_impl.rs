//! `Model` trait implementation for the review analyser TUI.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `AnalyzerApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::AnalyzerApp;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for AnalyzerApp {
    fn init() -> (Self, Option<Cmd>) {
        let gateway = crate::tui::startup_gateway();
        let telemetry = crate::tui::startup_telemetry().unwrap_or_else(noop_telemetry);
        let model = Self::new(gateway, telemetry);

        // History is loaded once on mount.
        let cmd = model.history_cmd();

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // The alert blocks the screen; any key only dismisses it.
            if self.is_alert_visible() {
                return self.handle_message(&AppMsg::DismissAlert);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.is_alert_visible() {
            return self.normalise_viewport(&self.render_alert_overlay());
        }
        self.normalise_viewport(&self.render_main_view())
    }
}

impl AnalyzerApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces so stale cells from a previous, wider
    /// frame are cleared.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = self.terminal_width().saturating_sub(1).max(1);
        let height = self.terminal_height();

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn noop_telemetry() -> Arc<dyn TelemetrySink> {
    Arc::new(NoopTelemetrySink)
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible_width)));
    output
}
