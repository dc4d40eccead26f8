//! Focus movement and text editing handlers.

use bubbletea_rs::Cmd;

use super::AnalyzerApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::FormFocus;

impl AnalyzerApp {
    /// Dispatches form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            AppMsg::FocusPrevious => {
                self.focus = self.focus.previous();
                None
            }
            AppMsg::InsertChar(ch) => {
                if let Some(field) = self.focus.field() {
                    self.analyzer.push_char(field, *ch);
                }
                None
            }
            AppMsg::DeleteChar => {
                if let Some(field) = self.focus.field() {
                    self.analyzer.pop_char(field);
                }
                None
            }
            AppMsg::Confirm => self.handle_confirm(),
            _ => {
                debug_assert!(false, "non-form message routed to handle_form_msg");
                None
            }
        }
    }

    /// Enter advances from the product name to the review, and submits from
    /// the review or the analyse control.
    fn handle_confirm(&mut self) -> Option<Cmd> {
        match self.focus {
            FormFocus::ProductName => {
                self.focus = FormFocus::ReviewText;
                None
            }
            FormFocus::ReviewText | FormFocus::SubmitButton => self.handle_submit_requested(),
        }
    }
}
