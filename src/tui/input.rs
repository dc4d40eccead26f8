//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Plain characters are always text input;
//! commands live on control chords and non-printing keys.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_chord(key.key);
    }

    match key.key {
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Enter => Some(AppMsg::Confirm),
        KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Up => Some(AppMsg::ScrollHistoryUp),
        KeyCode::Down => Some(AppMsg::ScrollHistoryDown),
        KeyCode::PageUp => Some(AppMsg::PageHistoryUp),
        KeyCode::PageDown => Some(AppMsg::PageHistoryDown),
        KeyCode::Esc => Some(AppMsg::Quit),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_control_chord(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('c') => Some(AppMsg::Quit),
        KeyCode::Char('s') => Some(AppMsg::SubmitRequested),
        KeyCode::Char('r') => Some(AppMsg::HistoryRequested),
        _ => None,
    }
}
