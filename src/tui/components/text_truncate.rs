//! Text truncation helpers for fixed-size terminal views.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so wide
//! characters such as CJK ideographs count twice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates output to a maximum number of lines.
///
/// When `max_height` is non-zero and the output exceeds that number of lines,
/// the content is cut and an ellipsis line is appended. The final output
/// contains at most `max_height` lines.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 || output.lines().count() <= max_height {
        return;
    }

    let lines_to_keep = max_height.saturating_sub(1);
    let cut_at = if lines_to_keep == 0 {
        0
    } else {
        output
            .match_indices('\n')
            .nth(lines_to_keep.saturating_sub(1))
            .map_or(0, |(index, _)| index.saturating_add(1))
    };

    output.truncate(cut_at);
    output.push_str(ELLIPSIS);
    output.push('\n');
}

/// Truncates text to the provided display width, ending with an ellipsis.
///
/// Widths of three columns or fewer fall back to dots only.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let mut truncated = take_columns(text.chars(), max_width.saturating_sub(ELLIPSIS.len()));
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Keeps the end of `text` within the display width, prefixed by an
/// ellipsis when anything was dropped.
///
/// Used for the focused input so the character being typed stays visible.
pub(crate) fn keep_tail_within_display_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let reversed = take_columns(text.chars().rev(), max_width.saturating_sub(ELLIPSIS.len()));
    let tail: String = reversed.chars().rev().collect();
    format!("{ELLIPSIS}{tail}")
}

fn take_columns(chars: impl Iterator<Item = char>, max_columns: usize) -> String {
    let mut taken = String::new();
    let mut used = 0_usize;
    for ch in chars {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > max_columns {
            break;
        }
        taken.push(ch);
        used = used.saturating_add(char_width);
    }
    taken
}
