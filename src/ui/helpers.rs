//! Shared rendering utilities.
//!
//! Components render into a `String` frame rather than straight to stdout, so
//! these helpers deal with measuring and fitting styled text: ANSI escape
//! sequences take no columns, and all truncation is done on `char`
//! boundaries.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::ui::helpers::{truncate, visible_width};
//!
//! assert_eq!(visible_width("\u{1b}[1mbold\u{1b}[0m"), 4);
//! assert_eq!(truncate("Garlic Lemon Chicken", 10), "Garlic Le…");
//! ```

use crate::ui::theme::Theme;

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Removes ANSI CSI escape sequences.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Number of terminal columns `text` occupies, ignoring escape sequences.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

/// Shortens plain text to `max` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap of plain text to `width` columns.
///
/// Words longer than `width` are truncated. Existing line breaks are kept.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let word = truncate(word, width);
            let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    lines
}

/// Appends one styled line and resets styling at its end.
pub fn push_line(out: &mut String, content: &str) {
    out.push_str(content);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends `text` padded with spaces to fill `cols` columns.
pub fn push_padded(out: &mut String, text: &str, cols: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(visible_width(text))));
}

/// Appends a line with `left` flush left and `right` flush right.
///
/// `right` is dropped when both do not fit.
pub fn push_split_line(out: &mut String, left: &str, right: &str, cols: usize) {
    let used = visible_width(left) + visible_width(right);
    if used + 1 > cols {
        push_line(out, left);
        return;
    }
    let mut line = String::from(left);
    line.push_str(&" ".repeat(cols - used));
    line.push_str(right);
    push_line(out, &line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_color_sequences() {
        let styled = format!("{}Soups{}", Theme::fg("#f5c2e7"), Theme::reset());
        assert_eq!(strip_ansi(&styled), "Soups");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("crème brûlée", 6), "crème…");
        assert_eq!(truncate("pho", 3), "pho");
        assert_eq!(truncate("pho", 0), "");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("Whisk the eggs with sugar until pale", 16),
            vec!["Whisk the eggs", "with sugar until", "pale"]
        );
        assert_eq!(wrap("Step one.\nStep two.", 40), vec!["Step one.", "Step two."]);
    }

    #[test]
    fn split_line_right_aligns() {
        let mut out = String::new();
        push_split_line(&mut out, "left", "right", 12);
        assert_eq!(strip_ansi(&out), "left   right\n");
    }
}
