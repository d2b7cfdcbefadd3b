//! Header component renderer.
//!
//! Renders the brand title bar: bold title on the left, subtitle on the right.

use crate::ui::helpers::{push_line, push_padded, visible_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar, filling the terminal width.
///
/// # Layout
///
/// ```text
///  Recipe Explorer                              Browse · Search · Rate
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let mut line = String::new();
    line.push_str(Theme::bold());
    line.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        line.push_str(&Theme::bg(bg));
    }

    let title = format!(" {}", header.title);
    let subtitle = format!("{} ", header.subtitle);
    let gap = cols.saturating_sub(visible_width(&title) + visible_width(&subtitle));

    line.push_str(&title);
    if gap > 0 {
        line.push_str(&" ".repeat(gap));
        line.push_str(Theme::reset());
        line.push_str(&Theme::fg(&theme.colors.text_dim));
        if let Some(bg) = &theme.colors.header_bg {
            line.push_str(&Theme::bg(bg));
        }
        line.push_str(&subtitle);
    } else {
        push_padded(&mut line, "", cols.saturating_sub(visible_width(&title)));
    }

    push_line(out, &line);
}
