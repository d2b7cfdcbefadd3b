//! Footer component renderer.

use crate::ui::helpers::{push_line, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hint, centered and dimmed, preceded by the full
/// command reference when help is on.
///
/// The hint is truncated to the terminal width.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    for line in &footer.help {
        push_line(out, &format!(" {}{}", Theme::fg(&theme.colors.text_normal), truncate(line, cols.saturating_sub(1))));
    }

    let help_text = truncate(&footer.keybindings, cols);
    let padding = cols.saturating_sub(help_text.chars().count()) / 2;

    let mut line = Theme::fg(&theme.colors.text_dim);
    line.push_str(&" ".repeat(padding));
    line.push_str(&help_text);
    push_line(out, &line);
}
