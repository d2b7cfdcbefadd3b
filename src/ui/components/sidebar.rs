//! Category sidebar renderer.
//!
//! In a terminal the sidebar is a wrapped row of category chips above the
//! list. Each chip shows the id to type after `cat`.

use super::status::render_pane_state;
use crate::ui::helpers::{push_line, visible_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CategoryItem, PaneState};

const LABEL: &str = " Categories: ";

fn chip(item: &CategoryItem, theme: &Theme) -> String {
    let text = item.id.map_or_else(|| format!(" {} ", item.name), |id| format!(" {} #{id} ", item.name));
    if item.is_selected {
        format!(
            "{}{}{}{text}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg),
            Theme::reset()
        )
    } else {
        format!("{}{text}{}", Theme::fg(&theme.colors.text_normal), Theme::reset())
    }
}

/// Renders the category chips, wrapping to the terminal width.
pub fn render_sidebar(out: &mut String, sidebar: &PaneState<Vec<CategoryItem>>, theme: &Theme, cols: usize) {
    let label = format!("{}{LABEL}{}", Theme::fg(&theme.colors.accent), Theme::reset());
    let Some(items) = ready_or_status(out, sidebar, &label, theme, cols) else {
        return;
    };

    let indent = " ".repeat(LABEL.len());
    let mut line = label;
    let mut width = LABEL.len();
    for item in items {
        let chip = chip(item, theme);
        let chip_width = visible_width(&chip) + 1;
        if width + chip_width > cols && width > LABEL.len() {
            push_line(out, &line);
            line.clone_from(&indent);
            width = LABEL.len();
        }
        line.push_str(&chip);
        line.push(' ');
        width += chip_width;
    }
    push_line(out, &line);
}

fn ready_or_status<'a>(
    out: &mut String,
    sidebar: &'a PaneState<Vec<CategoryItem>>,
    label: &str,
    theme: &Theme,
    cols: usize,
) -> Option<&'a Vec<CategoryItem>> {
    if let PaneState::Ready(items) = sidebar {
        return Some(items);
    }
    out.push_str(label);
    render_pane_state(out, sidebar, 0, theme, cols.saturating_sub(LABEL.len()))
}
