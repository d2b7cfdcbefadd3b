//! Recipe list renderer, in grid or list layout.

use super::status::render_pane_state;
use crate::app::LayoutMode;
use crate::ui::helpers::{push_line, push_padded, push_split_line, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListPane};

/// Width of one grid card including its gutter.
const CARD_WIDTH: usize = 36;

/// Renders the list pane: title, filter/count badges, then the recipes.
pub fn render_recipes(out: &mut String, pane: &ListPane, theme: &Theme, cols: usize) {
    let title = format!(" {}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), pane.title);
    let view = format!("{}View: {} ", Theme::fg(&theme.colors.text_dim), pane.layout.label());
    push_split_line(out, &title, &view, cols);

    let badges = format!(
        " {accent}[{}]{reset} {accent}[{}]{reset}",
        pane.filter_badge,
        pane.count_badge,
        accent = Theme::fg(&theme.colors.accent),
        reset = Theme::reset(),
    );
    let page = format!("{}{} ", Theme::fg(&theme.colors.text_dim), pane.page_label);
    push_split_line(out, &badges, &page, cols);
    out.push('\n');

    let Some(items) = render_pane_state(out, &pane.body, 1, theme, cols) else {
        return;
    };
    match pane.layout {
        LayoutMode::List => render_rows(out, items, theme, cols),
        LayoutMode::Grid => render_cards(out, items, theme, cols),
    }
}

fn title_style(item: &DisplayItem, theme: &Theme) -> String {
    if item.is_open {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    }
}

/// One recipe per row, description underneath.
fn render_rows(out: &mut String, items: &[DisplayItem], theme: &Theme, cols: usize) {
    for item in items {
        let pill = format!("{}{} ", Theme::fg(&theme.colors.rating_fg), item.rating_pill);
        let max_title = cols.saturating_sub(item.rating_pill.chars().count() + 12);
        let left = format!(
            " {}#{:<4}{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            item.id,
            title_style(item, theme),
            truncate(&item.title, max_title),
            Theme::reset()
        );
        push_split_line(out, &left, &pill, cols);

        let details: Vec<&str> = [item.category.as_deref(), item.description.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !details.is_empty() {
            let text = truncate(&details.join(" · "), cols.saturating_sub(7));
            push_line(out, &format!("      {}{text}", Theme::fg(&theme.colors.text_dim)));
        }
    }
}

/// Cards laid out `cols / CARD_WIDTH` per row, three lines each.
fn render_cards(out: &mut String, items: &[DisplayItem], theme: &Theme, cols: usize) {
    let per_row = (cols / CARD_WIDTH).max(1);
    let inner = CARD_WIDTH - 2;

    for row in items.chunks(per_row) {
        let mut lines = [String::new(), String::new(), String::new()];
        for item in row {
            let title = format!(
                " {}{}{}",
                title_style(item, theme),
                truncate(&item.title, inner - 1),
                Theme::reset()
            );
            push_padded(&mut lines[0], &title, CARD_WIDTH);

            let mut meta = format!(" {}{}{}", Theme::fg(&theme.colors.rating_fg), item.rating_pill, Theme::reset());
            if let Some(category) = &item.category {
                let room = inner.saturating_sub(item.rating_pill.chars().count() + 3);
                meta.push_str(&format!("  {}{}{}", Theme::fg(&theme.colors.text_dim), truncate(category, room), Theme::reset()));
            }
            push_padded(&mut lines[1], &meta, CARD_WIDTH);

            let open = format!(" {}View details: open {}{}", Theme::fg(&theme.colors.text_dim), item.id, Theme::reset());
            push_padded(&mut lines[2], &open, CARD_WIDTH);
        }
        for line in &lines {
            push_line(out, line.trim_end());
        }
        out.push('\n');
    }
}
