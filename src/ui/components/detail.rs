//! Recipe detail panel renderer.
//!
//! Shows the open recipe below the list: summary, ingredients, instructions,
//! ratings and the rating form.

use super::status::render_pane_state;
use crate::ui::helpers::{push_line, push_split_line, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailPanel, PaneState, RatingFormInfo, RatingItem};

fn section(out: &mut String, title: &str, theme: &Theme) {
    push_line(out, &format!(" {}{}{title}", Theme::bold(), Theme::fg(&theme.colors.accent)));
}

/// Renders the detail pane in whichever state it is.
pub fn render_detail(out: &mut String, detail: &PaneState<DetailPanel>, theme: &Theme, cols: usize) {
    let Some(panel) = render_pane_state(out, detail, 1, theme, cols) else {
        return;
    };

    let mut title = format!(" {}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), panel.title);
    if let Some(category) = &panel.category {
        title.push_str(&format!("{}  {}[{category}]", Theme::reset(), Theme::fg(&theme.colors.accent)));
    }
    if panel.refreshing {
        title.push_str(&format!("  {}⟳", Theme::fg(&theme.colors.loading_fg)));
    }
    let summary = format!("{}{} ", Theme::fg(&theme.colors.rating_fg), panel.rating_summary);
    push_split_line(out, &title, &summary, cols);

    let width = cols.saturating_sub(4);
    if let Some(description) = &panel.description {
        for line in wrap(description, width) {
            push_line(out, &format!("   {}{line}", Theme::fg(&theme.colors.text_dim)));
        }
    }

    section(out, "Ingredients", theme);
    if panel.ingredients.is_empty() {
        push_line(out, &format!("   {}No ingredients listed.", Theme::fg(&theme.colors.text_dim)));
    }
    for ingredient in &panel.ingredients {
        push_line(out, &format!("   {}• {}", Theme::fg(&theme.colors.text_normal), truncate(ingredient, width)));
    }

    section(out, "Instructions", theme);
    match &panel.instructions {
        Some(instructions) => {
            for line in wrap(instructions, width) {
                push_line(out, &format!("   {}{line}", Theme::fg(&theme.colors.text_normal)));
            }
        }
        None => push_line(out, &format!("   {}No instructions provided.", Theme::fg(&theme.colors.text_dim))),
    }

    section(out, "Ratings", theme);
    if let Some(ratings) = render_pane_state(out, &panel.ratings, 3, theme, cols) {
        for rating in ratings {
            render_rating(out, rating, theme, width);
        }
    }

    section(out, "Add your rating", theme);
    render_form(out, &panel.form, theme, width);
}

fn render_rating(out: &mut String, rating: &RatingItem, theme: &Theme, width: usize) {
    push_line(
        out,
        &format!(
            "   {}{}{}  {}{}{}  {}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.text_normal),
            truncate(&rating.user_name, 30),
            Theme::reset(),
            Theme::fg(&theme.colors.rating_fg),
            rating.stars,
            Theme::fg(&theme.colors.text_dim),
            rating.created_at
        ),
    );
    if let Some(comment) = &rating.comment {
        for line in wrap(comment, width.saturating_sub(2)) {
            push_line(out, &format!("     {}{line}", Theme::fg(&theme.colors.text_normal)));
        }
    }
}

fn render_form(out: &mut String, form: &RatingFormInfo, theme: &Theme, width: usize) {
    let field = |label: &str, value: &str, placeholder: &str| {
        let value = if value.is_empty() {
            format!("{}{placeholder}", Theme::fg(&theme.colors.text_dim))
        } else {
            format!("{}{}", Theme::fg(&theme.colors.text_normal), truncate(value, width.saturating_sub(12)))
        };
        format!("   {}{label:<9}{}{value}", Theme::fg(&theme.colors.text_dim), Theme::reset())
    };

    push_line(out, &field("Name", &form.user_name, "Your name"));
    push_line(out, &field("Score", &form.score, "5"));
    push_line(out, &field("Comment", &form.comment, "What did you think? (optional)"));
    push_line(
        out,
        &format!("   {}{}[ {} ]{}  type `rate`", Theme::bold(), Theme::fg(&theme.colors.accent), form.submit_label, Theme::reset()),
    );
    if let Some(error) = &form.error {
        push_line(out, &format!("   {}{}", Theme::fg(&theme.colors.error_fg), truncate(error, width)));
    }
}
