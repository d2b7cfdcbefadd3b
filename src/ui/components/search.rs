//! Search bar component renderer.

use crate::ui::helpers::{push_split_line, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the ingredient search line.
///
/// ```text
///  Search: chicken, garlic …                               2 ingredients
/// ```
///
/// A trailing ellipsis marks text that is still waiting out the debounce.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let hint = format!("{}{} ", Theme::fg(&theme.colors.text_dim), search.hint);
    let max_query = cols.saturating_sub(search.hint.chars().count() + 14);

    let mut left = format!(" {}Search:{} ", Theme::fg(&theme.colors.accent), Theme::reset());
    left.push_str(&Theme::fg(&theme.colors.text_normal));
    if search.query.is_empty() {
        left.push_str(&Theme::fg(&theme.colors.text_dim));
        left.push_str(&truncate("chicken, garlic, lemon", max_query));
    } else {
        left.push_str(&truncate(&search.query, max_query));
    }
    if search.pending {
        left.push_str(&Theme::fg(&theme.colors.loading_fg));
        left.push_str(" …");
    }

    push_split_line(out, &left, &hint, cols);
}
