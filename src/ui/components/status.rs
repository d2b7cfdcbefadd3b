//! Loading, error and empty state renderers shared by all panes.

use crate::ui::helpers::{push_line, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, ErrorInfo, PaneState};

/// Renders a non-ready pane state and returns the ready content, if any.
///
/// Loading, error and empty states always produce at least one line so a
/// pane is never blank.
pub fn render_pane_state<'a, T>(
    out: &mut String,
    state: &'a PaneState<T>,
    indent: usize,
    theme: &Theme,
    cols: usize,
) -> Option<&'a T> {
    let pad = " ".repeat(indent);
    let width = cols.saturating_sub(indent);
    match state {
        PaneState::Loading(label) => {
            push_line(out, &format!("{pad}{}⟳ {}", Theme::fg(&theme.colors.loading_fg), truncate(label, width)));
            None
        }
        PaneState::Error(error) => {
            render_error(out, error, &pad, theme, width);
            None
        }
        PaneState::Empty(empty) => {
            render_empty_state(out, empty, &pad, theme, width);
            None
        }
        PaneState::Ready(value) => Some(value),
    }
}

fn render_error(out: &mut String, error: &ErrorInfo, pad: &str, theme: &Theme, width: usize) {
    push_line(
        out,
        &format!("{pad}{}{}✗ {}", Theme::bold(), Theme::fg(&theme.colors.error_fg), truncate(&error.title, width)),
    );
    if !error.message.is_empty() {
        push_line(out, &format!("{pad}  {}{}", Theme::fg(&theme.colors.error_fg), truncate(&error.message, width)));
    }
    push_line(
        out,
        &format!("{pad}  {}Type `{}` to try again.", Theme::fg(&theme.colors.text_dim), error.retry),
    );
}

/// Renders an empty result message with its dimmed subtitle.
fn render_empty_state(out: &mut String, empty: &EmptyState, pad: &str, theme: &Theme, width: usize) {
    push_line(out, &format!("{pad}{}{}", Theme::fg(&theme.colors.empty_state_fg), truncate(&empty.message, width)));
    if !empty.subtitle.is_empty() {
        push_line(
            out,
            &format!("{pad}{}{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), truncate(&empty.subtitle, width)),
        );
    }
}
