//! Composable UI component renderers.
//!
//! Each component appends its lines to a frame buffer. The layout is a single
//! top-to-bottom column, because the shell reads commands on the line below
//! the frame:
//!
//! ```text
//! [Header]
//! [Search bar]
//! [Border]
//! [Category chips]
//! [Border]
//! [List title, badges, recipes]
//! [Border + detail panel, when a recipe is open]
//! [Border]
//! [Footer]
//! ```
//!
//! # Components
//!
//! - [`header`]: Brand title bar
//! - [`search`]: Ingredient search line
//! - [`sidebar`]: Category chips
//! - [`recipes`]: Recipe grid or list
//! - [`detail`]: Recipe detail, ratings and rating form
//! - [`status`]: Loading, error and empty states shared by all panes
//! - [`footer`]: Command hints and help

mod detail;
mod footer;
mod header;
mod recipes;
mod search;
mod sidebar;
mod status;

use crate::ui::helpers::push_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use footer::render_footer;
use header::render_header;
use recipes::render_recipes;
use search::render_search_bar;
use sidebar::render_sidebar;

/// Appends a horizontal border line.
fn render_border(out: &mut String, color: &str, cols: usize) {
    push_line(out, &format!("{}{}", Theme::fg(color), "─".repeat(cols)));
}

/// Renders a whole frame into `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_search_bar(out, &vm.search_bar, theme, cols);
    render_border(out, &theme.colors.border, cols);
    render_sidebar(out, &vm.sidebar, theme, cols);
    render_border(out, &theme.colors.border, cols);
    render_recipes(out, &vm.list, theme, cols);

    if let Some(detail) = &vm.detail {
        render_border(out, &theme.colors.border, cols);
        render_detail(out, detail, theme, cols);
    }

    render_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
