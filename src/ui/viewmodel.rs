//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`] by [`compute_viewmodel`] and
//! consumed by the renderer. They hold display-ready strings only; every
//! formatting decision (rating pills, labels, empty/loading/error wording)
//! is made here so that components stay dumb.
//!
//! Each pane is a [`PaneState`], so loading, error-with-retry and empty
//! results are always distinct states and never render as a blank area.

use crate::app::{AppState, LayoutMode, Resource, ResourceStatus};
use crate::domain::{format_avg_rating, format_ratings_count, ingredient_tokens, RecipeDetail, RecipeSummary};
use crate::ui::input::COMMANDS;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub sidebar: PaneState<Vec<CategoryItem>>,
    pub list: ListPane,

    /// Detail panel, present while a recipe is open.
    pub detail: Option<PaneState<DetailPanel>>,

    pub footer: FooterInfo,
}

/// Loading, error, empty or ready content of one pane.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneState<T> {
    /// Request in flight; the label says what is loading.
    Loading(String),
    Error(ErrorInfo),
    Empty(EmptyState),
    Ready(T),
}

impl<T> PaneState<T> {
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Failed request with the command that retries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub message: String,

    /// Command to type to retry, e.g. `"retry list"`.
    pub retry: String,
}

/// Empty result message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Search input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Last submitted search text.
    pub query: String,

    /// Ingredient count or usage tip.
    pub hint: String,

    /// Whether the text is still waiting out the debounce.
    pub pending: bool,
}

/// One entry of the category sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryItem {
    /// `None` for the "All recipes" entry.
    pub id: Option<i64>,
    pub name: String,
    pub is_selected: bool,
}

/// The recipe list pane.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPane {
    pub title: String,
    pub filter_badge: String,
    pub count_badge: String,
    pub page_label: String,
    pub layout: LayoutMode,
    pub body: PaneState<Vec<DisplayItem>>,
}

/// One recipe card or row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: i64,
    pub title: String,

    /// Star, average and count, e.g. `"★ 4.25 (3)"`.
    pub rating_pill: String,
    pub category: Option<String>,
    pub description: Option<String>,

    /// Whether this recipe's detail panel is open.
    pub is_open: bool,
}

/// Recipe detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,

    /// `"Avg: 4.25 · 3 ratings"`.
    pub rating_summary: String,
    pub description: Option<String>,

    /// Ingredient lines in recipe order, empty when none are listed.
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub ratings: PaneState<Vec<RatingItem>>,
    pub form: RatingFormInfo,

    /// Whether a reload of this detail is in flight.
    pub refreshing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingItem {
    pub user_name: String,
    pub stars: String,
    pub comment: Option<String>,
    pub created_at: String,
}

/// The "add your rating" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingFormInfo {
    pub user_name: String,
    pub score: String,
    pub comment: String,
    pub submit_label: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// One-line hint for the current context.
    pub keybindings: String,

    /// Full command reference, shown when help is toggled on.
    pub help: Vec<String>,
}

/// Computes the view model for the current state.
#[must_use]
pub fn compute_viewmodel(state: &AppState) -> UIViewModel {
    UIViewModel {
        header: HeaderInfo {
            title: "Recipe Explorer".to_string(),
            subtitle: "Browse · Search · Rate".to_string(),
        },
        search_bar: compute_search_bar(state),
        sidebar: compute_sidebar(state),
        list: compute_list(state),
        detail: state.selected_recipe.map(|_| compute_detail(state)),
        footer: compute_footer(state),
    }
}

fn compute_search_bar(state: &AppState) -> SearchBarInfo {
    let count = ingredient_tokens(&state.filter.search_input).len();
    let hint = match count {
        0 => "Tip: separate with commas".to_string(),
        1 => "1 ingredient".to_string(),
        n => format!("{n} ingredients"),
    };
    SearchBarInfo {
        query: state.filter.search_input.clone(),
        hint,
        pending: state.search_debouncer.is_pending(),
    }
}

fn error_info<T>(resource: &Resource<T>, title: &str, retry: &str) -> ErrorInfo {
    ErrorInfo {
        title: title.to_string(),
        message: resource.error().to_string(),
        retry: retry.to_string(),
    }
}

fn compute_sidebar(state: &AppState) -> PaneState<Vec<CategoryItem>> {
    let categories = &state.categories;
    if categories.is_loading() {
        return PaneState::Loading("Loading…".to_string());
    }
    if categories.has_error() {
        return PaneState::Error(error_info(categories, "Unable to load categories", "retry categories"));
    }

    let selected = state.filter.selected_category;
    let mut items = vec![CategoryItem {
        id: None,
        name: "All recipes".to_string(),
        is_selected: selected.is_none(),
    }];
    items.extend(categories.data().into_iter().flatten().map(|c| CategoryItem {
        id: Some(c.id),
        name: c.name.clone(),
        is_selected: selected == Some(c.id),
    }));
    PaneState::Ready(items)
}

fn rating_pill(avg: Option<f64>, count: u32) -> String {
    format!("★ {} ({count})", format_avg_rating(avg))
}

fn display_item(recipe: &RecipeSummary, open: Option<i64>) -> DisplayItem {
    DisplayItem {
        id: recipe.id,
        title: recipe.title.clone(),
        rating_pill: rating_pill(recipe.avg_rating, recipe.ratings_count),
        category: recipe.category_name.clone(),
        description: recipe.description.clone(),
        is_open: open == Some(recipe.id),
    }
}

fn compute_list(state: &AppState) -> ListPane {
    let meta = state.list_meta;
    let page_label = if state.filter.is_search_active() {
        format!("Page {}", meta.page)
    } else {
        format!("Page {} of {}", meta.page, meta.page_count())
    };

    let list = &state.list;
    let body = if list.is_loading() {
        PaneState::Loading("Loading recipes…".to_string())
    } else if list.has_error() {
        PaneState::Error(error_info(list, "Unable to load recipes", "retry list"))
    } else if list.status() == ResourceStatus::Idle {
        PaneState::Loading("Loading recipes…".to_string())
    } else if state.recipes().is_empty() {
        PaneState::Empty(EmptyState {
            message: "No recipes found.".to_string(),
            subtitle: "Try a different category, or search with fewer ingredients.".to_string(),
        })
    } else {
        PaneState::Ready(
            state
                .recipes()
                .iter()
                .map(|recipe| display_item(recipe, state.selected_recipe))
                .collect(),
        )
    };

    ListPane {
        title: state.page_title(),
        filter_badge: state.active_filter_label(),
        count_badge: state.count_label(),
        page_label,
        layout: state.layout,
        body,
    }
}

fn ingredient_line(name: &str, quantity: Option<&str>) -> String {
    match quantity {
        Some(quantity) if !quantity.is_empty() => format!("{name} ({quantity})"),
        _ => name.to_string(),
    }
}

fn compute_ratings(state: &AppState) -> PaneState<Vec<RatingItem>> {
    let ratings = &state.ratings;
    if ratings.is_loading() {
        return PaneState::Loading("Loading ratings…".to_string());
    }
    if ratings.has_error() {
        return PaneState::Error(error_info(ratings, "Unable to load ratings", "retry ratings"));
    }
    let items: Vec<RatingItem> = ratings
        .data()
        .into_iter()
        .flatten()
        .map(|rating| RatingItem {
            user_name: rating.user_name.clone(),
            stars: rating.stars(),
            comment: rating.comment.clone().filter(|c| !c.is_empty()),
            created_at: rating.created_at_display(),
        })
        .collect();
    if items.is_empty() {
        return PaneState::Empty(EmptyState {
            message: "No ratings yet.".to_string(),
            subtitle: "Be the first to rate!".to_string(),
        });
    }
    PaneState::Ready(items)
}

fn compute_form(state: &AppState) -> RatingFormInfo {
    let submitting = state.rating_submit.is_loading();
    RatingFormInfo {
        user_name: state.rating_form.user_name.clone(),
        score: state.rating_form.score.to_string(),
        comment: state.rating_form.comment.clone(),
        submit_label: if submitting { "Submitting…" } else { "Submit rating" }.to_string(),
        error: state
            .rating_submit
            .has_error()
            .then(|| state.rating_submit.error().to_string()),
    }
}

fn detail_panel(state: &AppState, detail: &RecipeDetail) -> DetailPanel {
    DetailPanel {
        id: detail.id,
        title: detail.title.clone(),
        category: detail.category_name.clone(),
        rating_summary: format!(
            "Avg: {} · {}",
            format_avg_rating(detail.avg_rating),
            format_ratings_count(detail.ratings_count)
        ),
        description: detail.description.clone().filter(|d| !d.is_empty()),
        ingredients: detail
            .ingredients
            .iter()
            .map(|i| ingredient_line(&i.name, i.quantity.as_deref()))
            .collect(),
        instructions: detail.instructions.clone().filter(|i| !i.is_empty()),
        ratings: compute_ratings(state),
        form: compute_form(state),
        refreshing: state.detail.is_loading(),
    }
}

fn compute_detail(state: &AppState) -> PaneState<DetailPanel> {
    let detail = &state.detail;
    if let Some(data) = detail.data() {
        return PaneState::Ready(detail_panel(state, data));
    }
    if detail.has_error() {
        return PaneState::Error(error_info(detail, "Unable to load recipe detail", "retry detail"));
    }
    PaneState::Loading("Loading recipe detail…".to_string())
}

fn compute_footer(state: &AppState) -> FooterInfo {
    let keybindings = if state.selected_recipe.is_some() {
        "name <text>  score <1-5>  comment <text>  rate  close  help  quit"
    } else {
        "cat <id|name>  search <csv>  open <id>  next/prev  layout  help  quit"
    };
    let help = if state.show_help {
        COMMANDS
            .iter()
            .map(|(usage, description)| format!("{usage:<28} {description}"))
            .collect()
    } else {
        Vec::new()
    };
    FooterInfo {
        keybindings: keybindings.to_string(),
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Category, Ingredient, PageMeta, RecipeListing};
    use crate::ui::Theme;
    use crate::worker::WorkerMessage;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(12, Duration::from_millis(250), Theme::default())
    }

    fn summary(id: i64, avg: Option<f64>, count: u32) -> RecipeSummary {
        RecipeSummary {
            id,
            title: format!("Recipe {id}"),
            category_name: Some("Mains".to_string()),
            description: None,
            avg_rating: avg,
            ratings_count: count,
        }
    }

    fn load_list(state: &mut AppState, items: Vec<RecipeSummary>, total: u64) {
        let ticket = state.request_first_page().ticket();
        let meta = PageMeta { page: 1, size: 12, total };
        state.list.complete(ticket, Ok(RecipeListing { items, meta }));
        state.list_meta = meta;
    }

    #[test]
    fn list_shows_loading_error_and_empty_distinctly() {
        let mut state = state();
        let ticket = state.request_first_page().ticket();
        assert_eq!(
            compute_viewmodel(&state).list.body,
            PaneState::Loading("Loading recipes…".to_string())
        );

        state.list.complete(ticket, Err(ApiError::Network("refused".into())));
        let PaneState::Error(error) = compute_viewmodel(&state).list.body else {
            panic!("expected error state");
        };
        assert_eq!(error.title, "Unable to load recipes");
        assert_eq!(error.retry, "retry list");

        load_list(&mut state, vec![], 0);
        assert!(matches!(compute_viewmodel(&state).list.body, PaneState::Empty(_)));
    }

    #[test]
    fn rating_pill_formats_average_and_count() {
        let mut state = state();
        load_list(&mut state, vec![summary(1, Some(4.25), 3), summary(2, None, 0)], 2);

        let vm = compute_viewmodel(&state);
        let items = vm.list.body.ready().unwrap();
        assert_eq!(items[0].rating_pill, "★ 4.25 (3)");
        assert_eq!(items[1].rating_pill, "★ — (0)");
        assert_eq!(vm.list.count_badge, "Total: 2");
        assert_eq!(vm.list.page_label, "Page 1 of 1");
    }

    #[test]
    fn sidebar_marks_selected_category() {
        let mut state = state();
        let WorkerMessage::LoadCategories { ticket } = state.request_categories() else {
            unreachable!();
        };
        state
            .categories
            .complete(ticket, Ok(vec![Category { id: 3, name: "Soups".to_string() }]));
        state.filter.selected_category = Some(3);

        let vm = compute_viewmodel(&state);
        let items = vm.sidebar.ready().unwrap();
        assert_eq!(items.len(), 2);
        assert!(!items[0].is_selected);
        assert!(items[1].is_selected);
    }

    #[test]
    fn detail_panel_formats_summary_and_ingredients() {
        let mut state = state();
        state.selected_recipe = Some(8);
        let detail_ticket = state.request_detail(8).ticket();
        assert_eq!(
            compute_viewmodel(&state).detail,
            Some(PaneState::Loading("Loading recipe detail…".to_string()))
        );

        state.detail.complete(
            detail_ticket,
            Ok(RecipeDetail {
                id: 8,
                title: "Lemon Chicken".to_string(),
                category_name: None,
                description: Some(String::new()),
                avg_rating: Some(4.0),
                ratings_count: 1,
                instructions: None,
                ingredients: vec![
                    Ingredient { id: 1, name: "chicken".to_string(), quantity: Some("500 g".to_string()) },
                    Ingredient { id: 2, name: "lemon".to_string(), quantity: None },
                ],
            }),
        );
        let ratings_ticket = state.request_ratings(8).ticket();
        state.ratings.complete(ratings_ticket, Ok(vec![]));

        let vm = compute_viewmodel(&state);
        let panel = vm.detail.as_ref().and_then(PaneState::ready).unwrap();
        assert_eq!(panel.rating_summary, "Avg: 4.00 · 1 rating");
        assert_eq!(panel.ingredients, vec!["chicken (500 g)", "lemon"]);
        assert_eq!(panel.description, None);
        assert!(matches!(panel.ratings, PaneState::Empty(_)));
        assert_eq!(panel.form.submit_label, "Submit rating");
        assert_eq!(vm.footer.keybindings.split_whitespace().next(), Some("name"));
    }

    #[test]
    fn search_hint_counts_ingredients() {
        let mut state = state();
        state.filter.search_input = "chicken, garlic".to_string();
        assert_eq!(compute_viewmodel(&state).search_bar.hint, "2 ingredients");

        state.filter.search_input.clear();
        assert_eq!(compute_viewmodel(&state).search_bar.hint, "Tip: separate with commas");
    }

    #[test]
    fn help_lists_every_command() {
        let mut state = state();
        state.show_help = true;
        assert_eq!(compute_viewmodel(&state).footer.help.len(), COMMANDS.len());
    }
}
