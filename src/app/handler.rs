//! Event handling and state transitions.
//!
//! [`handle_event`] is the only place [`AppState`] changes. It turns user
//! commands, clock ticks and worker responses into state mutations plus a list
//! of [`Action`]s for the runtime to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Tick`, `Quit`
//! - **Filtering**: `SelectCategory`, `SubmitSearch`, `ClearSearch`
//! - **Paging**: `GoToPage`, `NextPage`, `PrevPage`, `Refresh`
//! - **Detail**: `SelectRecipe`, `CloseDetail`, `Escape`
//! - **Ratings**: `SetRatingName`, `SetRatingScore`, `SetRatingComment`, `SubmitRating`
//! - **Recovery**: `RetryCategories`, `RetryList`, `RetryDetail`, `RetryRatings`
//! - **Worker**: `WorkerResponse`, applied only when its ticket is current
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::{handle_event, Action, AppState, Event};
//! use recipe_explorer::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(12, Duration::from_millis(250), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(render);
//! assert_eq!(actions.len(), 2);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), recipe_explorer::domain::ExplorerError>(())
//! ```

use crate::app::{Action, AppState, ListRequest};
use crate::domain::{normalize_ingredients_csv, Result};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::time::Instant;

/// Events from the user, the clock, or the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Initial load: categories and the first page of recipes.
    Mount,

    /// Periodic clock tick driving the search debounce.
    Tick(Instant),

    /// Picks a category (`None` for all recipes), clearing any search.
    SelectCategory(Option<i64>),

    /// Submits comma-separated ingredient text; blank text clears the search.
    SubmitSearch(String),

    /// Clears the ingredient search.
    ClearSearch,

    /// Loads the given page of the current list.
    GoToPage(u32),
    NextPage,
    PrevPage,

    /// Reloads the current list page and the open detail.
    Refresh,

    /// Opens a recipe's detail panel.
    SelectRecipe(i64),

    /// Closes the detail panel.
    CloseDetail,

    /// Same as `CloseDetail`.
    Escape,

    RetryCategories,
    RetryList,
    RetryDetail,
    RetryRatings,

    /// Switches between grid and list layout.
    ToggleLayout,

    /// Shows or hides the command reference.
    ToggleHelp,

    SetRatingName(String),
    SetRatingScore(i64),
    SetRatingComment(String),

    /// Validates the rating form and submits it for the open recipe.
    SubmitRating,

    Quit,

    /// Wraps a response from the API worker.
    WorkerResponse(WorkerResponse),
}

fn post(message: WorkerMessage) -> Action {
    Action::PostToWorker(message)
}

/// Processes an event, mutates state, and returns whether to re-render plus
/// the actions to execute.
///
/// # Parameters
///
/// * `state` - Application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(needs_render, actions)`; actions are executed in order.
///
/// # Errors
///
/// Currently every event is handled infallibly; the `Result` lets the runtime
/// treat handler failures uniformly.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => {
            let actions = vec![post(state.request_categories()), post(state.request_first_page())];
            Ok((true, actions))
        }
        Event::Tick(now) => {
            let Some(value) = state.search_debouncer.poll(*now) else {
                return Ok((false, vec![]));
            };
            if !state.filter.apply_debounced(value) {
                tracing::trace!("debounced search unchanged");
                return Ok((false, vec![]));
            }
            tracing::debug!(search = %state.filter.debounced_search, "debounced search applied");
            Ok((true, vec![post(state.request_first_page())]))
        }
        Event::SelectCategory(category_id) => {
            state.search_debouncer.cancel();
            if !state.filter.select_category(*category_id) {
                tracing::debug!(category_id = ?category_id, "filter unchanged, skipping reload");
                return Ok((true, vec![]));
            }
            tracing::debug!(category_id = ?category_id, "category selected");
            Ok((true, vec![post(state.request_first_page())]))
        }
        Event::SubmitSearch(text) => {
            let normalized = normalize_ingredients_csv(text);
            tracing::debug!(search = %normalized, "search submitted");
            state.filter.search_input.clone_from(&normalized);
            state.search_debouncer.set(normalized, Instant::now());
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.filter.search_input.clear();
            state.search_debouncer.set(String::new(), Instant::now());
            Ok((true, vec![]))
        }
        Event::GoToPage(page) => {
            let page = state.clamp_page(*page);
            let size = state.list_request.size;
            Ok((true, vec![post(state.request_list(page, size))]))
        }
        Event::NextPage => {
            if !state.has_next_page() {
                return Ok((false, vec![]));
            }
            let ListRequest { page, size } = state.list_request;
            let page = page.saturating_add(1);
            Ok((true, vec![post(state.request_list(page, size))]))
        }
        Event::PrevPage => {
            let ListRequest { page, size } = state.list_request;
            if page <= 1 {
                return Ok((false, vec![]));
            }
            let page = page - 1;
            Ok((true, vec![post(state.request_list(page, size))]))
        }
        Event::Refresh => {
            let ListRequest { page, size } = state.list_request;
            let mut actions = vec![post(state.request_list(page, size))];
            if let Some(recipe_id) = state.selected_recipe {
                actions.push(post(state.request_detail(recipe_id)));
            }
            Ok((true, actions))
        }
        Event::SelectRecipe(recipe_id) => {
            if state.selected_recipe != Some(*recipe_id) {
                state.close_detail();
                state.selected_recipe = Some(*recipe_id);
            }
            tracing::debug!(recipe_id, "recipe selected");
            let actions = vec![post(state.request_detail(*recipe_id)), post(state.request_ratings(*recipe_id))];
            Ok((true, actions))
        }
        Event::CloseDetail | Event::Escape => {
            if state.selected_recipe.is_none() {
                return Ok((false, vec![]));
            }
            tracing::debug!(recipe_id = ?state.selected_recipe, "detail closed");
            state.close_detail();
            Ok((true, vec![]))
        }
        Event::RetryCategories => Ok((true, vec![post(state.request_categories())])),
        Event::RetryList => {
            let request = state.list_request;
            Ok((true, vec![post(state.request_list(request.page, request.size))]))
        }
        Event::RetryDetail => {
            let Some(recipe_id) = state.selected_recipe else {
                return Ok((false, vec![]));
            };
            Ok((true, vec![post(state.request_detail(recipe_id))]))
        }
        Event::RetryRatings => {
            let Some(recipe_id) = state.selected_recipe else {
                return Ok((false, vec![]));
            };
            Ok((true, vec![post(state.request_ratings(recipe_id))]))
        }
        Event::ToggleLayout => {
            state.layout = state.layout.toggled();
            Ok((true, vec![]))
        }
        Event::ToggleHelp => {
            state.show_help = !state.show_help;
            Ok((true, vec![]))
        }
        Event::SetRatingName(name) => {
            if state.selected_recipe.is_none() {
                return Ok((false, vec![]));
            }
            state.rating_form.set_user_name(name);
            Ok((true, vec![]))
        }
        Event::SetRatingScore(score) => {
            if state.selected_recipe.is_none() {
                return Ok((false, vec![]));
            }
            state.rating_form.score = *score;
            Ok((true, vec![]))
        }
        Event::SetRatingComment(comment) => {
            if state.selected_recipe.is_none() {
                return Ok((false, vec![]));
            }
            state.rating_form.set_comment(comment);
            Ok((true, vec![]))
        }
        Event::SubmitRating => {
            let Some(recipe_id) = state.selected_recipe else {
                tracing::debug!("no recipe open, ignoring rating submit");
                return Ok((false, vec![]));
            };
            if state.rating_submit.is_loading() {
                tracing::debug!("rating submission already in flight");
                return Ok((false, vec![]));
            }
            let actions = state.request_rating_submit(recipe_id).map(post).into_iter().collect();
            Ok((true, actions))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => Ok(apply_response(state, response)),
    }
}

fn discard_stale(kind: &str, response: &WorkerResponse) -> (bool, Vec<Action>) {
    tracing::debug!(kind, ticket = %response.ticket(), "discarding stale response");
    (false, vec![])
}

fn apply_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::CategoriesLoaded { ticket, result } => {
            if !state.categories.complete(*ticket, result.clone()) {
                return discard_stale("categories", response);
            }
            (true, vec![])
        }
        WorkerResponse::RecipesLoaded { ticket, result } => {
            if !state.list.complete(*ticket, result.clone()) {
                return discard_stale("recipes", response);
            }
            if let Ok(listing) = result {
                state.list_meta = listing.meta;
                tracing::debug!(
                    items = listing.items.len(),
                    page = listing.meta.page,
                    total = listing.meta.total,
                    "recipe list loaded"
                );
            }
            (true, vec![])
        }
        WorkerResponse::RecipeDetailLoaded {
            ticket,
            recipe_id,
            result,
        } => {
            if state.selected_recipe != Some(*recipe_id) || !state.detail.complete(*ticket, result.clone()) {
                return discard_stale("recipe detail", response);
            }
            if result.is_err() {
                state.detail.clear_data();
            }
            (true, vec![])
        }
        WorkerResponse::RatingsLoaded {
            ticket,
            recipe_id,
            result,
        } => {
            if state.selected_recipe != Some(*recipe_id) || !state.ratings.complete(*ticket, result.clone()) {
                return discard_stale("ratings", response);
            }
            (true, vec![])
        }
        WorkerResponse::RatingCreated {
            ticket,
            recipe_id,
            result,
        } => {
            let is_current = state.rating_submit.complete(*ticket, result.clone());
            match result {
                Ok(rating) => {
                    tracing::debug!(recipe_id, rating_id = rating.id, "rating created");
                    if is_current {
                        state.rating_form.reset();
                    }
                    let mut actions = Vec::new();
                    if state.selected_recipe == Some(*recipe_id) {
                        actions.push(post(state.request_ratings(*recipe_id)));
                        actions.push(post(state.request_detail(*recipe_id)));
                    }
                    let ListRequest { page, size } = state.list_request;
                    actions.push(post(state.request_list(page, size)));
                    (true, actions)
                }
                Err(error) => {
                    if !is_current {
                        return discard_stale("rating submission", response);
                    }
                    tracing::warn!(recipe_id, error = %error, "rating submission failed");
                    (true, vec![])
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ResourceStatus;
    use crate::domain::{ApiError, ListFilter, PageMeta, Rating, RecipeDetail, RecipeListing};
    use crate::ui::Theme;
    use crate::worker::RequestTicket;
    use std::time::Duration;

    const DEBOUNCE: Duration = Duration::from_millis(250);

    fn state() -> AppState {
        AppState::new(12, DEBOUNCE, Theme::default())
    }

    fn messages(actions: &[Action]) -> Vec<&WorkerMessage> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::PostToWorker(m) => Some(m),
                Action::Quit => None,
            })
            .collect()
    }

    fn detail(id: i64) -> RecipeDetail {
        RecipeDetail {
            id,
            title: format!("Recipe {id}"),
            category_name: None,
            description: None,
            avg_rating: None,
            ratings_count: 0,
            instructions: None,
            ingredients: vec![],
        }
    }

    fn rating(id: i64) -> Rating {
        Rating {
            id,
            user_name: "Ada".to_string(),
            score: 4,
            comment: None,
            created_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn mount_loads_categories_and_first_page() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Mount).unwrap();

        assert!(render);
        let sent = messages(&actions);
        assert!(matches!(sent[0], WorkerMessage::LoadCategories { .. }));
        assert!(matches!(
            sent[1],
            WorkerMessage::LoadRecipes { filter: ListFilter::All, page: 1, size: 12, .. }
        ));
        assert!(state.categories.is_loading());
        assert!(state.list.is_loading());
    }

    #[test]
    fn search_propagates_only_after_debounce() {
        let mut state = state();
        let start = Instant::now();

        handle_event(&mut state, &Event::SubmitSearch("chicken, Garlic , lemon".into())).unwrap();
        assert_eq!(state.filter.search_input, "chicken, garlic, lemon");

        let (_, actions) = handle_event(&mut state, &Event::Tick(start)).unwrap();
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::Tick(Instant::now() + DEBOUNCE)).unwrap();
        let sent = messages(&actions);
        assert_eq!(sent.len(), 1);
        assert!(matches!(
            sent[0],
            WorkerMessage::LoadRecipes { filter: ListFilter::Ingredients(csv), page: 1, .. }
                if csv == "chicken, garlic, lemon"
        ));
    }

    #[test]
    fn selecting_category_cancels_pending_search() {
        let mut state = state();
        state.filter.debounced_search = "garlic".to_string();
        handle_event(&mut state, &Event::SubmitSearch("lemon".into())).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::SelectCategory(Some(3))).unwrap();
        assert!(matches!(
            messages(&actions)[0],
            WorkerMessage::LoadRecipes { filter: ListFilter::Category(3), .. }
        ));
        assert!(!state.search_debouncer.is_pending());

        let (_, actions) = handle_event(&mut state, &Event::Tick(Instant::now() + DEBOUNCE * 4)).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut state = state();
        let (_, first) = handle_event(&mut state, &Event::GoToPage(1)).unwrap();
        let (_, second) = handle_event(&mut state, &Event::GoToPage(2)).unwrap();
        let first_ticket = messages(&first)[0].ticket();
        let second_ticket = messages(&second)[0].ticket();

        let listing = |page| RecipeListing {
            items: vec![],
            meta: PageMeta { page, size: 12, total: 30 },
        };

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RecipesLoaded {
                ticket: second_ticket,
                result: Ok(listing(2)),
            }),
        )
        .unwrap();
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RecipesLoaded {
                ticket: first_ticket,
                result: Ok(listing(1)),
            }),
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.list_meta.page, 2);
    }

    #[test]
    fn late_detail_after_close_is_ignored() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SelectRecipe(5)).unwrap();
        let ticket = messages(&actions)[0].ticket();

        handle_event(&mut state, &Event::Escape).unwrap();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RecipeDetailLoaded {
                ticket,
                recipe_id: 5,
                result: Ok(detail(5)),
            }),
        )
        .unwrap();

        assert_eq!(state.selected_recipe, None);
        assert_eq!(state.detail.data(), None);
        assert_eq!(state.detail.status(), ResourceStatus::Idle);
    }

    #[test]
    fn failed_detail_clears_data_and_allows_retry() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SelectRecipe(5)).unwrap();
        let ticket = messages(&actions)[0].ticket();

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RecipeDetailLoaded {
                ticket,
                recipe_id: 5,
                result: Err(ApiError::Network("timed out".into())),
            }),
        )
        .unwrap();
        assert_eq!(state.detail.error(), "Network error: timed out");

        let (_, actions) = handle_event(&mut state, &Event::RetryDetail).unwrap();
        assert!(matches!(
            messages(&actions)[0],
            WorkerMessage::LoadRecipeDetail { recipe_id: 5, .. }
        ));
        assert_eq!(state.detail.error(), "");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectRecipe(1)).unwrap();
        handle_event(&mut state, &Event::SetRatingName("Ada".into())).unwrap();

        let (_, first) = handle_event(&mut state, &Event::SubmitRating).unwrap();
        let (_, second) = handle_event(&mut state, &Event::SubmitRating).unwrap();
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn rating_created_refreshes_ratings_detail_and_list() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectRecipe(1)).unwrap();
        handle_event(&mut state, &Event::SetRatingName("Ada".into())).unwrap();
        handle_event(&mut state, &Event::SetRatingScore(4)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SubmitRating).unwrap();
        let ticket = messages(&actions)[0].ticket();

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RatingCreated {
                ticket,
                recipe_id: 1,
                result: Ok(rating(10)),
            }),
        )
        .unwrap();

        let sent = messages(&actions);
        assert!(matches!(sent[0], WorkerMessage::LoadRatings { recipe_id: 1, .. }));
        assert!(matches!(sent[1], WorkerMessage::LoadRecipeDetail { recipe_id: 1, .. }));
        assert!(matches!(sent[2], WorkerMessage::LoadRecipes { page: 1, size: 12, .. }));
        assert_eq!(state.rating_form.user_name, "");
        assert_eq!(state.rating_form.score, 5);
    }

    #[test]
    fn rating_failure_keeps_form() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectRecipe(1)).unwrap();
        handle_event(&mut state, &Event::SetRatingName("Ada".into())).unwrap();
        handle_event(&mut state, &Event::SetRatingComment("Great".into())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SubmitRating).unwrap();
        let ticket = messages(&actions)[0].ticket();

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RatingCreated {
                ticket,
                recipe_id: 1,
                result: Err(ApiError::Validation("score out of range".into())),
            }),
        )
        .unwrap();

        assert_eq!(state.rating_submit.error(), "score out of range");
        assert_eq!(state.rating_form.user_name, "Ada");
        assert_eq!(state.rating_form.comment, "Great");
    }

    #[test]
    fn rating_created_after_close_only_refreshes_list() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectRecipe(1)).unwrap();
        handle_event(&mut state, &Event::SetRatingName("Ada".into())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SubmitRating).unwrap();
        let ticket = messages(&actions)[0].ticket();
        handle_event(&mut state, &Event::CloseDetail).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RatingCreated {
                ticket,
                recipe_id: 1,
                result: Ok(rating(11)),
            }),
        )
        .unwrap();

        let sent = messages(&actions);
        assert_eq!(sent.len(), 1);
        assert!(matches!(sent[0], WorkerMessage::LoadRecipes { .. }));
    }

    #[test]
    fn rating_text_edits_are_length_capped() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectRecipe(1)).unwrap();
        handle_event(&mut state, &Event::SetRatingName("n".repeat(120))).unwrap();
        handle_event(&mut state, &Event::SetRatingComment("c".repeat(2100))).unwrap();

        assert_eq!(state.rating_form.user_name.len(), 100);
        assert_eq!(state.rating_form.comment.len(), 2000);
    }

    #[test]
    fn rating_edits_ignored_without_open_recipe() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::SetRatingName("Ada".into())).unwrap();
        assert!(!render);
        assert_eq!(state.rating_form.user_name, "");
    }

    fn listing(page: u32, total: u64) -> RecipeListing {
        RecipeListing {
            items: vec![],
            meta: PageMeta { page, size: 12, total },
        }
    }

    fn complete_list(state: &mut AppState, actions: &[Action], result: std::result::Result<RecipeListing, ApiError>) {
        let ticket = messages(actions)[0].ticket();
        handle_event(state, &Event::WorkerResponse(WorkerResponse::RecipesLoaded { ticket, result })).unwrap();
    }

    #[test]
    fn refresh_reloads_current_page_and_open_detail() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::GoToPage(3)).unwrap();
        complete_list(&mut state, &actions, Ok(listing(3, 48)));
        handle_event(&mut state, &Event::SelectRecipe(5)).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Refresh).unwrap();

        assert!(render);
        let sent = messages(&actions);
        assert_eq!(sent.len(), 2);
        assert!(matches!(
            sent[0],
            WorkerMessage::LoadRecipes { filter: ListFilter::All, page: 3, size: 12, .. }
        ));
        assert!(matches!(sent[1], WorkerMessage::LoadRecipeDetail { recipe_id: 5, .. }));
    }

    #[test]
    fn paging_after_failed_filter_change_follows_latest_request() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::GoToPage(3)).unwrap();
        complete_list(&mut state, &actions, Ok(listing(3, 48)));

        let (_, actions) = handle_event(&mut state, &Event::SelectCategory(Some(2))).unwrap();
        complete_list(&mut state, &actions, Err(ApiError::Network("offline".into())));
        assert_eq!(state.list_meta.page, 3);

        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(matches!(
            messages(&actions)[0],
            WorkerMessage::LoadRecipes { filter: ListFilter::Category(2), page: 1, size: 12, .. }
        ));

        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(matches!(
            messages(&actions)[0],
            WorkerMessage::LoadRecipes { filter: ListFilter::Category(2), page: 2, .. }
        ));

        let (_, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(matches!(messages(&actions)[0], WorkerMessage::LoadRecipes { page: 1, .. }));
    }

    #[test]
    fn rating_refresh_keeps_pending_page_request() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectRecipe(1)).unwrap();
        handle_event(&mut state, &Event::SetRatingName("Ada".into())).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SubmitRating).unwrap();
        let ticket = messages(&actions)[0].ticket();
        handle_event(&mut state, &Event::GoToPage(2)).unwrap();

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::RatingCreated {
                ticket,
                recipe_id: 1,
                result: Ok(rating(11)),
            }),
        )
        .unwrap();

        assert!(matches!(messages(&actions)[2], WorkerMessage::LoadRecipes { page: 2, size: 12, .. }));
    }

    #[test]
    fn prev_page_on_first_page_is_noop() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn stale_categories_ticket_is_rejected() {
        let mut state = state();
        handle_event(&mut state, &Event::Mount).unwrap();
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CategoriesLoaded {
                ticket: RequestTicket(999),
                result: Ok(vec![]),
            }),
        )
        .unwrap();
        assert!(!render);
        assert!(state.categories.is_loading());
    }
}
