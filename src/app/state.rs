//! Application state container.
//!
//! [`AppState`] is the single source of truth for the explorer: the filter,
//! the selected recipe, the rating form, and one [`Resource`] per remote
//! resource. It is only mutated by [`handle_event`](crate::app::handle_event).
//!
//! Requests are built here: each `request_*` method issues a fresh
//! [`RequestTicket`], marks the target resource as loading under that ticket,
//! and returns the [`WorkerMessage`] to send.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::AppState;
//! use recipe_explorer::ui::Theme;
//! use std::time::Duration;
//!
//! let state = AppState::new(12, Duration::from_millis(250), Theme::default());
//! assert_eq!(state.page_title(), "All recipes");
//! assert_eq!(state.active_filter_label(), "Browsing: All");
//! ```

use super::debounce::Debouncer;
use super::filter::FilterState;
use super::modes::LayoutMode;
use super::rating::RatingForm;
use super::resource::Resource;
use crate::domain::{Category, PageMeta, Rating, RecipeDetail, RecipeListing, RecipeSummary};
use crate::ui::theme::Theme;
use crate::worker::{RequestTicket, WorkerMessage};
use std::time::Duration;

/// Page and size of the most recent list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub page: u32,
    pub size: u32,
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Sidebar categories, loaded once at mount.
    pub categories: Resource<Vec<Category>>,

    /// Current page of recipes.
    pub list: Resource<RecipeListing>,

    /// Pagination metadata of the last successful list load.
    ///
    /// Survives failed reloads so the footer keeps showing a sensible total.
    pub list_meta: PageMeta,

    /// Page and size of the latest list request, reused by retry.
    pub list_request: ListRequest,

    /// Recipe whose detail panel is open.
    pub selected_recipe: Option<i64>,

    pub detail: Resource<RecipeDetail>,

    /// Ratings of the open recipe.
    pub ratings: Resource<Vec<Rating>>,

    pub rating_form: RatingForm,

    /// In-flight or failed rating submission.
    ///
    /// `Loading` while the create request is pending; its error holds both
    /// validation and server messages.
    pub rating_submit: Resource<Rating>,

    pub filter: FilterState,

    /// Delays search text before it reaches `filter.debounced_search`.
    pub search_debouncer: Debouncer<String>,

    pub layout: LayoutMode,

    /// Whether the command reference is shown instead of the footer hint.
    pub show_help: bool,

    /// Page size for every list request.
    pub page_size: u32,

    pub theme: Theme,

    last_ticket: RequestTicket,
}

impl AppState {
    /// Creates the initial state; nothing is loaded until `Event::Mount`.
    ///
    /// # Parameters
    ///
    /// * `page_size` - Recipes per page (0 is treated as 1)
    /// * `search_debounce` - Quiet period before search text is applied
    /// * `theme` - Color scheme used by the renderer
    #[must_use]
    pub fn new(page_size: u32, search_debounce: Duration, theme: Theme) -> Self {
        let page_size = page_size.max(1);
        Self {
            categories: Resource::new(),
            list: Resource::new(),
            list_meta: PageMeta {
                page: 1,
                size: page_size,
                total: 0,
            },
            list_request: ListRequest {
                page: 1,
                size: page_size,
            },
            selected_recipe: None,
            detail: Resource::new(),
            ratings: Resource::new(),
            rating_form: RatingForm::default(),
            rating_submit: Resource::new(),
            filter: FilterState::default(),
            search_debouncer: Debouncer::new(search_debounce),
            layout: LayoutMode::default(),
            show_help: false,
            page_size,
            theme,
            last_ticket: RequestTicket::default(),
        }
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.last_ticket = self.last_ticket.next();
        self.last_ticket
    }

    pub fn request_categories(&mut self) -> WorkerMessage {
        let ticket = self.issue_ticket();
        self.categories.begin(ticket);
        WorkerMessage::LoadCategories { ticket }
    }

    /// Starts a list load with the current filter.
    pub fn request_list(&mut self, page: u32, size: u32) -> WorkerMessage {
        let ticket = self.issue_ticket();
        let page = page.max(1);
        self.list.begin(ticket);
        self.list_request = ListRequest { page, size };
        let filter = self.filter.list_filter();
        tracing::debug!(ticket = %ticket, page, size, filter = ?filter, "requesting recipe list");
        WorkerMessage::LoadRecipes {
            ticket,
            filter,
            page,
            size,
        }
    }

    /// Starts a list load at page 1 with the configured page size.
    pub fn request_first_page(&mut self) -> WorkerMessage {
        self.request_list(1, self.page_size)
    }

    pub fn request_detail(&mut self, recipe_id: i64) -> WorkerMessage {
        let ticket = self.issue_ticket();
        self.detail.begin(ticket);
        WorkerMessage::LoadRecipeDetail { ticket, recipe_id }
    }

    pub fn request_ratings(&mut self, recipe_id: i64) -> WorkerMessage {
        let ticket = self.issue_ticket();
        self.ratings.begin(ticket);
        WorkerMessage::LoadRatings { ticket, recipe_id }
    }

    /// Validates the rating form and starts the create request.
    ///
    /// On validation failure the message is stored on `rating_submit` and
    /// `None` is returned; the form is left untouched.
    pub fn request_rating_submit(&mut self, recipe_id: i64) -> Option<WorkerMessage> {
        match self.rating_form.validate() {
            Ok(rating) => {
                let ticket = self.issue_ticket();
                self.rating_submit.begin(ticket);
                Some(WorkerMessage::CreateRating {
                    ticket,
                    recipe_id,
                    rating,
                })
            }
            Err(error) => {
                tracing::debug!(error = %error, "rating form rejected");
                self.rating_submit.reject(error.message());
                None
            }
        }
    }

    /// Closes the detail panel and forgets everything tied to it.
    pub fn close_detail(&mut self) {
        self.selected_recipe = None;
        self.detail.clear();
        self.ratings.clear();
        self.rating_form.reset();
        self.rating_submit.clear();
    }

    /// Recipes of the current page, empty before the first load.
    #[must_use]
    pub fn recipes(&self) -> &[RecipeSummary] {
        self.list
            .data()
            .map(|listing| listing.items.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn category_name(&self, category_id: i64) -> Option<&str> {
        self.categories
            .data()?
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.as_str())
    }

    /// Heading of the list pane.
    #[must_use]
    pub fn page_title(&self) -> String {
        if self.filter.is_search_active() {
            return "Ingredient search results".to_string();
        }
        match self.filter.selected_category {
            None => "All recipes".to_string(),
            Some(id) => self.category_name(id).unwrap_or("Recipes").to_string(),
        }
    }

    /// Badge describing which filter produced the list.
    #[must_use]
    pub fn active_filter_label(&self) -> String {
        if self.filter.is_search_active() {
            return format!("Ingredients: {}", self.filter.debounced_search);
        }
        match self.filter.selected_category {
            None => "Browsing: All".to_string(),
            Some(id) => self
                .category_name(id)
                .map_or_else(|| "Category selected".to_string(), |name| format!("Category: {name}")),
        }
    }

    /// `"Total: n"` while browsing, `"Matches: n"` while searching.
    #[must_use]
    pub fn count_label(&self) -> String {
        if self.filter.is_search_active() {
            format!("Matches: {}", self.recipes().len())
        } else {
            format!("Total: {}", self.list_meta.total)
        }
    }

    /// Whether a page after the latest requested one can exist.
    ///
    /// Search responses carry no total, so a full page is taken to mean more
    /// results may follow.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        if self.filter.is_search_active() {
            return self.recipes().len() >= self.list_meta.size as usize && !self.recipes().is_empty();
        }
        self.list_request.page < self.list_meta.page_count()
    }

    /// Clamps a requested page to what the current listing allows.
    #[must_use]
    pub fn clamp_page(&self, page: u32) -> u32 {
        let page = page.max(1);
        if self.filter.is_search_active() || self.list.data().is_none() {
            return page;
        }
        page.min(self.list_meta.page_count())
    }
}
