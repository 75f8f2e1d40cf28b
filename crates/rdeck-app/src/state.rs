//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::message::FocusMove;
use rdeck_core::{filter_controls, filter_recipes, CategoryFilter, Recipe};

/// Shown while a fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Shown in place of the grid when a fetch fails, whatever the cause
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";

/// Shown by the detail view when navigation carried no record
pub const NOT_FOUND_MESSAGE: &str = "Recipe not found";

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Collection,
    Detail,
}

/// Result of the collection fetch for the current mount
///
/// Moves from `Pending` to `Ready` or `Failed` once per mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Ready {
        recipes: Vec<Recipe>,
        fetched_at: DateTime<Local>,
    },
    Failed {
        message: String,
    },
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

/// State of the collection view
#[derive(Debug, Clone, Default)]
pub struct CollectionState {
    /// Locator of the current mount (empty before the first mount)
    pub locator: String,

    pub fetch: FetchState,

    pub filter: CategoryFilter,

    /// Index of the focused card within the filtered subset
    pub focused: usize,

    /// Token of the most recently issued fetch; 0 means never mounted
    pub request_token: u64,

    /// Column count used by the last render, for vertical focus moves
    pub grid_columns: usize,
}

impl CollectionState {
    pub fn new() -> Self {
        Self {
            grid_columns: 1,
            ..Default::default()
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.request_token > 0
    }

    /// Start a new mount on `locator` and return the token for its fetch
    ///
    /// Resets the filter and focus; the previous collection is discarded.
    pub fn mount(&mut self, locator: impl Into<String>) -> u64 {
        self.request_token += 1;
        self.locator = locator.into();
        self.fetch = FetchState::Pending;
        self.filter = CategoryFilter::All;
        self.focused = 0;
        self.request_token
    }

    /// Apply a fetch outcome if it belongs to the latest mount and that mount
    /// is still pending. Returns whether the outcome was applied.
    pub fn resolve(&mut self, token: u64, outcome: std::result::Result<Vec<Recipe>, String>) -> bool {
        if token != self.request_token || !self.fetch.is_pending() {
            return false;
        }

        self.fetch = match outcome {
            Ok(recipes) => FetchState::Ready {
                recipes,
                fetched_at: Local::now(),
            },
            Err(_) => FetchState::Failed {
                message: FETCH_ERROR_MESSAGE.to_string(),
            },
        };
        true
    }

    /// The fetched collection; empty unless the fetch succeeded
    pub fn recipes(&self) -> &[Recipe] {
        match &self.fetch {
            FetchState::Ready { recipes, .. } => recipes,
            _ => &[],
        }
    }

    /// Filter controls to render; none unless the fetch succeeded
    pub fn filter_controls(&self) -> Vec<CategoryFilter> {
        match &self.fetch {
            FetchState::Ready { recipes, .. } => filter_controls(recipes),
            _ => Vec::new(),
        }
    }

    /// Recipes passing the current filter
    pub fn visible(&self) -> Vec<&Recipe> {
        filter_recipes(self.recipes(), &self.filter)
    }

    pub fn focused_recipe(&self) -> Option<&Recipe> {
        self.visible().get(self.focused).copied()
    }

    pub fn select_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.focused = 0;
        }
    }

    /// Select the control at `index`; out-of-range indices are ignored
    pub fn select_filter_index(&mut self, index: usize) {
        if let Some(filter) = self.filter_controls().into_iter().nth(index) {
            self.select_filter(filter);
        }
    }

    /// Step to the next or previous control, wrapping around
    pub fn cycle_filter(&mut self, forward: bool) {
        let controls = self.filter_controls();
        if controls.is_empty() {
            return;
        }
        let current = controls.iter().position(|c| *c == self.filter).unwrap_or(0);
        let next = if forward {
            (current + 1) % controls.len()
        } else {
            (current + controls.len() - 1) % controls.len()
        };
        self.select_filter(controls[next].clone());
    }

    pub fn move_focus(&mut self, direction: FocusMove) {
        let len = self.visible().len();
        if len == 0 {
            self.focused = 0;
            return;
        }
        let cols = self.grid_columns.max(1);
        let last = len - 1;
        let current = self.focused.min(last);

        self.focused = match direction {
            FocusMove::Left => current.saturating_sub(1),
            FocusMove::Right => (current + 1).min(last),
            FocusMove::Up => current.checked_sub(cols).unwrap_or(current),
            FocusMove::Down => {
                if current + cols <= last {
                    current + cols
                } else if current / cols < last / cols {
                    // Partial last row: land on its final card
                    last
                } else {
                    current
                }
            }
            FocusMove::First => 0,
            FocusMove::Last => last,
        };
    }
}

/// State of the detail view: the record handed over by navigation
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub recipe: Option<Recipe>,

    /// First visible line of the detail body
    pub scroll: u16,

    /// Largest useful scroll offset, updated on render
    pub max_scroll: u16,

    /// Body height from the last render, used as the page size
    pub viewport_height: u16,
}

impl DetailState {
    pub fn open(recipe: Option<Recipe>) -> Self {
        Self {
            recipe,
            ..Default::default()
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }

    pub fn page_size(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

/// Complete application state (the Model)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub screen: Screen,

    pub collection: CollectionState,

    pub detail: DetailState,

    pub settings: Settings,

    quitting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::Collection,
            collection: CollectionState::new(),
            detail: DetailState::default(),
            settings,
            quitting: false,
        }
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Navigate to the detail view with a record (or none)
    pub fn open_detail(&mut self, recipe: Option<Recipe>) {
        self.detail = DetailState::open(recipe);
        self.screen = Screen::Detail;
    }

    /// Return to the collection view, keeping its filter and focus
    pub fn close_detail(&mut self) {
        self.detail = DetailState::default();
        self.screen = Screen::Collection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdeck_source::test_utils::sample_recipes;

    fn ready_state() -> CollectionState {
        let mut state = CollectionState::new();
        let token = state.mount("recipes.json");
        assert!(state.resolve(token, Ok(sample_recipes())));
        state
    }

    #[test]
    fn test_new_state_is_unmounted_and_pending() {
        let state = CollectionState::new();
        assert!(!state.is_mounted());
        assert!(state.fetch.is_pending());
        assert!(state.filter.is_all());
        assert!(state.filter_controls().is_empty());
    }

    #[test]
    fn test_mount_issues_increasing_tokens() {
        let mut state = CollectionState::new();
        let first = state.mount("a.json");
        let second = state.mount("b.json");
        assert!(second > first);
        assert_eq!(state.locator, "b.json");
    }

    #[test]
    fn test_resolve_success() {
        let state = ready_state();
        assert_eq!(state.recipes().len(), 5);
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn test_resolve_failure_uses_fixed_message() {
        let mut state = CollectionState::new();
        let token = state.mount("x");
        assert!(state.resolve(token, Err("connection refused".to_string())));
        assert_eq!(
            state.fetch,
            FetchState::Failed {
                message: FETCH_ERROR_MESSAGE.to_string()
            }
        );
        assert!(state.visible().is_empty());
        assert!(state.filter_controls().is_empty());
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut state = CollectionState::new();
        let old = state.mount("slow");
        let new = state.mount("fast");

        assert!(state.resolve(new, Ok(vec![Recipe::new(9, "Fresh")])));
        assert!(!state.resolve(old, Ok(sample_recipes())));

        assert_eq!(state.recipes().len(), 1);
        assert_eq!(state.recipes()[0].name, "Fresh");
    }

    #[test]
    fn test_resolve_is_one_way() {
        let mut state = CollectionState::new();
        let token = state.mount("x");
        assert!(state.resolve(token, Ok(Vec::new())));
        assert!(!state.resolve(token, Err("late".to_string())));
        assert!(matches!(state.fetch, FetchState::Ready { .. }));
    }

    #[test]
    fn test_mount_resets_filter_and_focus() {
        let mut state = ready_state();
        state.select_filter(CategoryFilter::from_label("Lunch"));
        state.focused = 1;

        state.mount("other.json");

        assert!(state.filter.is_all());
        assert_eq!(state.focused, 0);
        assert!(state.recipes().is_empty());
    }

    #[test]
    fn test_select_filter_resets_focus() {
        let mut state = ready_state();
        state.focused = 3;
        state.select_filter(CategoryFilter::from_label("Lunch"));
        assert_eq!(state.focused, 0);
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn test_select_filter_index() {
        let mut state = ready_state();
        state.select_filter_index(1);
        assert_eq!(state.filter, CategoryFilter::from_label("Breakfast"));
        state.select_filter_index(0);
        assert!(state.filter.is_all());
        state.select_filter_index(99);
        assert!(state.filter.is_all());
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let mut state = ready_state();
        // All, Breakfast, Lunch, Dinner, Dessert, Snack
        state.cycle_filter(false);
        assert_eq!(state.filter.label(), "Snack");
        state.cycle_filter(true);
        assert!(state.filter.is_all());
        state.cycle_filter(true);
        assert_eq!(state.filter.label(), "Breakfast");
    }

    #[test]
    fn test_cycle_filter_without_collection_is_noop() {
        let mut state = CollectionState::new();
        state.mount("x");
        state.cycle_filter(true);
        assert!(state.filter.is_all());
    }

    #[test]
    fn test_move_focus_in_grid() {
        let mut state = ready_state();
        state.grid_columns = 2;

        state.move_focus(FocusMove::Right);
        assert_eq!(state.focused, 1);
        state.move_focus(FocusMove::Down);
        assert_eq!(state.focused, 3);
        state.move_focus(FocusMove::Down);
        // Row 2 has a single card at index 4
        assert_eq!(state.focused, 4);
        state.move_focus(FocusMove::Down);
        assert_eq!(state.focused, 4);
        state.move_focus(FocusMove::Up);
        assert_eq!(state.focused, 2);
        state.move_focus(FocusMove::Left);
        assert_eq!(state.focused, 1);
        state.move_focus(FocusMove::First);
        assert_eq!(state.focused, 0);
        state.move_focus(FocusMove::Left);
        assert_eq!(state.focused, 0);
        state.move_focus(FocusMove::Last);
        assert_eq!(state.focused, 4);
    }

    #[test]
    fn test_focused_recipe_follows_filter() {
        let mut state = ready_state();
        state.select_filter(CategoryFilter::from_label("Dessert"));
        assert_eq!(state.focused_recipe().map(|r| r.id), Some(5));
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = AppState::new();
        app.open_detail(Some(Recipe::new(1, "Soup")));
        assert_eq!(app.screen, Screen::Detail);
        assert!(app.detail.recipe.is_some());

        app.close_detail();
        assert_eq!(app.screen, Screen::Collection);
        assert!(app.detail.recipe.is_none());
    }

    #[test]
    fn test_detail_scroll_clamps() {
        let mut detail = DetailState::open(None);
        detail.max_scroll = 5;
        detail.scroll_down(3);
        assert_eq!(detail.scroll, 3);
        detail.scroll_down(10);
        assert_eq!(detail.scroll, 5);
        detail.scroll_up(10);
        assert_eq!(detail.scroll, 0);
    }
}
