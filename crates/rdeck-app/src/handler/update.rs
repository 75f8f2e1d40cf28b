//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Screen};
use rdeck_core::prelude::*;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Collection Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::LoadSource { locator } => {
            if state.collection.is_mounted() && state.collection.locator == locator {
                debug!("Source {} already mounted, not refetching", locator);
                return UpdateResult::none();
            }
            mount(state, locator)
        }

        Message::Reload => {
            if !state.collection.is_mounted() {
                return UpdateResult::none();
            }
            let locator = state.collection.locator.clone();
            mount(state, locator)
        }

        Message::RecipesLoaded { token, recipes } => {
            let count = recipes.len();
            if state.collection.resolve(token, Ok(recipes)) {
                info!("Collection ready with {} recipes", count);
            } else {
                debug!(
                    "Dropping stale fetch result (token {}, latest {})",
                    token, state.collection.request_token
                );
            }
            UpdateResult::none()
        }

        Message::RecipesFetchFailed { token, error } => {
            if state.collection.resolve(token, Err(error.clone())) {
                warn!("Recipe fetch failed: {}", error);
            } else {
                debug!("Dropping stale fetch failure (token {}): {}", token, error);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filter Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectFilter(filter) => {
            state.collection.select_filter(filter);
            UpdateResult::none()
        }

        Message::SelectFilterIndex(index) => {
            state.collection.select_filter_index(index);
            UpdateResult::none()
        }

        Message::NextFilter => {
            state.collection.cycle_filter(true);
            UpdateResult::none()
        }

        Message::PreviousFilter => {
            state.collection.cycle_filter(false);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Grid Messages
        // ─────────────────────────────────────────────────────────
        Message::MoveFocus(direction) => {
            state.collection.move_focus(direction);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail { recipe } => {
            match &recipe {
                Some(r) => debug!("Opening detail for recipe {} ({})", r.id, r.name),
                None => debug!("Opening detail without a record"),
            }
            state.open_detail(recipe);
            UpdateResult::none()
        }

        Message::CloseDetail => {
            if state.screen == Screen::Detail {
                state.close_detail();
            }
            UpdateResult::none()
        }

        Message::ScrollDetailUp => {
            state.detail.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDetailDown => {
            state.detail.scroll_down(1);
            UpdateResult::none()
        }

        Message::DetailPageUp => {
            let page = state.detail.page_size();
            state.detail.scroll_up(page);
            UpdateResult::none()
        }

        Message::DetailPageDown => {
            let page = state.detail.page_size();
            state.detail.scroll_down(page);
            UpdateResult::none()
        }

        Message::ScrollDetailToTop => {
            state.detail.scroll = 0;
            UpdateResult::none()
        }
    }
}

/// Start a new mount of the collection view and request its fetch
fn mount(state: &mut AppState, locator: String) -> UpdateResult {
    if state.screen == Screen::Detail {
        state.close_detail();
    }
    let token = state.collection.mount(locator.clone());
    info!("Fetching recipes from {} (token {})", locator, token);
    UpdateResult::action(UpdateAction::FetchRecipes { token, locator })
}
