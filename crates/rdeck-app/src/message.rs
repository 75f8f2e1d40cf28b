//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use rdeck_core::{CategoryFilter, Recipe};

/// Direction for moving card focus inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Collection Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Mount the collection view on a locator; ignored when the locator is
    /// already mounted
    LoadSource { locator: String },
    /// Remount the current locator
    Reload,
    /// A fetch completed
    RecipesLoaded { token: u64, recipes: Vec<Recipe> },
    /// A fetch failed
    RecipesFetchFailed { token: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Filter Messages
    // ─────────────────────────────────────────────────────────
    SelectFilter(CategoryFilter),
    /// Select the filter control at this position (0 = All)
    SelectFilterIndex(usize),
    NextFilter,
    PreviousFilter,

    // ─────────────────────────────────────────────────────────
    // Grid Messages
    // ─────────────────────────────────────────────────────────
    MoveFocus(FocusMove),

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Navigate to the detail view carrying a recipe record
    OpenDetail { recipe: Option<Recipe> },
    /// Return to the collection view
    CloseDetail,
    ScrollDetailUp,
    ScrollDetailDown,
    DetailPageUp,
    DetailPageDown,
    ScrollDetailToTop,
}
