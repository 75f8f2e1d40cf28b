//! Recipe Deck Library
//!
//! A terminal recipe browser: a filterable card grid over a recipe
//! collection and a detail view for a single recipe.

pub mod headless;

// Re-export main entry points
pub use headless::{run_headless, run_headless_with};
pub use rdeck_tui::run;
