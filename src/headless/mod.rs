//! Headless mode - JSON event output instead of the TUI
//!
//! Performs one fetch, applies an optional category filter, and writes the
//! result to stdout as NDJSON (one event per line). Each event has an
//! `"event"` field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"recipe","id":1,"name":"Classic Margherita Pizza","categories":["Dinner"],"rating":4.6,...}
//! {"event":"summary","shown":1,"total":30,"categories":["Dinner","Lunch","Snack"]}
//! ```
//!
//! On failure a single `{"event":"error",...}` line is written instead.

pub mod runner;

use std::io::Write;

use serde::Serialize;

use rdeck_core::prelude::*;
use rdeck_core::Recipe;

pub use runner::{run_headless, run_headless_with};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One recipe passing the filter
    Recipe(RecipeSummary),

    /// Written after the last recipe
    Summary {
        shown: usize,
        total: usize,
        categories: Vec<String>,
    },

    /// The fetch failed; `message` is the user-facing text, `detail` the cause
    Error { message: String, detail: String },
}

/// Card-level view of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub id: u64,
    pub name: String,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub total_time_minutes: Option<u32>,
    pub calories_per_serving: Option<u32>,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            categories: recipe.categories.clone(),
            rating: recipe.rating,
            review_count: recipe.review_count,
            cuisine: recipe.cuisine.clone(),
            difficulty: recipe.difficulty.clone(),
            total_time_minutes: recipe.total_time_minutes(),
            calories_per_serving: recipe.calories_per_serving,
        }
    }
}

impl HeadlessEvent {
    pub fn recipe(recipe: &Recipe) -> Self {
        Self::Recipe(recipe.into())
    }

    pub fn summary(shown: usize, total: usize, categories: Vec<String>) -> Self {
        Self::Summary {
            shown,
            total,
            categories,
        }
    }

    pub fn error(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Write this event as one JSON line and flush
    pub fn emit_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }
}
