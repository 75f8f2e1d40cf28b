//! Detail-field projection
//!
//! Turns a [`Recipe`] into the display strings shown by the detail view.
//! Presence is decided by `Option` alone, so `0` renders as a value
//! rather than as a missing field.

use std::fmt::Display;

use crate::recipe::Recipe;

/// Placeholder shown for an absent optional attribute
pub const FALLBACK_TEXT: &str = "N/A";

/// Unit suffix for prep and cook times
pub const TIME_UNIT: &str = "minutes";

/// Unit suffix for calories per serving
pub const ENERGY_UNIT: &str = "kcal";

/// Display strings for every field of the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFacts<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub rating: String,
    pub difficulty: String,
    pub cuisine: String,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub calories: String,
    pub ingredients: &'a [String],
    pub instructions: &'a [String],
}

impl<'a> RecipeFacts<'a> {
    pub fn from_recipe(recipe: &'a Recipe) -> Self {
        Self {
            name: &recipe.name,
            image: &recipe.image,
            rating: rating_text(recipe.rating, recipe.review_count),
            difficulty: label_or_fallback(recipe.difficulty.as_deref()),
            cuisine: label_or_fallback(recipe.cuisine.as_deref()),
            servings: value_or_fallback(recipe.servings),
            prep_time: with_unit(recipe.prep_time_minutes, TIME_UNIT),
            cook_time: with_unit(recipe.cook_time_minutes, TIME_UNIT),
            calories: with_unit(recipe.calories_per_serving, ENERGY_UNIT),
            ingredients: recipe.ingredients.as_deref().unwrap_or_default(),
            instructions: recipe.instructions.as_deref().unwrap_or_default(),
        }
    }
}

/// `"<rating> (<count> reviews)"`; a missing review count reads as zero
pub fn rating_text(rating: Option<f64>, review_count: Option<u32>) -> String {
    match rating {
        Some(rating) => format!("{} ({} reviews)", rating, review_count.unwrap_or(0)),
        None => FALLBACK_TEXT.to_string(),
    }
}

/// Short rating badge for cards, e.g. `"★ 4.6"`
pub fn rating_badge(rating: Option<f64>) -> Option<String> {
    rating.map(|r| format!("★ {r:.1}"))
}

/// A text label, treating blank strings as absent
pub fn label_or_fallback(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => FALLBACK_TEXT.to_string(),
    }
}

pub fn value_or_fallback<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| FALLBACK_TEXT.to_string(), |v| v.to_string())
}

/// `"<value> <unit>"` or the fallback text
pub fn with_unit<T: Display>(value: Option<T>, unit: &str) -> String {
    value.map_or_else(|| FALLBACK_TEXT.to_string(), |v| format!("{v} {unit}"))
}
