//! In-memory sources for tests
//!
//! Enabled for dependents through the `test-helpers` feature.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rdeck_core::prelude::*;
use rdeck_core::{Recipe, RecipeCollection};

use crate::source::RecipeSource;

/// Always returns the same collection and counts how often it was asked
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    collection: RecipeCollection,
    calls: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            collection: RecipeCollection::new(recipes),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecipeSource for StaticSource {
    async fn fetch(&self, _locator: &str) -> Result<RecipeCollection> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.collection.clone())
    }
}

/// Always fails with an HTTP error
#[derive(Debug, Clone)]
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RecipeSource for FailingSource {
    async fn fetch(&self, _locator: &str) -> Result<RecipeCollection> {
        Err(Error::http(self.message.clone()))
    }
}

/// A small collection covering multi-category, uncategorized and sparse records
pub fn sample_recipes() -> Vec<Recipe> {
    let mut pancakes = Recipe::new(1, "Fluffy Pancakes").with_categories(["Breakfast"]);
    pancakes.rating = Some(4.8);
    pancakes.review_count = Some(120);
    pancakes.calories_per_serving = Some(350);

    let mut pizza = Recipe::new(2, "Margherita Pizza").with_categories(["Lunch", "Dinner"]);
    pizza.rating = Some(4.6);
    pizza.cuisine = Some("Italian".to_string());

    let salad = Recipe::new(3, "Greek Salad").with_categories(["Lunch"]);

    let water = {
        let mut r = Recipe::new(4, "Infused Water");
        r.calories_per_serving = Some(0);
        r
    };

    let mut brownies = Recipe::new(5, "Brownies").with_categories(["Dessert", "Snack"]);
    brownies.rating = Some(4.2);

    vec![pancakes, pizza, salad, water, brownies]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_counts_calls() {
        let source = StaticSource::new(sample_recipes());
        let first = source.fetch("anything").await.unwrap();
        let _ = source.fetch("anything").await.unwrap();

        assert_eq!(first.recipes.len(), 5);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let result = FailingSource::new("boom").fetch("anything").await;
        assert!(matches!(result, Err(Error::Http { .. })));
    }
}
