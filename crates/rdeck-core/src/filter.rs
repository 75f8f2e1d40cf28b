//! Category filtering
//!
//! The label set is always derived from the collection, never stored
//! alongside it, so it cannot drift from the data it describes.

use std::fmt;

use crate::recipe::Recipe;

/// Label of the implicit "no filter" control
pub const ALL_LABEL: &str = "All";

/// The currently selected category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filter, every recipe is shown
    #[default]
    All,
    /// Only recipes carrying this exact label
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a control label; `"All"` maps to [`CategoryFilter::All`]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    /// The control label this filter corresponds to
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(label) => label,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a recipe passes this filter
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => recipe.has_category(label),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinct category labels across all recipes, in first-seen order
pub fn category_labels(recipes: &[Recipe]) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for label in recipes.iter().flat_map(|r| r.categories.iter()) {
        if !labels.contains(&label.as_str()) {
            labels.push(label.as_str());
        }
    }
    labels
}

/// Filter controls to render: the implicit "All" control followed by every
/// distinct category label
///
/// A category literally named "All" collapses into the implicit control.
pub fn filter_controls(recipes: &[Recipe]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            category_labels(recipes)
                .into_iter()
                .filter(|label| *label != ALL_LABEL)
                .map(|label| CategoryFilter::Category(label.to_string())),
        )
        .collect()
}

/// The subset of recipes that pass the filter, in collection order
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &CategoryFilter) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "Pancakes").with_categories(["Breakfast"]),
            Recipe::new(2, "Pizza").with_categories(["Dinner", "Lunch"]),
            Recipe::new(3, "Salad").with_categories(["Lunch"]),
            Recipe::new(4, "Mystery"),
            Recipe::new(5, "Brownies").with_categories(["Dessert", "Snack"]),
        ]
    }

    #[test]
    fn test_category_labels_distinct_first_seen() {
        let recipes = sample();
        assert_eq!(
            category_labels(&recipes),
            vec!["Breakfast", "Dinner", "Lunch", "Dessert", "Snack"]
        );
    }

    #[test]
    fn test_category_labels_empty_collection() {
        assert!(category_labels(&[]).is_empty());
    }

    #[test]
    fn test_filter_controls_prepend_all_once() {
        let recipes = sample();
        let controls = filter_controls(&recipes);
        assert_eq!(controls[0], CategoryFilter::All);
        assert_eq!(controls.len(), 6);
        assert_eq!(controls.iter().filter(|c| c.is_all()).count(), 1);
    }

    #[test]
    fn test_filter_controls_no_categories() {
        let recipes = vec![Recipe::new(1, "Plain"), Recipe::new(2, "Also plain")];
        assert_eq!(filter_controls(&recipes), vec![CategoryFilter::All]);
        assert_eq!(filter_controls(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_filter_controls_literal_all_category() {
        let recipes = vec![Recipe::new(1, "Odd").with_categories(["All", "Snack"])];
        let labels: Vec<_> = filter_controls(&recipes)
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Snack"]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let recipes = sample();
        let shown = filter_recipes(&recipes, &CategoryFilter::All);
        assert_eq!(shown.len(), recipes.len());
    }

    #[test]
    fn test_filter_by_category_is_membership() {
        let recipes = sample();
        for label in category_labels(&recipes) {
            let filter = CategoryFilter::from_label(label);
            let shown = filter_recipes(&recipes, &filter);
            assert!(shown.iter().all(|r| r.has_category(label)));
            let hidden = recipes.iter().filter(|r| !shown.iter().any(|s| s.id == r.id));
            for r in hidden {
                assert!(!r.has_category(label));
            }
        }
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let recipes = sample();
        let ids: Vec<_> = filter_recipes(&recipes, &CategoryFilter::from_label("Lunch"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_uncategorized_only_matches_all() {
        let recipes = sample();
        let mystery = &recipes[3];
        assert!(CategoryFilter::All.matches(mystery));
        for label in category_labels(&recipes) {
            assert!(!CategoryFilter::from_label(label).matches(mystery));
        }
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let recipes = sample();
        let shown = filter_recipes(&recipes, &CategoryFilter::from_label("Brunch"));
        assert!(shown.is_empty());
    }

    #[test]
    fn test_from_label_round_trip() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Dinner").label(), "Dinner");
        assert_eq!(CategoryFilter::default().to_string(), "All");
    }
}
