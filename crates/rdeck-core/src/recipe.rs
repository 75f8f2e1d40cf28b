//! Recipe record types
//!
//! Records are read-only: the UI only projects and filters them. Every
//! descriptive attribute a source may omit is an `Option`, so a value of zero
//! stays distinguishable from a missing value.

use serde::{Deserialize, Serialize};

/// Unique identifier of a recipe within a fetched collection
pub type RecipeId = u64;

/// A single recipe record as delivered by a recipe source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,

    pub name: String,

    /// Image URL; missing or `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,

    /// Category labels (meal types); a recipe may carry several
    #[serde(default, rename = "mealType", deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub review_count: Option<u32>,

    #[serde(default)]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub cuisine: Option<String>,

    #[serde(default)]
    pub servings: Option<u32>,

    #[serde(default)]
    pub prep_time_minutes: Option<u32>,

    #[serde(default)]
    pub cook_time_minutes: Option<u32>,

    #[serde(default)]
    pub calories_per_serving: Option<u32>,

    #[serde(default)]
    pub ingredients: Option<Vec<String>>,

    #[serde(default)]
    pub instructions: Option<Vec<String>>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Recipe {
    /// Create a recipe with only the required fields set
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            categories: Vec::new(),
            rating: None,
            review_count: None,
            difficulty: None,
            cuisine: None,
            servings: None,
            prep_time_minutes: None,
            cook_time_minutes: None,
            calories_per_serving: None,
            ingredients: None,
            instructions: None,
            tags: None,
        }
    }

    /// Builder: set the category labels
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this recipe carries the given category label (exact match)
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Total of prep and cook time, when at least one is known
    pub fn total_time_minutes(&self) -> Option<u32> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))),
        }
    }
}

/// The envelope a recipe source returns
///
/// Pagination fields (`total`, `skip`, `limit`) may be present and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecipeCollection {
    /// A missing or `null` field is an empty collection
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipes: Vec<Recipe>,
}

impl RecipeCollection {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parse a collection from a JSON document
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
