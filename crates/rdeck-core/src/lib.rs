//! # rdeck-core - Core Domain Types
//!
//! Foundation crate for Recipe Deck. Provides the recipe record shape, the
//! category filter and its pure derivations, detail-field projection, error
//! handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`recipe`)
//! - [`Recipe`] - A single read-only recipe record
//! - [`RecipeCollection`] - The `{ "recipes": [...] }` envelope returned by a source
//!
//! ### Filtering (`filter`)
//! - [`CategoryFilter`] - `All` or a single selected category label
//! - [`category_labels()`] - Distinct category labels across a collection
//! - [`filter_controls()`] - The label list with the implicit "All" control first
//! - [`filter_recipes()`] - The subset matching a filter
//!
//! ### Detail Projection (`facts`)
//! - [`RecipeFacts`] - Display strings for every detail field, with fallbacks
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use rdeck_core::prelude::*;
//! ```

pub mod error;
pub mod facts;
pub mod filter;
pub mod logging;
pub mod prelude;
pub mod recipe;

pub use error::{Error, Result, ResultExt};
pub use facts::{RecipeFacts, FALLBACK_TEXT};
pub use filter::{category_labels, filter_controls, filter_recipes, CategoryFilter, ALL_LABEL};
pub use recipe::{Recipe, RecipeCollection, RecipeId};
