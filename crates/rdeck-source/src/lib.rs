//! # rdeck-source - Recipe Collection Sources
//!
//! The fetch helper behind the collection view: given a locator string, load
//! a [`RecipeCollection`] or fail.
//!
//! Depends on [`rdeck_core`] for the record types and error handling.
//!
//! ## Public API
//!
//! ### Locators
//! - [`SourceLocator`] - A parsed locator (`http(s)://` URL or local file path)
//!
//! ### Sources
//! - [`RecipeSource`] - `Send` async trait implemented by every source
//! - [`HttpRecipeSource`] - Fetches over HTTP with `reqwest`
//! - [`FileRecipeSource`] - Reads a local JSON document
//! - [`DefaultRecipeSource`] - Dispatches on the locator kind
//!
//! [`RecipeCollection`]: rdeck_core::RecipeCollection

pub mod file;
pub mod http;
pub mod locator;
pub mod source;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use file::FileRecipeSource;
pub use http::{HttpRecipeSource, HttpSourceConfig, DEFAULT_TIMEOUT};
pub use locator::SourceLocator;
pub use source::{DefaultRecipeSource, LocalRecipeSource, RecipeSource};
