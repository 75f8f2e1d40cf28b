//! The fetch-helper trait and the locator-dispatching default source

use rdeck_core::prelude::*;
use rdeck_core::RecipeCollection;

use crate::file::FileRecipeSource;
use crate::http::{HttpRecipeSource, HttpSourceConfig};
use crate::locator::SourceLocator;

/// Loads a recipe collection for a locator
///
/// Implementations report every failure as an [`Error`]; callers in the
/// collection view do not distinguish between error kinds.
#[trait_variant::make(RecipeSource: Send)]
pub trait LocalRecipeSource {
    async fn fetch(&self, locator: &str) -> Result<RecipeCollection>;
}

/// Source used by the application: parses the locator and forwards to the
/// HTTP or file source
#[derive(Debug, Clone)]
pub struct DefaultRecipeSource {
    http: HttpRecipeSource,
    file: FileRecipeSource,
}

impl DefaultRecipeSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        Ok(Self {
            http: HttpRecipeSource::new(config)?,
            file: FileRecipeSource,
        })
    }
}

impl RecipeSource for DefaultRecipeSource {
    async fn fetch(&self, locator: &str) -> Result<RecipeCollection> {
        match SourceLocator::parse(locator)? {
            SourceLocator::Http(url) => self.http.fetch_url(&url).await,
            SourceLocator::File(path) => self.file.fetch_path(&path).await,
        }
    }
}
