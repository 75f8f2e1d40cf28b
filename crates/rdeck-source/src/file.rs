//! Local JSON file source

use std::path::Path;

use rdeck_core::prelude::*;
use rdeck_core::RecipeCollection;

use crate::locator::SourceLocator;
use crate::source::RecipeSource;

/// Reads a recipe collection from a JSON document on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRecipeSource;

impl FileRecipeSource {
    pub async fn fetch_path(&self, path: &Path) -> Result<RecipeCollection> {
        debug!("Reading recipes from {}", path.display());

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::source_not_found(path));
            }
            Err(e) => return Err(e).context(format!("Failed to read {}", path.display())),
        };

        let collection = RecipeCollection::from_json(&content)
            .map_err(|e| Error::malformed(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded {} recipes from {}",
            collection.recipes.len(),
            path.display()
        );
        Ok(collection)
    }
}

impl RecipeSource for FileRecipeSource {
    async fn fetch(&self, locator: &str) -> Result<RecipeCollection> {
        match SourceLocator::parse(locator)? {
            SourceLocator::File(path) => self.fetch_path(&path).await,
            SourceLocator::Http(_) => Err(Error::invalid_locator(locator)),
        }
    }
}
