//! HTTP recipe source

use std::time::Duration;

use rdeck_core::prelude::*;
use rdeck_core::RecipeCollection;
use reqwest::Client;
use url::Url;

use crate::locator::SourceLocator;
use crate::source::RecipeSource;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("recipe-deck/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpSourceConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetches a recipe collection with a single GET request
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: Client,
}

impl HttpRecipeSource {
    /// Build the client; fails when the configuration is rejected
    pub fn new(config: HttpSourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    pub async fn fetch_url(&self, url: &Url) -> Result<RecipeCollection> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recipe source {} answered {}", url, status);
            return Err(Error::http_status(status.as_u16(), url.as_str()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let collection = RecipeCollection::from_json(&body)
            .map_err(|e| Error::malformed(format!("{url}: {e}")))?;

        info!("Fetched {} recipes from {}", collection.recipes.len(), url);
        Ok(collection)
    }
}

impl RecipeSource for HttpRecipeSource {
    async fn fetch(&self, locator: &str) -> Result<RecipeCollection> {
        match SourceLocator::parse(locator)? {
            SourceLocator::Http(url) => self.fetch_url(&url).await,
            SourceLocator::File(_) => Err(Error::invalid_locator(locator)),
        }
    }
}
