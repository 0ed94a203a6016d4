//! PokeAPI HTTP client
//!
//! Plain `GET locator -> bytes`. Caching and decoding happen one layer up.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{PokedexError, Result};

/// Client for fetching raw PokeAPI documents.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client rooted at `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Self::new(config.base_url.clone(), config.request_timeout())
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Locator of the first page of the location-area listing.
    pub fn first_page_locator(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Locator of a single location area by name or id.
    pub fn location_area_locator(&self, area: &str) -> String {
        format!("{}/location-area/{}", self.base_url, area)
    }

    /// Locator of a single Pokemon by name or id.
    pub fn pokemon_locator(&self, pokemon: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, pokemon)
    }

    /// Fetch the raw body at `locator`.
    ///
    /// Transport errors, timeouts, and non-success statuses all come back as
    /// `FetchFailure`.
    pub async fn fetch(&self, locator: &str) -> Result<Arc<[u8]>> {
        let fetch_failure = |source| PokedexError::FetchFailure {
            locator: locator.to_string(),
            source,
        };

        debug!("GET {}", locator);
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fetch_failure)?;

        let body = response.bytes().await.map_err(fetch_failure)?;
        Ok(Arc::from(&body[..]))
    }
}
