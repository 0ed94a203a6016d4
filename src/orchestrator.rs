//! Fetch Orchestrator
//!
//! Cache-first fetching for every PokeAPI document, and the two page
//! transitions the REPL drives.

use serde::de::DeserializeOwned;
use tracing::info;

use crate::api::PokeApiClient;
use crate::cache::ExpiringCache;
use crate::error::Result;
use crate::models::{self, LocationAreaDetail, LocationAreaPage, NamedResource, Pokemon};
use crate::pagination::{Direction, PaginationCursor};

/// Glue between the cursor, the cache, and the network.
///
/// Cache-through is symmetric: whichever direction misses, the raw body is
/// stored once it has decoded. Bodies that fail to decode are never cached.
#[derive(Debug)]
pub struct FetchOrchestrator {
    client: PokeApiClient,
    cache: ExpiringCache,
    cursor: PaginationCursor,
}

impl FetchOrchestrator {
    /// Creates an orchestrator positioned before the first area page.
    pub fn new(client: PokeApiClient, cache: ExpiringCache) -> Self {
        let cursor = PaginationCursor::new(client.first_page_locator());
        Self {
            client,
            cache,
            cursor,
        }
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    // == Advance ==
    /// Fetches the next page of areas and moves the cursor forward.
    pub async fn advance(&mut self) -> Result<Vec<NamedResource>> {
        self.step(Direction::Forward).await
    }

    // == Retreat ==
    /// Fetches the previous page of areas and moves the cursor back.
    ///
    /// Fails with `AtBoundary` and fetches nothing when there is no previous page.
    pub async fn retreat(&mut self) -> Result<Vec<NamedResource>> {
        self.step(Direction::Backward).await
    }

    async fn step(&mut self, direction: Direction) -> Result<Vec<NamedResource>> {
        let locator = self.cursor.target(direction)?.to_string();
        let page: LocationAreaPage = self.fetch_decoded(&locator).await?;

        self.cursor.record(direction, &page);
        Ok(page.results)
    }

    // == Explore ==
    /// Fetches one location area and its encounter table.
    pub async fn explore(&self, area: &str) -> Result<LocationAreaDetail> {
        let locator = self.client.location_area_locator(area);
        self.fetch_decoded(&locator).await
    }

    // == Pokemon ==
    /// Fetches one Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let locator = self.client.pokemon_locator(name);
        self.fetch_decoded(&locator).await
    }

    // == Fetch With Cache ==
    /// Decodes the document at `locator`, going to the network only on a miss.
    async fn fetch_decoded<T: DeserializeOwned>(&self, locator: &str) -> Result<T> {
        if let Some(body) = self.cache.get(locator).await {
            info!("Retrieving {} from cache", locator);
            return models::decode(locator, &body);
        }

        let body = self.client.fetch(locator).await?;
        let decoded = models::decode(locator, &body)?;

        self.cache.put(locator, body).await?;
        info!("Saved {} to cache", locator);

        Ok(decoded)
    }
}
