//! Fake PokeAPI for integration tests
//!
//! Serves five location areas two per page, a small encounter table, and three
//! Pokemon. Every request is recorded so tests can tell cache hits from
//! network fetches.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use pokedex::api::PokeApiClient;
use pokedex::{ExpiringCache, FetchOrchestrator};

pub const AREAS: [&str; 5] = ["area-0", "area-1", "area-2", "area-3", "area-4"];
pub const PAGE_SIZE: usize = 2;

/// How the fake answers every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Malformed,
    ServerError,
}

#[derive(Clone)]
struct FakeState {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    mode: Arc<Mutex<Mode>>,
}

/// Handle to a running fake server.
#[derive(Clone)]
pub struct FakeApi {
    origin: String,
    state: FakeState,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

impl FakeApi {
    /// Binds an ephemeral loopback port and serves until the test runtime ends.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());

        let state = FakeState {
            base_url: format!("{}/api/v2", origin),
            requests: Arc::new(Mutex::new(Vec::new())),
            mode: Arc::new(Mutex::new(Mode::Normal)),
        };

        let app = Router::new()
            .route("/api/v2/location-area/", get(page_handler))
            .route("/api/v2/location-area/:name", get(area_handler))
            .route("/api/v2/pokemon/:name", get(pokemon_handler))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { origin, state }
    }

    /// Serves a fixed two-page listing: the first page `{next: p2, previous:
    /// null, results: [a]}` and page `p2` as `{next: p3, previous: p1,
    /// results: [b]}`. Locators `p1`..`p3` live under `{base}/pages/`.
    pub async fn spawn_two_pages() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());

        let state = FakeState {
            base_url: format!("{}/api/v2", origin),
            requests: Arc::new(Mutex::new(Vec::new())),
            mode: Arc::new(Mutex::new(Mode::Normal)),
        };

        let app = Router::new()
            .route("/api/v2/location-area/", get(first_of_two_handler))
            .route("/api/v2/pages/p2", get(second_of_two_handler))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { origin, state }
    }

    /// Locator of a page served by `spawn_two_pages`.
    pub fn named_page(&self, name: &str) -> String {
        format!("{}/pages/{}", self.base_url(), name)
    }

    pub fn base_url(&self) -> &str {
        &self.state.base_url
    }

    pub fn first_page(&self) -> String {
        format!("{}/location-area/", self.base_url())
    }

    /// Locator the fake itself emits for the page starting at `offset`.
    pub fn page(&self, offset: usize) -> String {
        format!(
            "{}/location-area/?offset={}&limit={}",
            self.base_url(),
            offset,
            PAGE_SIZE
        )
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.state.mode.lock().unwrap() = mode;
    }

    /// Total requests served so far.
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Requests served for one absolute locator.
    pub fn hits(&self, locator: &str) -> usize {
        let path = locator.strip_prefix(&self.origin).unwrap_or(locator);
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|seen| seen.as_str() == path)
            .count()
    }

    pub fn client(&self) -> PokeApiClient {
        PokeApiClient::new(self.base_url(), Duration::from_secs(5)).unwrap()
    }

    /// A fresh orchestrator over `cache`.
    pub fn orchestrator(&self, cache: &ExpiringCache) -> FetchOrchestrator {
        FetchOrchestrator::new(self.client(), cache.clone())
    }
}

fn record(state: &FakeState, uri: &Uri) -> Mode {
    state.requests.lock().unwrap().push(uri.to_string());
    *state.mode.lock().unwrap()
}

fn failure(mode: Mode) -> Option<Response> {
    match mode {
        Mode::Normal => None,
        Mode::Malformed => Some((StatusCode::OK, "{\"results\": [").into_response()),
        Mode::ServerError => Some(StatusCode::INTERNAL_SERVER_ERROR.into_response()),
    }
}

async fn page_handler(
    State(state): State<FakeState>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Response {
    if let Some(response) = failure(record(&state, &uri)) {
        return response;
    }

    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(PAGE_SIZE);
    let page_url = |offset: usize| {
        format!(
            "{}/location-area/?offset={}&limit={}",
            state.base_url, offset, limit
        )
    };

    let results: Vec<_> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(id, name)| {
            json!({
                "name": name,
                "url": format!("{}/location-area/{}/", state.base_url, id + 1),
            })
        })
        .collect();
    let next = (offset + limit < AREAS.len()).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
    .into_response()
}

async fn first_of_two_handler(State(state): State<FakeState>, uri: Uri) -> Response {
    if let Some(response) = failure(record(&state, &uri)) {
        return response;
    }

    Json(json!({
        "next": format!("{}/pages/p2", state.base_url),
        "previous": null,
        "results": [{"name": "a"}],
    }))
    .into_response()
}

async fn second_of_two_handler(State(state): State<FakeState>, uri: Uri) -> Response {
    if let Some(response) = failure(record(&state, &uri)) {
        return response;
    }

    Json(json!({
        "next": format!("{}/pages/p3", state.base_url),
        "previous": format!("{}/pages/p1", state.base_url),
        "results": [{"name": "b"}],
    }))
    .into_response()
}

async fn area_handler(
    State(state): State<FakeState>,
    Path(name): Path<String>,
    uri: Uri,
) -> Response {
    if let Some(response) = failure(record(&state, &uri)) {
        return response;
    }

    let pokemon: &[&str] = match name.as_str() {
        "area-0" => &["pikachu", "bulbasaur"],
        "area-4" => &[],
        _ if AREAS.contains(&name.as_str()) => &["magikarp"],
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    let encounters: Vec<_> = pokemon
        .iter()
        .map(|name| json!({"pokemon": {"name": name, "url": ""}}))
        .collect();

    Json(json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": encounters,
    }))
    .into_response()
}

async fn pokemon_handler(
    State(state): State<FakeState>,
    Path(name): Path<String>,
    uri: Uri,
) -> Response {
    if let Some(response) = failure(record(&state, &uri)) {
        return response;
    }

    let (base_experience, height, weight, kind) = match name.as_str() {
        "pikachu" => (112, 4, 60, "electric"),
        "bulbasaur" => (64, 7, 69, "grass"),
        "magikarp" => (40, 9, 100, "water"),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    Json(json!({
        "name": name,
        "base_experience": base_experience,
        "height": height,
        "weight": weight,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}}
        ],
        "types": [
            {"slot": 1, "type": {"name": kind, "url": ""}}
        ],
    }))
    .into_response()
}
