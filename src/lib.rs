//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas and tracks caught Pokemon, backed by a
//! short-lived in-memory response cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod pagination;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use orchestrator::FetchOrchestrator;
