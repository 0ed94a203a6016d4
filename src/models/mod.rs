//! Response models for the PokeAPI
//!
//! This module defines the DTOs decoded from PokeAPI JSON bodies, plus the
//! shared decode step that maps serde failures onto `DecodeFailure`.

pub mod location;
pub mod pokemon;

use serde::de::DeserializeOwned;

use crate::error::{PokedexError, Result};

// Re-export commonly used types
pub use location::{Encounter, LocationAreaDetail, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// Decodes a response body fetched from `locator`.
pub fn decode<T: DeserializeOwned>(locator: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| PokedexError::DecodeFailure {
        locator: locator.to_string(),
        source,
    })
}
