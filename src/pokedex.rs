//! Pokedex Module
//!
//! The local collection of caught Pokemon. A plain keyed store with no expiry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

/// Catch rolls are drawn from `0..CATCH_ROLL_CEILING`.
pub const CATCH_ROLL_CEILING: u32 = 500;

/// Decides a catch: the roll has to beat the Pokemon's base experience.
///
/// Pokemon without a base experience are always caught.
pub fn attempt_catch(base_experience: Option<u32>, roll: u32) -> bool {
    roll > base_experience.unwrap_or(0)
}

/// A Pokemon in the Pokedex and when it was first caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

// == Pokedex ==
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    // == Register ==
    /// Records a catch. A repeat catch keeps the original record.
    ///
    /// Returns true if the Pokemon was new to the Pokedex.
    pub fn register(&mut self, pokemon: Pokemon) -> bool {
        if self.entries.contains_key(&pokemon.name) {
            return false;
        }

        self.entries.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
        true
    }

    // == Inspect ==
    /// Looks up a caught Pokemon by name.
    pub fn inspect(&self, name: &str) -> Result<&CaughtPokemon> {
        self.entries
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))
    }

    /// Caught entries sorted by name.
    pub fn entries(&self) -> Vec<&CaughtPokemon> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| a.pokemon.name.cmp(&b.pokemon.name));
        entries
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
