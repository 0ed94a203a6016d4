//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use std::fmt;

use thiserror::Error;

// == Boundary ==
/// Which end of the paginated listing a traversal ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Retreat attempted with no previous page
    First,
    /// Advance attempted after the server reported no next page
    Last,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::First => f.write_str("first"),
            Boundary::Last => f.write_str("last"),
        }
    }
}

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
///
/// Every variant is recoverable: the REPL prints it as a one-line diagnostic
/// and keeps prompting. Cursor and cache state stay valid for a retry.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The cache could not store an entry
    #[error("Cache storage fault: {0}")]
    StorageFault(String),

    /// Network or transport error, including non-success HTTP status
    #[error("Failed to fetch {locator}: {source}")]
    FetchFailure {
        locator: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body did not have the expected shape
    #[error("Failed to decode response from {locator}: {source}")]
    DecodeFailure {
        locator: String,
        #[source]
        source: serde_json::Error,
    },

    /// Traversal attempted past either end of the listing
    #[error("Already on the {0} page")]
    AtBoundary(Boundary),

    /// Input did not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command needs an argument that was not given
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Inspect asked about a Pokemon that is not in the Pokedex
    #[error("{0} has not been caught yet")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
