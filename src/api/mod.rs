//! API Module
//!
//! HTTP access to the PokeAPI.
//!
//! # Locators
//! - `{base}/location-area/` - First page of the area listing
//! - `{base}/location-area/{area}` - One area and its encounters
//! - `{base}/pokemon/{name}` - One Pokemon

pub mod client;

pub use client::PokeApiClient;
