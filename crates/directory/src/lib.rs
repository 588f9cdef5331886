//! HTTP client for the public Star Wars character directory (SWAPI).
//!
//! Implements [`CharacterDirectory`](holonet_core::directory::CharacterDirectory)
//! on top of [`reqwest`].

pub mod swapi;

pub use swapi::{SwapiClient, SwapiError, DEFAULT_BASE_URL};
