//! Character records as returned by the external directory.
//!
//! Parsing happens here, at the boundary: the raw JSON payload is turned
//! into a [`SearchPage`] of typed [`Character`] values or a
//! [`DirectoryError::Parse`].

use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// One directory record describing a character and links to related
/// resources. Values are carried verbatim from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
}

impl Character {
    /// A record with only a name set. Handy for building fixtures.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height: String::new(),
            mass: String::new(),
            hair_color: String::new(),
            skin_color: String::new(),
            eye_color: String::new(),
            birth_year: String::new(),
            gender: String::new(),
            homeworld: String::new(),
            films: Vec::new(),
            species: Vec::new(),
            vehicles: Vec::new(),
            starships: Vec::new(),
        }
    }
}

/// Envelope of a directory search response.
///
/// Only `results` is used. A payload without `results` parses as an empty
/// page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Character>,
}

impl SearchPage {
    /// Parse a raw directory payload.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DirectoryError> {
        serde_json::from_slice(bytes).map_err(|e| DirectoryError::Parse(e.to_string()))
    }

    /// Consume the page, keeping only the first result in directory order.
    pub fn into_first(self) -> Option<Character> {
        self.results.into_iter().next()
    }
}
