//! View model for the detail page.
//!
//! [`DetailView::from_result`] is a pure mapping from a [`DetailResult`] to
//! exactly one of three page shapes. The HTML layer only formats what it is
//! given here.

use serde::Serialize;

use crate::character::Character;
use crate::detail::{DetailResult, NOT_FOUND_MESSAGE};

/// One labeled scalar attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// A titled list of resource links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSection {
    pub title: &'static str,
    pub links: Vec<String>,
}

/// Everything shown for a resolved character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    pub heading: String,
    pub rows: Vec<InfoRow>,
    pub homeworld: Option<String>,
    pub sections: Vec<ResourceSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    /// The handler reported a problem; nothing else is read.
    Error { message: String },
    /// Neither a character nor an error was supplied.
    NotFound,
    Character(CharacterView),
}

impl DetailView {
    pub fn from_result(result: &DetailResult) -> Self {
        if let Some(message) = result.error.as_deref().filter(|m| !m.is_empty()) {
            return Self::Error {
                message: message.to_string(),
            };
        }
        match &result.character {
            None => Self::NotFound,
            Some(character) => Self::Character(CharacterView::from_character(character)),
        }
    }

    /// The message shown by the error-shaped views.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message.as_str()),
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::Character(_) => None,
        }
    }
}

impl CharacterView {
    fn from_character(c: &Character) -> Self {
        let rows = vec![
            row("Height", format!("{} cm", c.height)),
            row("Mass", format!("{} kg", c.mass)),
            row("Hair color", c.hair_color.clone()),
            row("Skin color", c.skin_color.clone()),
            row("Eye color", c.eye_color.clone()),
            row("Birth year", c.birth_year.clone()),
            row("Gender", c.gender.clone()),
        ];

        // Films are always listed; the rest only when non-empty.
        let mut sections = vec![section("Films", &c.films)];
        if !c.species.is_empty() {
            sections.push(section("Species", &c.species));
        }
        if !c.vehicles.is_empty() {
            sections.push(section("Vehicles", &c.vehicles));
        }
        if !c.starships.is_empty() {
            sections.push(section("Starships", &c.starships));
        }

        Self {
            heading: c.name.clone(),
            rows,
            homeworld: (!c.homeworld.is_empty()).then(|| c.homeworld.clone()),
            sections,
        }
    }
}

fn row(label: &'static str, value: String) -> InfoRow {
    InfoRow { label, value }
}

fn section(title: &'static str, links: &[String]) -> ResourceSection {
    ResourceSection {
        title,
        links: links.to_vec(),
    }
}
