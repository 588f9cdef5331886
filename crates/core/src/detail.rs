//! Detail resolution: turn an optional query into a [`DetailResult`].
//!
//! This is the only place that talks to the [`CharacterDirectory`] on behalf
//! of a page request. Every failure terminates here; the renderer only ever
//! sees a fully resolved result.

use std::time::Duration;

use serde::Serialize;

use crate::character::Character;
use crate::directory::CharacterDirectory;
use crate::error::DirectoryError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Shown when the detail page is reached without a query.
pub const NO_QUERY_MESSAGE: &str = "no query provided";

/// Shown when the directory has no match for the query.
pub const NOT_FOUND_MESSAGE: &str = "character not found";

/// Shown when the directory call fails. The cause only goes to the log.
pub const SEARCH_FAILED_MESSAGE: &str = "error searching for character";

// ---------------------------------------------------------------------------
// DetailResult
// ---------------------------------------------------------------------------

/// Handoff between the detail handler and the detail renderer.
///
/// When `error` is set the character is not looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailResult {
    pub character: Option<Character>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetailResult {
    pub fn found(character: Character) -> Self {
        Self {
            character: Some(character),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            character: None,
            error: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the character for `name`.
///
/// - missing or empty `name`: no directory call, [`NO_QUERY_MESSAGE`]
/// - zero results: [`NOT_FOUND_MESSAGE`]
/// - one or more results: the first one, in directory order
/// - directory failure, or no answer within `deadline`: logged,
///   [`SEARCH_FAILED_MESSAGE`]
pub async fn resolve_detail(
    directory: &dyn CharacterDirectory,
    name: Option<&str>,
    deadline: Duration,
) -> DetailResult {
    let query = name.unwrap_or_default();
    if query.is_empty() {
        return DetailResult::failed(NO_QUERY_MESSAGE);
    }

    let outcome = tokio::time::timeout(deadline, directory.search(query))
        .await
        .unwrap_or(Err(DirectoryError::Timeout(deadline)));

    match outcome {
        Ok(page) => match page.into_first() {
            Some(character) => {
                tracing::debug!(query, name = %character.name, "Character resolved");
                DetailResult::found(character)
            }
            None => DetailResult::failed(NOT_FOUND_MESSAGE),
        },
        Err(e) => {
            tracing::error!(error = %e, query, "Character search failed");
            DetailResult::failed(SEARCH_FAILED_MESSAGE)
        }
    }
}
