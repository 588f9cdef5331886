//! Seam to the external character directory.

use async_trait::async_trait;

use crate::character::SearchPage;
use crate::error::DirectoryError;

/// A remote service that answers free-text character searches.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait CharacterDirectory: Send + Sync {
    /// Search for characters matching `query`, passed through unmodified.
    async fn search(&self, query: &str) -> Result<SearchPage, DirectoryError>;
}
