//! REST client for the SWAPI `people` search endpoint.

use async_trait::async_trait;
use holonet_core::character::SearchPage;
use holonet_core::directory::CharacterDirectory;
use holonet_core::error::DirectoryError;

/// Public SWAPI root.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// HTTP client for a SWAPI-compatible directory.
///
/// Uses the transport's default timeouts and never retries.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the SWAPI transport layer.
#[derive(Debug, thiserror::Error)]
pub enum SwapiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// SWAPI returned a non-2xx status code.
    #[error("SWAPI error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<SwapiError> for DirectoryError {
    fn from(err: SwapiError) -> Self {
        match err {
            SwapiError::Request(e) => DirectoryError::Request(e.to_string()),
            SwapiError::ApiError { status, body } => DirectoryError::Status { status, body },
        }
    }
}

impl SwapiClient {
    /// Create a client for the directory rooted at `base_url`,
    /// e.g. `https://swapi.dev/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search people by free text.
    ///
    /// Sends `GET {base}/people/?search={query}&format=json` and parses the
    /// body into a [`SearchPage`].
    pub async fn search_people(&self, query: &str) -> Result<SearchPage, DirectoryError> {
        let response = self
            .client
            .get(format!("{}/people/", self.base_url))
            .query(&[("search", query), ("format", "json")])
            .send()
            .await
            .map_err(SwapiError::from)?;

        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await.map_err(SwapiError::from)?;
        let page = SearchPage::from_slice(&bytes)?;

        tracing::debug!(query, results = page.results.len(), "SWAPI search completed");
        Ok(page)
    }

    /// Return the response unchanged on a success status, or a
    /// [`SwapiError::ApiError`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, SwapiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SwapiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CharacterDirectory for SwapiClient {
    async fn search(&self, query: &str) -> Result<SearchPage, DirectoryError> {
        self.search_people(query).await
    }
}
