//! REST client for the character service.
//!
//! Two read-only calls: list-by-page and get-by-id. Responses are decoded
//! into [`crate::models`] types without further transformation, retry or
//! validation.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Character, CharacterPage, PageNumber};

/// HTTP client for the character service.
///
/// Cheap to clone: clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct CharacterApi {
    client: reqwest::Client,
    base_url: String,
}

impl CharacterApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of characters.
    ///
    /// Sends `GET {base}/character?page={page}`. The page is not checked
    /// against the total page count; the service decides what an
    /// out-of-range page means.
    pub async fn fetch_characters(&self, page: PageNumber) -> Result<CharacterPage, ApiError> {
        tracing::debug!(page = page.get(), "fetching character page");
        let response = self
            .client
            .get(format!("{}/character", self.base_url))
            .query(&[("page", page.get())])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a single character by its string-encoded identifier.
    ///
    /// Sends `GET {base}/character/{id}`.
    pub async fn fetch_character(&self, id: &str) -> Result<Character, ApiError> {
        tracing::debug!(id, "fetching character");
        let response = self
            .client
            .get(format!("{}/character/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Turn a non-2xx response into [`ApiError::Status`], carrying the body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

impl Default for CharacterApi {
    /// A client for the public service.
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}
