//! HTTP access to the catalog query service.

use async_trait::async_trait;
use catalog_core::catalog::TitleRecord;
use serde::Deserialize;

/// Errors surfaced by a [`TitleSource`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response, or the body was not valid JSON.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Anything that can answer a title search.
///
/// The terminal view only talks to this trait, so tests substitute an
/// in-memory source for the HTTP client.
#[async_trait]
pub trait TitleSource: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<TitleRecord>, FetchError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<TitleRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// [`TitleSource`] backed by `GET {base}/api/titles?search=<term>`.
#[derive(Debug, Clone)]
pub struct HttpTitleClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTitleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/api/titles", self.base_url)
    }
}

#[async_trait]
impl TitleSource for HttpTitleClient {
    async fn search(&self, term: &str) -> Result<Vec<TitleRecord>, FetchError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("search", term)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
            tracing::warn!(status = status.as_u16(), %message, "Title search rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!(term, count = body.data.len(), "Title search completed");
        Ok(body.data)
    }
}
