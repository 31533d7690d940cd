//! Reader-service client: turns a public URL into plain text via a hosted
//! "reader" proxy (`{base}{url}` returns the page as text/markdown).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

/// Upper bound on source URLs per generation.
pub const MAX_SOURCE_URLS: usize = 5;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Reader service returned status {status}")]
    Upstream { status: u16 },

    #[error("Reader service returned no content")]
    Empty,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// True only for strings that parse as an absolute `http` or `https` URL.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

/// Fetches readable text for a URL. `ReaderClient` in production.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Clone)]
pub struct ReaderClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl ReaderClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, FetchError> {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            base_url,
            api_key,
            timeout_secs,
        })
    }
}

#[async_trait]
impl ContentFetcher for ReaderClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let url = url.trim();
        if !is_valid_url(url) {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, url))
            .header("Accept", "text/plain");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else {
                FetchError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        let content = response.text().await?;
        if content.trim().is_empty() {
            return Err(FetchError::Empty);
        }

        info!("Fetched {} chars from {url}", content.len());
        Ok(content)
    }
}

/// Combined text of a multi-URL fetch plus per-URL outcome counts.
#[derive(Debug, Default)]
pub struct FetchedSources {
    pub combined: String,
    pub succeeded: usize,
    pub failed: usize,
}

/// Fetches each URL in order and concatenates the results.
///
/// A failing URL does not abort the rest: its slot holds an inline error marker
/// instead of content. URLs beyond `MAX_SOURCE_URLS` are ignored.
pub async fn fetch_sources(fetcher: &dyn ContentFetcher, urls: &[String]) -> FetchedSources {
    let mut sections = Vec::with_capacity(urls.len().min(MAX_SOURCE_URLS));
    let mut outcome = FetchedSources::default();

    for url in urls.iter().take(MAX_SOURCE_URLS) {
        let url = url.trim();
        if url.is_empty() {
            continue;
        }

        let result = if is_valid_url(url) {
            fetcher.fetch_text(url).await
        } else {
            Err(FetchError::InvalidUrl(url.to_string()))
        };

        match result {
            Ok(content) => {
                outcome.succeeded += 1;
                sections.push(format!("--- Fuente: {url} ---\n{}", content.trim()));
            }
            Err(e) => {
                warn!("Skipping source {url}: {e}");
                outcome.failed += 1;
                sections.push(error_marker(url, &e));
            }
        }
    }

    outcome.combined = sections.join("\n\n");
    outcome
}

/// Combined content of all URLs, with inline markers for the ones that failed.
pub async fn fetch_multiple_urls(fetcher: &dyn ContentFetcher, urls: &[String]) -> String {
    fetch_sources(fetcher, urls).await.combined
}

fn error_marker(url: &str, error: &FetchError) -> String {
    format!("[Error al obtener {url}: {error}]")
}
