//! Page loader: URL in, [`Presentation`] out.
//!
//! Fetching goes through [`DocumentFetcher`] so the pipeline can be driven
//! without a network. The loader resolves completely (success or failure)
//! before a viewer is built from its result.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use tokio::time::timeout;
use url::Url;

use crate::config::SlidesConfig;
use crate::deck::Presentation;
use crate::error::{LoadError, LoadResult};
use crate::extract::extract;

/// Retrieves the raw HTML behind a URL.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> LoadResult<String>;
}

/// `reqwest`-backed fetcher.
pub struct HttpFetcher {
    client: Client,
    request_timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &SlidesConfig) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LoadError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            request_timeout: config.request_timeout(),
        })
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> LoadResult<String> {
        debug!("[HTTP] GET {url}");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                LoadError::timeout(self.request_timeout)
            } else {
                LoadError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        debug!("[HTTP] Response Status: {}", status.as_u16());
        if !status.is_success() {
            warn!("[HTTP] {url} answered {}", status.as_u16());
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(format!("Failed to read response body: {e}")))?;
        debug!("[HTTP] Response Body: {} bytes", body.len());
        Ok(body)
    }
}

/// Normalise user input into an http(s) URL.
///
/// Input without a scheme is treated as `https://`.
pub fn normalize_url(raw: &str) -> LoadResult<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LoadError::InvalidUrl("URL is required".to_string()));
    }

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let url = Url::parse(&candidate).map_err(|e| LoadError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LoadError::InvalidUrl(format!(
            "unsupported scheme '{other}'"
        ))),
    }
}

/// Fetch, extract, assemble.
pub struct DeckLoader<F = HttpFetcher> {
    fetcher: F,
    overall_timeout: Duration,
}

impl DeckLoader<HttpFetcher> {
    pub fn from_config(config: &SlidesConfig) -> LoadResult<Self> {
        Ok(Self::new(HttpFetcher::new(config)?, config.overall_timeout()))
    }
}

impl<F: DocumentFetcher> DeckLoader<F> {
    pub const fn new(fetcher: F, overall_timeout: Duration) -> Self {
        Self {
            fetcher,
            overall_timeout,
        }
    }

    /// Load the presentation at `raw_url`.
    pub async fn load(&self, raw_url: &str) -> LoadResult<Presentation> {
        let url = normalize_url(raw_url)?;
        debug!("[Loader] Loading {url}");

        let html = timeout(self.overall_timeout, self.fetcher.fetch(&url))
            .await
            .map_err(|_| LoadError::timeout(self.overall_timeout))??;

        let document = extract(&html)?;
        let presentation = Presentation::from_document(document, url)?;
        debug!(
            "[Loader] Ready: {} slides, title {:?}",
            presentation.slides.count(),
            presentation.title
        );
        Ok(presentation)
    }
}
