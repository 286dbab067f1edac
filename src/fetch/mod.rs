// src/fetch/mod.rs

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, ScrapeError};

/// Anything that can hand back the body of a page. One GET, no retries.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// `PageSource` over a shared reqwest client.
#[derive(Clone, Debug, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Client with an optional per-request timeout; `None` keeps reqwest's default.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| ScrapeError::Transport {
            url: String::from("<client setup>"),
            source: e.into(),
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching text from {}", url);
        let transport = |e: reqwest::Error| ScrapeError::Transport {
            url: url.to_string(),
            source: e.into(),
        };
        self.client
            .get(url)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)
    }
}

/// Fetch `url` and parse the body into a document tree.
pub async fn fetch_document<S: PageSource + ?Sized>(source: &S, url: &str) -> Result<Html> {
    let body = source.fetch_text(url).await?;
    Ok(Html::parse_document(&body))
}
