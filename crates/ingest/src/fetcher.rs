use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed per-request timeout. There is no retry or backoff; each URL is
/// fetched exactly once per run.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw bytes of one fetched document, still tied to its source URL.
/// Discarded after extraction.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub url: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct Fetcher {
    http: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Fetch one article. A transport error or non-success status is
    /// logged with the URL and cause and mapped to `None`; it never
    /// aborts the batch.
    pub async fn fetch(&self, url: &str) -> Option<RawDocument> {
        match self.try_fetch(url).await {
            Ok(doc) => {
                debug!(%url, bytes = doc.bytes.len(), "Fetched article");
                Some(doc)
            }
            Err(e) => {
                warn!(%url, error = %e, "Error fetching article");
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<RawDocument> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(RawDocument {
            url: url.to_string(),
            bytes: bytes.to_vec(),
        })
    }
}
