use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use crate::error::FeedError;

/// HTTP client for retrieving the vendor XML export.
///
/// Transport only — no retries and no interpretation of the body. A feed
/// that cannot be fetched aborts the whole run; there is no meaningful
/// partial result to salvage from a product export.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the feed body from `url` as text.
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx response.
    /// - [`FeedError::Http`] — network or TLS failure.
    pub async fn fetch_feed(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }

    /// Makes sure a local copy of the feed exists at `path`, downloading
    /// from `url` when it does not.
    ///
    /// Returns `true` when a download happened. The cached file is left in
    /// place so repeated runs against the same input path skip the network
    /// entirely.
    ///
    /// # Errors
    ///
    /// Propagates fetch errors from [`Self::fetch_feed`] and returns
    /// [`FeedError::Io`] if the downloaded body cannot be written.
    pub async fn ensure_local_copy(&self, url: &str, path: &Path) -> Result<bool, FeedError> {
        if path.exists() {
            return Ok(false);
        }
        tracing::info!(url, path = %path.display(), "feed not cached locally, downloading");
        let body = self.fetch_feed(url).await?;
        std::fs::write(path, &body).map_err(|e| FeedError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(true)
    }
}
