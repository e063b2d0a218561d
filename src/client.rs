use std::sync::Arc;

use reqwest::Client;

use crate::decode;
use crate::error::AppStoreError;
use crate::fetcher::{DataFetcher, NetworkFetcher};
use crate::models::App;

const BASE_URL: &str = "https://itunes.apple.com";
const DEFAULT_REGION: &str = "fr";

/// Client for the iTunes top paid applications feed
pub struct AppStoreClient {
    fetcher: Arc<dyn DataFetcher>,
    base_url: String,
    region: String,
}

impl AppStoreClient {
    /// Create an AppStoreClient backed by a real network fetcher.
    pub fn new(client: Client) -> Self {
        Self::with_fetcher(Arc::new(NetworkFetcher::with_client(client)))
    }

    /// Create an AppStoreClient with an injected fetcher capability.
    pub fn with_fetcher(fetcher: Arc<dyn DataFetcher>) -> Self {
        Self {
            fetcher,
            base_url: BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Override the store region used in the feed URL (defaults to `fr`).
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Override the feed base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn feed_url(&self, limit: u32) -> String {
        format!(
            "{}/{}/rss/toppaidapplications/limit={}/json",
            self.base_url, self.region, limit
        )
    }

    /// Fetch and decode the top paid applications feed.
    ///
    /// Issues exactly one fetch per call and decodes the returned bytes
    /// synchronously. Every failure maps into [`AppStoreError`]; no partial
    /// results are returned.
    ///
    /// # Arguments
    /// * `limit` - Number of entries to request from the feed
    ///
    /// # Example
    /// ```no_run
    /// use appstore::AppStoreClient;
    ///
    /// # async fn example() -> appstore::Result<()> {
    /// let client = AppStoreClient::new(reqwest::Client::new());
    /// let apps = client.get_top_apps(10).await?;
    ///
    /// for app in apps {
    ///     println!("{}", app.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_top_apps(&self, limit: u32) -> crate::Result<Vec<App>> {
        let url = self.feed_url(limit);
        tracing::debug!("Fetching top paid applications from: {}", url);

        let bytes = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| AppStoreError::Network(e.to_string()))?;

        let apps = decode::decode_feed(&bytes)?;
        tracing::debug!("Decoded {} entries from feed", apps.len());

        Ok(apps)
    }
}
