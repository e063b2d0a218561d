use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

/// Error type on the fetch boundary. Implementations surface transport
/// failures here; the client maps them all to
/// [`crate::AppStoreError::Network`].
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Capability for performing the raw feed request.
///
/// Production code uses [`NetworkFetcher`]; tests substitute a
/// canned-response double so no real I/O happens.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Perform a single GET against `url` and return the response body.
    ///
    /// Exactly one request per call: no retries, no caching.
    async fn fetch(&self, url: &str) -> std::result::Result<Bytes, FetchError>;
}

/// Network-backed fetcher wrapping a reqwest Client
pub struct NetworkFetcher {
    client: Client,
}

impl NetworkFetcher {
    /// Create a NetworkFetcher with a custom reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataFetcher for NetworkFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<Bytes, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(format!("HTTP {} when fetching {}", status, url).into());
        }

        Ok(response.bytes().await?)
    }
}
