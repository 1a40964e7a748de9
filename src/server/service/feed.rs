use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::server::{
    error::feed::FeedError,
    model::feed::{CommunityStats, Quote, QuoteBook},
};

/// Timeout applied to every feed request.
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the community JSON feeds (quotes and statistics).
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct FeedClient {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl FeedClient {
    /// Creates a new FeedClient with the default 5 second timeout.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            timeout: DEFAULT_FEED_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches and decodes a JSON document.
    ///
    /// The request is aborted once the timeout elapses.
    ///
    /// # Arguments
    /// - `url` - Feed URL
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded document
    /// - `Err(FeedError::Timeout)` - No complete response within the timeout
    /// - `Err(FeedError::Status)` - Non-success status code
    /// - `Err(FeedError::Request)` - Connection or protocol failure
    /// - `Err(FeedError::Decode)` - Body is not the expected JSON shape
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, FeedError> {
        let response = self
            .http_client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                self.request_error(url, e)
            } else {
                FeedError::Decode {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }

    /// All quotes keyed by category.
    pub async fn all_quotes(&self, url: &Url) -> Result<QuoteBook, FeedError> {
        self.fetch_json(url).await
    }

    /// Quote of the day.
    pub async fn daily_quote(&self, url: &Url) -> Result<Quote, FeedError> {
        self.fetch_json(url).await
    }

    pub async fn community_stats(&self, url: &Url) -> Result<CommunityStats, FeedError> {
        self.fetch_json(url).await
    }

    fn request_error(&self, url: &Url, error: reqwest::Error) -> FeedError {
        if error.is_timeout() {
            FeedError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            FeedError::Request {
                url: url.to_string(),
                source: error,
            }
        }
    }
}
