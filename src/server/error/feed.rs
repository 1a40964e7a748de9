use thiserror::Error;

/// Failures while fetching a third-party JSON feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL
        url: String,
        /// Timeout that elapsed
        timeout_secs: u64,
    },

    /// The feed answered with a non-success status code.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code returned by the feed
        status: u16,
    },

    /// The request could not be sent or the connection failed.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON shape the caller expected.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },
}

impl FeedError {
    /// Returns true when the failure was caused by the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
