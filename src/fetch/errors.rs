/// Errors from the fetch backends.
use thiserror::Error;

/// Errors that can occur while fetching video metadata.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No extraction backend has been set up.
    #[error("Douyin_TikTok_Download_API not configured")]
    NotConfigured,

    /// The configured API base URL is not an http(s) URL.
    #[error("Invalid API base URL '{url}': expected http:// or https://")]
    InvalidBaseUrl {
        /// The rejected base URL.
        url: String,
    },

    /// Connection, DNS, TLS or timeout failure talking to the API service.
    #[error("API request failed: {0}")]
    Transport(String),

    /// The API service answered with a non-success status.
    #[error("API request failed ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The API service answered with something other than a JSON object.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}
