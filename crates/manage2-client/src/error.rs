//! Manage2 client error types.
//!
//! Remote-side failures (bad credentials, unknown license, invalid IP) are
//! reported by Manage2 inside the response body and are NOT mapped here.

/// Errors from Manage2 API calls.
#[derive(Debug, thiserror::Error)]
pub enum Manage2Error {
    /// HTTP transport error: DNS, TLS, connect, reset, timeout, or body read.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
