//! Manage2 client configuration.
//!
//! The production host is the default. Override the base URL through
//! explicit construction to point the client at staging or a mock server.

use url::Url;
use zeroize::Zeroizing;

/// Production Manage2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://manage2.cpanel.net/";

/// Configuration for connecting to the Manage2 API.
///
/// Custom `Debug` implementation redacts the `password` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct Manage2Config {
    /// Base URL every resource script is resolved against.
    /// Default: <https://manage2.cpanel.net/>
    pub base_url: Url,
    /// Manage2 account username.
    pub username: String,
    /// Manage2 account password. Zeroized on drop.
    pub password: Zeroizing<String>,
    /// Request timeout in seconds. `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for Manage2Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manage2Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Manage2Config {
    /// Configuration for the production Manage2 host with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if [`DEFAULT_BASE_URL`] fails to
    /// parse (should not occur, but avoids `expect()`).
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url(DEFAULT_BASE_URL)?,
            username: username.into(),
            password: Zeroizing::new(password.into()),
            timeout_secs: None,
        })
    }

    /// Replace the base URL.
    ///
    /// A trailing `/` is appended to the path when missing, so
    /// `http://host/manage2` resolves scripts under `/manage2/`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `raw` does not parse as an
    /// absolute URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_url(raw)?;
        Ok(self)
    }

    /// Bound every request by `secs` seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed
    /// (should not occur for valid port numbers, but avoids `expect()`).
    pub fn local_mock(port: u16, username: &str, password: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(username, password)?
            .with_base_url(&format!("http://127.0.0.1:{port}"))?
            .with_timeout_secs(5))
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
    // `Url::join` replaces the last path segment unless the path is a directory.
    if !url.cannot_be_a_base() && !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL {0}: {1}")]
    InvalidUrl(String, String),
    #[error("credentials produce an invalid Authorization header")]
    InvalidCredentials,
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_targets_production_host() {
        let cfg = Manage2Config::new("reseller", "s3cret").unwrap();
        assert_eq!(cfg.base_url.as_str(), "https://manage2.cpanel.net/");
        assert_eq!(cfg.username, "reseller");
        assert_eq!(cfg.password.as_str(), "s3cret");
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = Manage2Config::local_mock(9000, "user", "pass").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn with_base_url_rejects_invalid_url() {
        let result = Manage2Config::new("u", "p").unwrap().with_base_url("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(..))));
    }

    #[test]
    fn with_base_url_keeps_path_prefix_without_trailing_slash() {
        let cfg = Manage2Config::new("u", "p")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/manage2")
            .unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8080/manage2/");

        let url = crate::query::request_url(
            &cfg.base_url,
            crate::Resource::PackageInfo,
            &crate::QueryParams::new(),
        )
        .unwrap();
        assert_eq!(url.path(), "/manage2/XMLpackageInfo.cgi");
    }

    #[test]
    fn with_base_url_keeps_slash_terminated_path() {
        let cfg = Manage2Config::new("u", "p")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/manage2/")
            .unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8080/manage2/");
    }

    #[test]
    fn debug_redacts_password() {
        let cfg = Manage2Config::new("reseller", "hunter2").unwrap();
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
