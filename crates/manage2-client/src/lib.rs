//! # manage2-client -- Rust client for the cPanel Manage2 API
//!
//! Thin, pass-through access to cPanel's remote license-management service:
//! - **Licenses** via `XMLlicenseInfo`, `XMLtransferRequest`, `XMLtransfer`,
//!   `XMLlicenseExpire`, `XMLonetimeext`, `XMLlicenseReActivate`,
//!   `XMLlookup` and `XMLRawlookup`
//! - **Catalog** (groups and packages) via `XMLgroupInfo` and `XMLpackageInfo`
//! - **Risk** (fraud score) via `XMLsecverify`
//!
//! ## Request Convention
//!
//! Every operation is a single HTTP Basic authenticated GET:
//! `{base_url}/{resource}.cgi?{params}&output=json`.
//!
//! The response body is returned verbatim as bytes. Manage2 signals failures (bad
//! credentials, unknown license) inside that body, so callers own both
//! parsing and error interpretation. Only transport failures surface as
//! [`Manage2Error`].
//!
//! ## Connections
//!
//! No connection is kept idle between calls and nothing is retried. Each
//! operation opens, uses and closes its own connection.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod licenses;
pub mod query;
pub mod resource;
pub mod risk;

pub use config::{ConfigError, Manage2Config, DEFAULT_BASE_URL};
pub use error::Manage2Error;
pub use query::{QueryParams, QueryValue};
pub use resource::Resource;

use std::time::Duration;

/// Manage2 API client.
///
/// Holds the Authorization header and base URL fixed at construction.
/// Cheap to clone; clones share the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Manage2Client {
    http: reqwest::Client,
    base_url: url::Url,
}

impl Manage2Client {
    /// Create a new Manage2 client from configuration.
    ///
    /// Credentials are encoded into the Authorization header here and are
    /// not checked against the remote service.
    pub fn new(config: Manage2Config) -> Result<Self, Manage2Error> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    auth::authorization_header(&config.username, &config.password)?,
                );
                headers
            });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Base URL every resource script is resolved against.
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Issue `GET {base_url}/{resource}?{params}&output=json` and return the
    /// body bytes untouched. No charset decoding is applied.
    pub(crate) async fn perform_request(
        &self,
        resource: Resource,
        params: QueryParams,
    ) -> Result<Vec<u8>, Manage2Error> {
        let endpoint = resource.path();
        let url = query::request_url(&self.base_url, resource, &params)?;

        tracing::debug!(endpoint, params = params.len(), "sending Manage2 request");

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::warn!(endpoint, error = %e, "Manage2 request failed");
            Manage2Error::Http {
                endpoint: endpoint.into(),
                source: e,
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint,
                status = status.as_u16(),
                "Manage2 returned non-success status"
            );
        }

        let body = resp.bytes().await.map_err(|e| Manage2Error::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        tracing::debug!(
            endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            "Manage2 response received"
        );
        Ok(body.to_vec())
    }
}
