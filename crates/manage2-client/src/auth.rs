//! HTTP Basic authentication for Manage2.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::HeaderValue;
use zeroize::Zeroizing;

use crate::config::ConfigError;

/// `Basic <base64(username:password)>`.
///
/// The plaintext `username:password` buffer is zeroized before returning.
pub fn basic_auth_value(username: &str, password: &str) -> Zeroizing<String> {
    let credentials = Zeroizing::new(format!("{username}:{password}"));
    Zeroizing::new(format!("Basic {}", STANDARD.encode(credentials.as_bytes())))
}

/// Header form of [`basic_auth_value`], flagged sensitive so `Debug`
/// output and HTTP/2 header compression never expose it.
pub(crate) fn authorization_header(
    username: &str,
    password: &str,
) -> Result<HeaderValue, ConfigError> {
    let value = basic_auth_value(username, password);
    let mut header =
        HeaderValue::from_str(value.as_str()).map_err(|_| ConfigError::InvalidCredentials)?;
    header.set_sensitive(true);
    Ok(header)
}
