//! Query-string construction for Manage2 requests.
//!
//! Every pair is form-urlencoded by [`url::form_urlencoded`] (space becomes
//! `+`, reserved characters are percent-encoded). Values are never spliced
//! into the URL by string formatting.

use url::Url;

use crate::config::ConfigError;
use crate::resource::Resource;

/// Response format requested from Manage2 on every call.
pub const OUTPUT_FORMAT: (&str, &str) = ("output", "json");

/// A single rendered query value.
///
/// Flags render as `1` / `0`, the form Manage2 expects for `force`,
/// `dryrun`, `cancel`, `expired` and `all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryValue(String);

impl QueryValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self(if value { "1" } else { "0" }.to_owned())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i32, i64);

/// Ordered operation parameters. Insertion order is preserved on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, builder style.
    pub fn with(mut self, key: &'static str, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<QueryValue>) {
        self.pairs.push((key, value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Resolve `resource` against `base` and attach `params` plus `output=json`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidUrl` if `base` cannot be a base for the
/// resource path (e.g. a `mailto:` URL).
pub fn request_url(
    base: &Url,
    resource: Resource,
    params: &QueryParams,
) -> Result<Url, ConfigError> {
    let mut url = base
        .join(resource.path())
        .map_err(|e| ConfigError::InvalidUrl(format!("{base}{resource}"), e.to_string()))?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(params.iter());
        pairs.append_pair(OUTPUT_FORMAT.0, OUTPUT_FORMAT.1);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> Url {
        Url::parse("https://manage2.cpanel.net/").unwrap()
    }

    #[test]
    fn empty_params_still_request_json() {
        let url = request_url(&base(), Resource::GroupInfo, &QueryParams::new()).unwrap();
        assert_eq!(url.as_str(), "https://manage2.cpanel.net/XMLgroupInfo.cgi?output=json");
    }

    #[test]
    fn pairs_keep_insertion_order() {
        let params = QueryParams::new()
            .with("liscid", "1234")
            .with("expcode", "normal");
        let url = request_url(&base(), Resource::LicenseExpire, &params).unwrap();
        assert_eq!(url.path(), "/XMLlicenseExpire.cgi");
        assert_eq!(url.query(), Some("liscid=1234&expcode=normal&output=json"));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let params = QueryParams::new().with("ip", "10.0.0.1&output=xml #x");
        let url = request_url(&base(), Resource::SecVerify, &params).unwrap();
        assert_eq!(
            url.query(),
            Some("ip=10.0.0.1%26output%3Dxml+%23x&output=json")
        );
        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(decoded[0], ("ip".into(), "10.0.0.1&output=xml #x".into()));
    }

    #[test]
    fn flags_and_integers_render_numerically() {
        let params = QueryParams::new()
            .with("force", true)
            .with("dryrun", false)
            .with("packageid", 42u32);
        let rendered: Vec<_> = params.iter().collect();
        assert_eq!(rendered, vec![("force", "1"), ("dryrun", "0"), ("packageid", "42")]);
    }

    #[test]
    fn base_path_prefix_is_kept_when_slash_terminated() {
        let base = Url::parse("http://127.0.0.1:8080/manage2/").unwrap();
        let url = request_url(&base, Resource::PackageInfo, &QueryParams::new()).unwrap();
        assert_eq!(url.path(), "/manage2/XMLpackageInfo.cgi");
    }

    #[test]
    fn opaque_base_is_rejected() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        let result = request_url(&base, Resource::Lookup, &QueryParams::new());
        assert!(matches!(result, Err(ConfigError::InvalidUrl(..))));
    }

    const KEYS: &[&str] = &["ip", "groupid", "packageid", "liscid", "expcode", "all"];

    proptest! {
        #[test]
        fn every_supplied_pair_survives_encoding(
            pairs in prop::collection::vec((prop::sample::select(KEYS), ".*"), 0..8)
        ) {
            let mut params = QueryParams::new();
            for (key, value) in &pairs {
                params.push(*key, value.as_str());
            }
            let url = request_url(&base(), Resource::RawLookup, &params).unwrap();
            let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();

            let mut expected: Vec<(String, String)> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            expected.push(("output".into(), "json".into()));
            prop_assert_eq!(decoded, expected);
        }
    }
}
