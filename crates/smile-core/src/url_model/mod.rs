//! URL modeling for redirect decisions.
//!
//! Decomposes request URLs into hostname, path and query parameters, matches
//! hosts against the target site and rewrites the `www` host label to `smile`.

mod query;
mod rewrite;
mod site;

use std::collections::HashMap;

use url::Url;

use crate::error::UrlError;

pub use query::parse_query;
pub use rewrite::{rewrite_host, rewrite_url};
pub use site::{
    is_exact_site_host, is_site_subdomain, matches_request_pattern, REQUEST_URL_PATTERN,
    SITE_DOMAIN,
};

/// Hostname, path and query mapping of one URL.
///
/// Built fresh for each decision and dropped right after. Duplicate query keys
/// keep the last value; a URL without a query yields an empty mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComponents {
    pub hostname: String,
    pub path: String,
    pub query: HashMap<String, String>,
}

impl UrlComponents {
    /// Parse `url` into its components.
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let parsed = parse_url(url)?;
        Ok(Self::from_url(&parsed))
    }

    pub fn from_url(parsed: &Url) -> Self {
        Self {
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            path: parsed.path().to_string(),
            query: parse_query(parsed.query()),
        }
    }

    /// Value of query parameter `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

pub(crate) fn parse_url(url: &str) -> Result<Url, UrlError> {
    Url::parse(url).map_err(|source| UrlError::Parse {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_of_product_url() {
        let c = UrlComponents::parse("https://www.amazon.com/dp/B000X?x=1&tag=abc").unwrap();
        assert_eq!(c.hostname, "www.amazon.com");
        assert_eq!(c.path, "/dp/B000X");
        assert_eq!(c.param("x"), Some("1"));
        assert_eq!(c.param("tag"), Some("abc"));
        assert_eq!(c.param("missing"), None);
    }

    #[test]
    fn hostname_is_lowercased() {
        let c = UrlComponents::parse("http://WWW.Amazon.COM/").unwrap();
        assert_eq!(c.hostname, "www.amazon.com");
    }

    #[test]
    fn no_query_is_empty_mapping() {
        let c = UrlComponents::parse("https://www.amazon.com/gp/product/B01").unwrap();
        assert!(c.query.is_empty());
    }

    #[test]
    fn unparsable_url_is_error() {
        let err = UrlComponents::parse("not a url").unwrap_err();
        assert!(matches!(err, UrlError::Parse { .. }));
    }
}
