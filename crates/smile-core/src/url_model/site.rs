//! Target-site host matching.

use url::Url;

/// Registrable domain of the retail site.
pub const SITE_DOMAIN: &str = "amazon.com";

/// Match pattern the browser uses to route requests to the interceptor.
pub const REQUEST_URL_PATTERN: &str = "*://www.amazon.com/*";

const INTERCEPTED_HOST: &str = "www.amazon.com";
const EXACT_HOSTS: [&str; 2] = ["www.amazon.com", "smile.amazon.com"];

/// True for exactly `www.amazon.com` or `smile.amazon.com`, ignoring case.
pub fn is_exact_site_host(host: &str) -> bool {
    EXACT_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host))
}

/// True for any subdomain of `amazon.com` (but not the bare domain).
pub fn is_site_subdomain(host: &str) -> bool {
    let suffix_len = SITE_DOMAIN.len() + 1;
    if host.len() <= suffix_len {
        return false;
    }
    let split = host.len() - suffix_len;
    match host.get(split..) {
        Some(tail) => tail.starts_with('.') && tail[1..].eq_ignore_ascii_case(SITE_DOMAIN),
        None => false,
    }
}

/// True when `url` falls under [`REQUEST_URL_PATTERN`].
pub fn matches_request_pattern(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
        && url
            .host_str()
            .is_some_and(|h| h.eq_ignore_ascii_case(INTERCEPTED_HOST))
}
