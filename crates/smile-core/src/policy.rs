//! Redirect policy: which requests are eligible and where the icon shows.
//!
//! Two presets exist. `Full` only redirects product pages, shows the icon on
//! the exact www/smile hosts and reloads the tab when redirection is turned
//! back on. `Minimal` redirects every top-level GET, shows the icon on any
//! `*.amazon.com` host and never reloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::RequestDescriptor;
use crate::url_model::{
    is_exact_site_host, is_site_subdomain, matches_request_pattern, parse_url, UrlComponents,
};

/// Default name of the query parameter marking an already redirected request.
pub const DEFAULT_REDIRECT_PARAMETER: &str = "redirect";

/// Path fragments that identify a product detail page.
pub const PRODUCT_PATH_MARKERS: [&str; 2] = ["/dp/", "/gp/product/"];

const REQUIRED_METHOD: &str = "GET";
const REQUIRED_RESOURCE_TYPE: &str = "main_frame";

/// Named policy bundle selectable from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyPreset {
    #[default]
    Full,
    Minimal,
}

/// Which tab hosts get the page-action icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabMatch {
    /// Only `www.amazon.com` and `smile.amazon.com`.
    Exact,
    /// Any `*.amazon.com` host.
    AnySubdomain,
}

impl TabMatch {
    pub fn matches(self, host: &str) -> bool {
        match self {
            TabMatch::Exact => is_exact_site_host(host),
            TabMatch::AnySubdomain => is_site_subdomain(host),
        }
    }
}

/// Why a request was passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Redirection is switched off.
    Disabled,
    /// Method is not GET.
    Method,
    /// Not a top-level document load.
    ResourceType,
    /// URL could not be parsed; fail open.
    UnparsableUrl,
    /// URL is outside the intercepted host pattern.
    OffSite,
    /// Query already carries the redirect marker.
    AlreadyRedirecting,
    /// Path is not a product detail page.
    NotProductPage,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            IgnoreReason::Disabled => "disabled",
            IgnoreReason::Method => "method",
            IgnoreReason::ResourceType => "resource_type",
            IgnoreReason::UnparsableUrl => "unparsable_url",
            IgnoreReason::OffSite => "off_site",
            IgnoreReason::AlreadyRedirecting => "already_redirecting",
            IgnoreReason::NotProductPage => "not_product_page",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectPolicy {
    /// Only redirect paths containing `/dp/` or `/gp/product/`.
    pub product_pages_only: bool,
    pub tab_match: TabMatch,
    /// Reload the tab when redirection is switched back on.
    pub reload_on_enable: bool,
    /// Query parameter that marks a request as already redirected.
    pub redirect_parameter: String,
}

impl RedirectPolicy {
    pub fn full() -> Self {
        Self {
            product_pages_only: true,
            tab_match: TabMatch::Exact,
            reload_on_enable: true,
            redirect_parameter: DEFAULT_REDIRECT_PARAMETER.to_string(),
        }
    }

    pub fn minimal() -> Self {
        Self {
            product_pages_only: false,
            tab_match: TabMatch::AnySubdomain,
            reload_on_enable: false,
            redirect_parameter: DEFAULT_REDIRECT_PARAMETER.to_string(),
        }
    }

    pub fn from_preset(preset: PolicyPreset) -> Self {
        match preset {
            PolicyPreset::Full => Self::full(),
            PolicyPreset::Minimal => Self::minimal(),
        }
    }

    /// Reason to leave `request` alone, or `None` if it should be redirected.
    ///
    /// Does not look at the enable flag; the controller checks that first.
    pub fn ignore_reason(&self, request: &RequestDescriptor) -> Option<IgnoreReason> {
        if !request.method.eq_ignore_ascii_case(REQUIRED_METHOD) {
            return Some(IgnoreReason::Method);
        }
        if !request
            .resource_type
            .eq_ignore_ascii_case(REQUIRED_RESOURCE_TYPE)
        {
            return Some(IgnoreReason::ResourceType);
        }

        let parsed = match parse_url(&request.url) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!(url = %request.url, "passing request through: {}", e);
                return Some(IgnoreReason::UnparsableUrl);
            }
        };
        if !matches_request_pattern(&parsed) {
            return Some(IgnoreReason::OffSite);
        }

        let components = UrlComponents::from_url(&parsed);
        if self.already_redirecting(&components) {
            return Some(IgnoreReason::AlreadyRedirecting);
        }
        if self.product_pages_only && !is_product_path(&components.path) {
            return Some(IgnoreReason::NotProductPage);
        }
        None
    }

    pub fn should_ignore(&self, request: &RequestDescriptor) -> bool {
        self.ignore_reason(request).is_some()
    }

    fn already_redirecting(&self, components: &UrlComponents) -> bool {
        components
            .param(&self.redirect_parameter)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::full()
    }
}

/// True if `path` looks like a product detail page.
pub fn is_product_path(path: &str) -> bool {
    PRODUCT_PATH_MARKERS.iter().any(|m| path.contains(m))
}
