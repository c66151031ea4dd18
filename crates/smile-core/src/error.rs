//! Error types for URL handling.
//!
//! These never reach the browser: the controller logs them and lets the
//! request through unmodified.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UrlError {
    /// The URL string could not be parsed at all.
    #[error("invalid URL {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but carries no host (e.g. `data:` or `file:` URLs).
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// The rewritten host was rejected by the URL parser.
    #[error("cannot set host {host} on {url}")]
    SetHost { url: String, host: String },
}
