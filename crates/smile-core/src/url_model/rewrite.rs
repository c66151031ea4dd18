//! Hostname rewrite: leading `www` label prefix becomes `smile`.

use super::parse_url;
use crate::error::UrlError;

const SOURCE_PREFIX: &str = "www";
const TARGET_PREFIX: &str = "smile";

/// Replaces a case-insensitive leading `www` in `host` with `smile`.
///
/// Returns `None` when the host does not start with `www`. The replacement is
/// always lowercase.
pub fn rewrite_host(host: &str) -> Option<String> {
    let head = host.get(..SOURCE_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(SOURCE_PREFIX) {
        return None;
    }
    Some(format!("{TARGET_PREFIX}{}", &host[SOURCE_PREFIX.len()..]))
}

/// Rewrites the host of `url`, keeping scheme, port, path, query and fragment.
///
/// `Ok(None)` means the host has no `www` prefix and nothing would change.
pub fn rewrite_url(url: &str) -> Result<Option<String>, UrlError> {
    let mut parsed = parse_url(url)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| UrlError::MissingHost(url.to_string()))?;
    let Some(new_host) = rewrite_host(host) else {
        return Ok(None);
    };
    parsed
        .set_host(Some(&new_host))
        .map_err(|_| UrlError::SetHost {
            url: url.to_string(),
            host: new_host.clone(),
        })?;
    Ok(Some(parsed.into()))
}
