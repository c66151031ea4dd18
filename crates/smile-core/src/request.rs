//! Request descriptors delivered by the browser and the blocking response returned to it.

use serde::{Deserialize, Serialize};

/// One outgoing navigation as reported by the browser's web-request hook.
///
/// Read-only; owned by the host and handed to the controller per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP method, e.g. `"GET"`.
    pub method: String,
    /// Resource type, e.g. `"main_frame"` or `"image"`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Target URL of the request.
    pub url: String,
}

impl RequestDescriptor {
    pub fn new(
        method: impl Into<String>,
        resource_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            resource_type: resource_type.into(),
            url: url.into(),
        }
    }

    /// A top-level `GET` navigation to `url`.
    pub fn main_frame_get(url: impl Into<String>) -> Self {
        Self::new("GET", "main_frame", url)
    }
}

/// Instruction to replace the destination of an intercepted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    pub redirect_url: String,
}

/// Wire form of the answer to a blocking request: `{}` lets the request
/// through, `{"redirectUrl": ...}` redirects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockingResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl From<Option<RewriteResult>> for BlockingResponse {
    fn from(result: Option<RewriteResult>) -> Self {
        Self {
            redirect_url: result.map(|r| r.redirect_url),
        }
    }
}
