//! Inbound browser events and the responses sent back.

use serde::{Deserialize, Serialize};

use crate::host::{TabAction, TabId};
use crate::request::{BlockingResponse, RequestDescriptor};

/// One event from the browser, tagged by `"event"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// Outgoing navigation that must be answered before it is sent.
    Request(RequestDescriptor),
    /// The user clicked the page-action icon.
    IconActivated {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
    /// A tab's location changed.
    TabUpdated {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HostResponse {
    Blocking(BlockingResponse),
    Actions { actions: Vec<TabAction> },
    Error { error: String },
}
