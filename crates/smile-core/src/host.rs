//! Outbound instructions to the browser and the host seam that applies them.

use serde::{Deserialize, Serialize};

use crate::icon::IconSet;

/// Browser tab identifier.
pub type TabId = i64;

/// One instruction for the browser's page-action and tabs APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TabAction {
    Show {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
    Hide {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
    SetIcon {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        path: IconSet,
    },
    Reload {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
}

impl TabAction {
    pub fn tab_id(&self) -> TabId {
        match self {
            TabAction::Show { tab_id }
            | TabAction::Hide { tab_id }
            | TabAction::SetIcon { tab_id, .. }
            | TabAction::Reload { tab_id } => *tab_id,
        }
    }
}

/// The browser side of the controller.
pub trait ExtensionHost {
    fn show_icon(&mut self, tab_id: TabId);
    fn hide_icon(&mut self, tab_id: TabId);
    fn set_icon(&mut self, tab_id: TabId, icons: &IconSet);
    fn reload_tab(&mut self, tab_id: TabId);
}

/// Apply `actions` to `host` in order.
pub fn dispatch<H: ExtensionHost + ?Sized>(host: &mut H, actions: &[TabAction]) {
    for action in actions {
        match action {
            TabAction::Show { tab_id } => host.show_icon(*tab_id),
            TabAction::Hide { tab_id } => host.hide_icon(*tab_id),
            TabAction::SetIcon { tab_id, path } => host.set_icon(*tab_id, path),
            TabAction::Reload { tab_id } => host.reload_tab(*tab_id),
        }
    }
}

/// Host that only remembers what it was told.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub actions: Vec<TabAction>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded actions addressed to `tab_id`, in order.
    pub fn for_tab(&self, tab_id: TabId) -> Vec<&TabAction> {
        self.actions.iter().filter(|a| a.tab_id() == tab_id).collect()
    }

    /// Drain recorded actions.
    pub fn take(&mut self) -> Vec<TabAction> {
        std::mem::take(&mut self.actions)
    }
}

impl ExtensionHost for RecordingHost {
    fn show_icon(&mut self, tab_id: TabId) {
        self.actions.push(TabAction::Show { tab_id });
    }

    fn hide_icon(&mut self, tab_id: TabId) {
        self.actions.push(TabAction::Hide { tab_id });
    }

    fn set_icon(&mut self, tab_id: TabId, icons: &IconSet) {
        self.actions.push(TabAction::SetIcon {
            tab_id,
            path: icons.clone(),
        });
    }

    fn reload_tab(&mut self, tab_id: TabId) {
        self.actions.push(TabAction::Reload { tab_id });
    }
}
