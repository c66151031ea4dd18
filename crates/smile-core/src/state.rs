//! Enable/disable state of the redirect.
//!
//! Two states, `Active` and `Inactive`, starting `Active`. The only
//! transition is a manual toggle from the page-action icon; nothing is
//! persisted across restarts.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectState {
    #[default]
    Active,
    Inactive,
}

impl RedirectState {
    pub fn is_enabled(self) -> bool {
        matches!(self, RedirectState::Active)
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            RedirectState::Active => RedirectState::Inactive,
            RedirectState::Inactive => RedirectState::Active,
        }
    }

    /// Label used in icon asset names and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            RedirectState::Active => "enabled",
            RedirectState::Inactive => "disabled",
        }
    }
}

impl From<bool> for RedirectState {
    fn from(enabled: bool) -> Self {
        if enabled {
            RedirectState::Active
        } else {
            RedirectState::Inactive
        }
    }
}

impl fmt::Display for RedirectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thread-safe flag for hosts that deliver events from several threads.
///
/// Toggling is a single atomic read-modify-write, so concurrent readers always
/// see one of the two states and toggles are never lost.
#[derive(Debug)]
pub struct SharedRedirectState {
    enabled: AtomicBool,
}

impl SharedRedirectState {
    pub fn new(initial: RedirectState) -> Self {
        Self {
            enabled: AtomicBool::new(initial.is_enabled()),
        }
    }

    pub fn load(&self) -> RedirectState {
        RedirectState::from(self.enabled.load(Ordering::Acquire))
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&self) -> RedirectState {
        let previous = self.enabled.fetch_xor(true, Ordering::AcqRel);
        RedirectState::from(!previous)
    }
}

impl Default for SharedRedirectState {
    fn default() -> Self {
        Self::new(RedirectState::default())
    }
}
