//! The redirect controller: one owned object handling every browser event.
//!
//! The browser delivers three kinds of events one at a time: outgoing
//! requests, icon clicks and tab navigations. Request decisions take `&self`
//! and never change state; only an icon click (`&mut self`) flips the flag.

mod events;
mod shared;

use crate::config::SmileConfig;
use crate::host::{TabAction, TabId};
use crate::icon::{IconSet, IconTheme};
use crate::policy::{IgnoreReason, RedirectPolicy};
use crate::request::{RequestDescriptor, RewriteResult};
use crate::state::RedirectState;
use crate::url_model::{parse_url, rewrite_url};

pub use events::{HostEvent, HostResponse};
pub use shared::SharedRedirectController;

#[derive(Debug, Clone)]
pub struct RedirectController {
    state: RedirectState,
    policy: RedirectPolicy,
    icons: IconTheme,
}

impl RedirectController {
    /// New controller in the `Active` state.
    pub fn new(policy: RedirectPolicy, icons: IconTheme) -> Self {
        Self {
            state: RedirectState::Active,
            policy,
            icons,
        }
    }

    pub fn from_config(cfg: &SmileConfig) -> Self {
        Self::new(cfg.policy.resolve(), cfg.icons.theme())
            .with_state(RedirectState::from(cfg.initially_enabled))
    }

    pub fn with_state(mut self, state: RedirectState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> RedirectState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn policy(&self) -> &RedirectPolicy {
        &self.policy
    }

    /// Icons matching the current state.
    pub fn current_icons(&self) -> IconSet {
        self.icons.icons_for(self.state)
    }

    /// Whether `request` is skipped regardless of the enable flag.
    pub fn should_ignore(&self, request: &RequestDescriptor) -> bool {
        self.policy.should_ignore(request)
    }

    /// Why `request` would not be redirected right now, including the
    /// disabled state.
    pub fn ignore_reason(&self, request: &RequestDescriptor) -> Option<IgnoreReason> {
        ignore_reason(self.state, &self.policy, request)
    }

    /// Decide whether to redirect an outgoing request.
    ///
    /// Any failure passes the request through: an error from a blocking
    /// handler would abort the navigation.
    pub fn decide_redirect(&self, request: &RequestDescriptor) -> Option<RewriteResult> {
        decide(self.state, &self.policy, request)
    }

    /// Toggle redirection from the page-action icon on `tab_id`.
    pub fn on_icon_activated(&mut self, tab_id: TabId) -> Vec<TabAction> {
        self.state = self.state.toggled();
        toggle_actions(self.state, &self.policy, &self.icons, tab_id)
    }

    /// Show or hide the icon after `tab_id` navigated to `url`.
    pub fn on_tab_navigation_updated(&self, tab_id: TabId, url: &str) -> Vec<TabAction> {
        tab_actions(self.state, &self.policy, &self.icons, tab_id, url)
    }

    /// Route one inbound event to its handler.
    pub fn handle(&mut self, event: HostEvent) -> HostResponse {
        match event {
            HostEvent::Request(request) => {
                HostResponse::Blocking(self.decide_redirect(&request).into())
            }
            HostEvent::IconActivated { tab_id } => HostResponse::Actions {
                actions: self.on_icon_activated(tab_id),
            },
            HostEvent::TabUpdated { tab_id, url } => HostResponse::Actions {
                actions: self.on_tab_navigation_updated(tab_id, &url),
            },
        }
    }
}

impl Default for RedirectController {
    fn default() -> Self {
        Self::new(RedirectPolicy::default(), IconTheme::default())
    }
}

fn ignore_reason(
    state: RedirectState,
    policy: &RedirectPolicy,
    request: &RequestDescriptor,
) -> Option<IgnoreReason> {
    if !state.is_enabled() {
        return Some(IgnoreReason::Disabled);
    }
    policy.ignore_reason(request)
}

fn decide(
    state: RedirectState,
    policy: &RedirectPolicy,
    request: &RequestDescriptor,
) -> Option<RewriteResult> {
    if let Some(reason) = ignore_reason(state, policy, request) {
        tracing::debug!(url = %request.url, %reason, "request passed through");
        return None;
    }
    match rewrite_url(&request.url) {
        Ok(Some(redirect_url)) => {
            tracing::info!(from = %request.url, to = %redirect_url, "redirecting request");
            Some(RewriteResult { redirect_url })
        }
        Ok(None) => {
            tracing::debug!(url = %request.url, "host has no www prefix; passed through");
            None
        }
        Err(e) => {
            tracing::warn!(url = %request.url, "rewrite failed, passing through: {}", e);
            None
        }
    }
}

/// Actions after the flag was flipped to `state`.
fn toggle_actions(
    state: RedirectState,
    policy: &RedirectPolicy,
    icons: &IconTheme,
    tab_id: TabId,
) -> Vec<TabAction> {
    tracing::info!(tab_id, %state, "redirect toggled");
    let mut actions = vec![TabAction::SetIcon {
        tab_id,
        path: icons.icons_for(state),
    }];
    if state.is_enabled() && policy.reload_on_enable {
        actions.push(TabAction::Reload { tab_id });
    }
    actions
}

fn tab_actions(
    state: RedirectState,
    policy: &RedirectPolicy,
    icons: &IconTheme,
    tab_id: TabId,
    url: &str,
) -> Vec<TabAction> {
    let on_site = match parse_url(url) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|host| policy.tab_match.matches(host)),
        Err(e) => {
            tracing::debug!(tab_id, url, "tab url not parsed: {}", e);
            false
        }
    };

    if on_site {
        vec![
            TabAction::Show { tab_id },
            TabAction::SetIcon {
                tab_id,
                path: icons.icons_for(state),
            },
        ]
    } else {
        vec![TabAction::Hide { tab_id }]
    }
}
