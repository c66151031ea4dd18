//! Controller for hosts that deliver events from several threads.
//!
//! Same decisions as [`RedirectController`](super::RedirectController), but
//! the flag lives in a [`SharedRedirectState`] so every handler takes `&self`
//! and the controller can sit behind an `Arc`.

use crate::config::SmileConfig;
use crate::host::{TabAction, TabId};
use crate::icon::IconTheme;
use crate::policy::RedirectPolicy;
use crate::request::{RequestDescriptor, RewriteResult};
use crate::state::{RedirectState, SharedRedirectState};

use super::{decide, tab_actions, toggle_actions, HostEvent, HostResponse};

#[derive(Debug)]
pub struct SharedRedirectController {
    state: SharedRedirectState,
    policy: RedirectPolicy,
    icons: IconTheme,
}

impl SharedRedirectController {
    pub fn new(policy: RedirectPolicy, icons: IconTheme, initial: RedirectState) -> Self {
        Self {
            state: SharedRedirectState::new(initial),
            policy,
            icons,
        }
    }

    pub fn from_config(cfg: &SmileConfig) -> Self {
        Self::new(
            cfg.policy.resolve(),
            cfg.icons.theme(),
            RedirectState::from(cfg.initially_enabled),
        )
    }

    pub fn state(&self) -> RedirectState {
        self.state.load()
    }

    pub fn decide_redirect(&self, request: &RequestDescriptor) -> Option<RewriteResult> {
        decide(self.state.load(), &self.policy, request)
    }

    /// Flip the flag atomically; the actions reflect the state this call produced.
    pub fn on_icon_activated(&self, tab_id: TabId) -> Vec<TabAction> {
        let state = self.state.toggle();
        toggle_actions(state, &self.policy, &self.icons, tab_id)
    }

    pub fn on_tab_navigation_updated(&self, tab_id: TabId, url: &str) -> Vec<TabAction> {
        tab_actions(self.state.load(), &self.policy, &self.icons, tab_id, url)
    }

    pub fn handle(&self, event: HostEvent) -> HostResponse {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn controller() -> SharedRedirectController {
        SharedRedirectController::from_config(&SmileConfig::default())
    }

    #[test]
    fn decisions_match_owned_controller() {
        let shared = controller();
        let owned = super::super::RedirectController::default();
        for url in [
            "https://www.amazon.com/dp/X",
            "https://www.amazon.com/",
            "https://www.amazon.com/dp/X?redirect=true",
        ] {
            let req = RequestDescriptor::main_frame_get(url);
            assert_eq!(shared.decide_redirect(&req), owned.decide_redirect(&req), "{url}");
        }
    }

    #[test]
    fn toggle_reports_state_it_produced() {
        let c = controller();
        let off = c.on_icon_activated(1);
        assert_eq!(off.len(), 1);
        assert_eq!(c.state(), RedirectState::Inactive);
        let on = c.on_icon_activated(1);
        assert_eq!(on.last(), Some(&TabAction::Reload { tab_id: 1 }));
    }

    #[test]
    fn concurrent_clicks_and_requests() {
        let c = Arc::new(controller());
        let req = RequestDescriptor::main_frame_get("https://www.amazon.com/dp/X");
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let c = Arc::clone(&c);
                let req = req.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        c.on_icon_activated(i);
                        if let Some(r) = c.decide_redirect(&req) {
                            assert_eq!(r.redirect_url, "https://smile.amazon.com/dp/X");
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // 200 toggles in total: back where it started.
        assert_eq!(c.state(), RedirectState::Active);
        assert!(c.decide_redirect(&req).is_some());
    }
}
