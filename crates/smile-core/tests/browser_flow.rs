//! Integration test: a browsing session driven through the public API.
//!
//! Replays the events a browser would deliver (tab navigation, request,
//! icon clicks) against one controller and applies the resulting actions to a
//! recording host.

use smile_core::config::SmileConfig;
use smile_core::controller::{HostEvent, HostResponse, RedirectController};
use smile_core::host::{dispatch, RecordingHost, TabAction};
use smile_core::icon::IconTheme;
use smile_core::request::{BlockingResponse, RequestDescriptor};
use smile_core::session::Session;
use smile_core::state::RedirectState;

fn apply(controller: &mut RedirectController, host: &mut RecordingHost, event: HostEvent) -> Option<String> {
    match controller.handle(event) {
        HostResponse::Blocking(BlockingResponse { redirect_url }) => redirect_url,
        HostResponse::Actions { actions } => {
            dispatch(host, &actions);
            None
        }
        HostResponse::Error { error } => panic!("unexpected error: {error}"),
    }
}

#[test]
fn browse_toggle_and_resume() {
    let mut controller = RedirectController::from_config(&SmileConfig::default());
    let mut host = RecordingHost::new();
    let icons = IconTheme::default();
    let product = "https://www.amazon.com/Widget/dp/B000X?ref=nav";

    let redirected = apply(
        &mut controller,
        &mut host,
        HostEvent::Request(RequestDescriptor::main_frame_get(product)),
    );
    assert_eq!(
        redirected.as_deref(),
        Some("https://smile.amazon.com/Widget/dp/B000X?ref=nav")
    );

    apply(
        &mut controller,
        &mut host,
        HostEvent::TabUpdated {
            tab_id: 11,
            url: "https://smile.amazon.com/Widget/dp/B000X?ref=nav".to_string(),
        },
    );
    assert_eq!(
        host.take(),
        vec![
            TabAction::Show { tab_id: 11 },
            TabAction::SetIcon {
                tab_id: 11,
                path: icons.icons_for(RedirectState::Active),
            },
        ]
    );

    apply(&mut controller, &mut host, HostEvent::IconActivated { tab_id: 11 });
    assert_eq!(controller.state(), RedirectState::Inactive);
    assert_eq!(
        apply(
            &mut controller,
            &mut host,
            HostEvent::Request(RequestDescriptor::main_frame_get(product)),
        ),
        None
    );

    host.take();
    apply(&mut controller, &mut host, HostEvent::IconActivated { tab_id: 11 });
    assert_eq!(host.actions.last(), Some(&TabAction::Reload { tab_id: 11 }));
    assert!(controller.is_enabled());
}

#[test]
fn session_over_byte_streams() {
    let input = [
        r#"{"event":"tab_updated","tabId":1,"url":"https://www.amazon.com/"}"#,
        r#"{"event":"request","method":"GET","type":"main_frame","url":"https://www.amazon.com/"}"#,
        r#"{"event":"request","method":"GET","type":"main_frame","url":"https://www.amazon.com/gp/product/B01?redirect=true"}"#,
        r#"{"event":"request","method":"GET","type":"main_frame","url":"https://www.amazon.com/gp/product/B01"}"#,
    ]
    .join("\n");

    let mut session = Session::new(RedirectController::default());
    let mut out = Vec::new();
    assert_eq!(session.run(input.as_bytes(), &mut out).unwrap(), 4);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].contains(r#""action":"show""#));
    assert_eq!(lines[1], "{}");
    assert_eq!(lines[2], "{}");
    assert_eq!(
        lines[3],
        r#"{"redirectUrl":"https://smile.amazon.com/gp/product/B01"}"#
    );
}

#[test]
fn two_tabs_get_their_own_actions() {
    let mut controller = RedirectController::default();
    let mut host = RecordingHost::new();

    apply(
        &mut controller,
        &mut host,
        HostEvent::TabUpdated {
            tab_id: 1,
            url: "https://www.amazon.com/".to_string(),
        },
    );
    apply(
        &mut controller,
        &mut host,
        HostEvent::TabUpdated {
            tab_id: 2,
            url: "https://example.org/".to_string(),
        },
    );

    assert_eq!(host.for_tab(1).len(), 2);
    assert_eq!(host.for_tab(2), vec![&TabAction::Hide { tab_id: 2 }]);
    assert!(host.for_tab(3).is_empty());
}

#[test]
fn shared_controller_serves_threads() {
    use smile_core::controller::SharedRedirectController;
    use std::sync::Arc;

    let controller = Arc::new(SharedRedirectController::from_config(&SmileConfig::default()));
    let clicker = {
        let c = Arc::clone(&controller);
        std::thread::spawn(move || c.handle(HostEvent::IconActivated { tab_id: 5 }))
    };
    let response = clicker.join().unwrap();
    let HostResponse::Actions { actions } = response else {
        panic!("expected actions");
    };
    assert_eq!(actions.len(), 1);
    assert_eq!(controller.state(), RedirectState::Inactive);

    let req = RequestDescriptor::main_frame_get("https://www.amazon.com/dp/B000X");
    assert_eq!(controller.decide_redirect(&req), None);
}
