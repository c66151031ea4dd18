//! `smile check <url>` – show the redirect decision for one request.

use anyhow::Result;
use smile_core::config::SmileConfig;
use smile_core::controller::RedirectController;
use smile_core::request::RequestDescriptor;

use super::controller_for;

/// `redirect <url>` or `pass (<reason>)`.
pub fn format_decision(controller: &RedirectController, request: &RequestDescriptor) -> String {
    match controller.decide_redirect(request) {
        Some(result) => format!("redirect {}", result.redirect_url),
        None => match controller.ignore_reason(request) {
            Some(reason) => format!("pass ({reason})"),
            None => "pass (unchanged)".to_string(),
        },
    }
}

pub fn run_check(
    cfg: &SmileConfig,
    url: &str,
    method: &str,
    resource_type: &str,
    disabled: bool,
) -> Result<()> {
    let controller = controller_for(cfg, disabled);
    let request = RequestDescriptor::new(method, resource_type, url);
    println!("{}", format_decision(&controller, &request));
    Ok(())
}
