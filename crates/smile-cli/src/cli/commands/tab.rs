//! `smile tab <url>` – show the page-action updates for a tab navigation.

use anyhow::Result;
use smile_core::config::SmileConfig;
use smile_core::host::{TabAction, TabId};

use super::controller_for;

/// One line per action, e.g. `show 3` or `set_icon 3 19=images/icon-enabled-19.png`.
pub fn format_actions(actions: &[TabAction]) -> Vec<String> {
    actions
        .iter()
        .map(|action| match action {
            TabAction::Show { tab_id } => format!("show {tab_id}"),
            TabAction::Hide { tab_id } => format!("hide {tab_id}"),
            TabAction::Reload { tab_id } => format!("reload {tab_id}"),
            TabAction::SetIcon { tab_id, path } => {
                let icons: Vec<String> = path
                    .iter()
                    .map(|(size, p)| format!("{size}={p}"))
                    .collect();
                format!("set_icon {tab_id} {}", icons.join(" "))
            }
        })
        .collect()
}

pub fn run_tab(cfg: &SmileConfig, url: &str, tab_id: TabId, disabled: bool) -> Result<()> {
    let controller = controller_for(cfg, disabled);
    let actions = controller.on_tab_navigation_updated(tab_id, url);
    for line in format_actions(&actions) {
        println!("{line}");
    }
    Ok(())
}
