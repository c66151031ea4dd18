//! `smile icons` – print the icon dictionary as JSON.

use anyhow::Result;
use smile_core::config::SmileConfig;

use super::controller_for;

pub fn run_icons(cfg: &SmileConfig, disabled: bool) -> Result<()> {
    let icons = controller_for(cfg, disabled).current_icons();
    println!("{}", serde_json::to_string_pretty(&icons)?);
    Ok(())
}
