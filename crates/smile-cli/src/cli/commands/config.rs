//! `smile config` – show where the config lives and what it resolves to.

use anyhow::Result;
use smile_core::config::{self, SmileConfig};
use smile_core::url_model::REQUEST_URL_PATTERN;

pub fn run_config(cfg: &SmileConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    println!("# intercepts {REQUEST_URL_PATTERN}");
    print!("{}", toml::to_string_pretty(cfg)?);
    let policy = cfg.policy.resolve();
    println!();
    println!("# effective policy");
    print!("{}", toml::to_string_pretty(&policy)?);
    Ok(())
}
