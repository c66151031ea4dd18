use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::icon::{IconTheme, DEFAULT_ICON_DIRECTORY, DEFAULT_ICON_SIZES};
use crate::policy::{PolicyPreset, RedirectPolicy, TabMatch};

/// Redirect policy section: a preset plus optional per-field overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// "full" (default) or "minimal".
    #[serde(default)]
    pub preset: PolicyPreset,
    #[serde(default)]
    pub product_pages_only: Option<bool>,
    /// "exact" or "any_subdomain".
    #[serde(default)]
    pub tab_match: Option<TabMatch>,
    #[serde(default)]
    pub reload_on_enable: Option<bool>,
    #[serde(default)]
    pub redirect_parameter: Option<String>,
}

impl PolicyConfig {
    /// Preset with overrides applied.
    pub fn resolve(&self) -> RedirectPolicy {
        let mut policy = RedirectPolicy::from_preset(self.preset);
        if let Some(v) = self.product_pages_only {
            policy.product_pages_only = v;
        }
        if let Some(v) = self.tab_match {
            policy.tab_match = v;
        }
        if let Some(v) = self.reload_on_enable {
            policy.reload_on_enable = v;
        }
        if let Some(v) = &self.redirect_parameter {
            policy.redirect_parameter = v.clone();
        }
        policy
    }
}

/// Icon asset section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Asset directory relative to the extension root.
    pub directory: String,
    /// Logical sizes with an asset per state.
    pub sizes: Vec<u32>,
}

impl IconConfig {
    pub fn theme(&self) -> IconTheme {
        IconTheme::new(self.directory.clone(), self.sizes.iter().copied())
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_ICON_DIRECTORY.to_string(),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
        }
    }
}

/// Global configuration loaded from `~/.config/smile/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmileConfig {
    /// State at startup. The toggle itself is never written back.
    #[serde(default = "default_initially_enabled")]
    pub initially_enabled: bool,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub icons: IconConfig,
}

fn default_initially_enabled() -> bool {
    true
}

impl Default for SmileConfig {
    fn default() -> Self {
        Self {
            initially_enabled: default_initially_enabled(),
            policy: PolicyConfig::default(),
            icons: IconConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smile")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmileConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SmileConfig> {
    if !path.exists() {
        let default_cfg = SmileConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SmileConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
