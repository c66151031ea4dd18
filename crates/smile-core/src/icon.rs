//! Page-action icon selection.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::RedirectState;

/// Logical icon sizes shipped with the extension.
pub const DEFAULT_ICON_SIZES: [u32; 2] = [19, 38];

/// Directory (relative to the extension root) holding icon assets.
pub const DEFAULT_ICON_DIRECTORY: &str = "images";

/// Icon paths keyed by logical size, in the shape `setIcon` expects.
///
/// Serializes as `{"19": "images/icon-enabled-19.png", "38": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconSet(BTreeMap<u32, String>);

// Sizes arrive as string keys, also when buffered inside a tagged enum.
impl<'de> Deserialize<'de> for IconSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(size, path)| match size.parse::<u32>() {
                Ok(n) => Ok((n, path)),
                Err(_) => Err(D::Error::custom(format!("invalid icon size {size:?}"))),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(IconSet)
    }
}

impl IconSet {
    pub fn get(&self, size: u32) -> Option<&str> {
        self.0.get(&size).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Where icon assets live and which sizes exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTheme {
    directory: String,
    sizes: Vec<u32>,
}

impl IconTheme {
    pub fn new(directory: impl Into<String>, sizes: impl IntoIterator<Item = u32>) -> Self {
        let directory = directory.into();
        let directory = directory.trim_end_matches('/').to_string();
        Self {
            directory,
            sizes: sizes.into_iter().collect(),
        }
    }

    /// Asset path for one size, e.g. `images/icon-disabled-38.png`.
    pub fn path(&self, state: RedirectState, size: u32) -> String {
        let file = format!("icon-{}-{}.png", state.as_str(), size);
        if self.directory.is_empty() {
            file
        } else {
            format!("{}/{}", self.directory, file)
        }
    }

    pub fn icons_for(&self, state: RedirectState) -> IconSet {
        let set: BTreeMap<u32, String> = self
            .sizes
            .iter()
            .map(|&size| (size, self.path(state, size)))
            .collect();
        IconSet(set)
    }
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_DIRECTORY, DEFAULT_ICON_SIZES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let theme = IconTheme::default();
        let on = theme.icons_for(RedirectState::Active);
        assert_eq!(on.len(), 2);
        assert_eq!(on.get(19), Some("images/icon-enabled-19.png"));
        assert_eq!(on.get(38), Some("images/icon-enabled-38.png"));

        let off = theme.icons_for(RedirectState::Inactive);
        assert_eq!(off.get(19), Some("images/icon-disabled-19.png"));
    }

    #[test]
    fn json_shape_uses_string_keys() {
        let json = serde_json::to_string(&IconTheme::default().icons_for(RedirectState::Inactive))
            .unwrap();
        assert_eq!(
            json,
            r#"{"19":"images/icon-disabled-19.png","38":"images/icon-disabled-38.png"}"#
        );
    }

    #[test]
    fn json_reads_back_and_rejects_bad_size() {
        let set = IconTheme::default().icons_for(RedirectState::Active);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(serde_json::from_str::<IconSet>(&json).unwrap(), set);
        assert!(serde_json::from_str::<IconSet>(r#"{"big":"x.png"}"#).is_err());
    }

    #[test]
    fn custom_directory_and_sizes() {
        let theme = IconTheme::new("assets/", [16, 32, 48]);
        let set = theme.icons_for(RedirectState::Active);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(48), Some("assets/icon-enabled-48.png"));
        assert_eq!(IconTheme::new("", [16]).path(RedirectState::Active, 16), "icon-enabled-16.png");
    }
}
