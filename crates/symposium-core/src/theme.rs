//! Theme preference.
//!
//! Read once at page load from the `theme` key and applied as the document's
//! `data-theme` attribute. There is no runtime toggle.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the saved theme, defaulting to light.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.get_item(THEME_KEY) {
        None => Theme::default(),
        Some(value) => Theme::parse(&value).unwrap_or_else(|| {
            log::warn!("Ignoring unknown theme {:?}", value);
            Theme::default()
        }),
    }
}
