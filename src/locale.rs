//! Supported display locales.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A display-language tag selected for the session.
///
/// The set is closed: the application ships English and Japanese catalogs
/// only, so unsupported tags are unrepresentable past the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

/// Error for tags that do not normalize to a supported locale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported locale tag '{tag}' (supported: en, ja)")]
pub struct UnsupportedLocale {
    /// The tag as it appeared in the input.
    pub tag: String,
}

impl Locale {
    /// All supported locales, in catalog order.
    pub const ALL: [Self; 2] = [Self::En, Self::Ja];

    /// Canonical lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    /// Display name in the locale's own script, as shown by the language
    /// toggle in the UI.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ja => "日本語",
        }
    }

    /// Parse a tag leniently: case-insensitive, `-`/`_` region suffixes
    /// collapse onto the base language (`en-US` → `En`, `ja_JP` → `Ja`).
    ///
    /// Returns `None` for tags outside the supported set.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.to_lowercase().replace('-', "_");
        let base = normalized.split('_').next().unwrap_or(&normalized);
        match base {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnsupportedLocale { tag: s.to_string() })
    }
}
