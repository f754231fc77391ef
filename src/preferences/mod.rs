//! User preferences: display theme and UI language.
//!
//! Both preferences are plain enumerations persisted as their literal string
//! values (`"dark"`, `"light"`, `"en"`, `"fr"`, `"es"`) through a
//! [`PreferenceStorage`] adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, PreferenceStorage, StorageError};
pub use store::PreferenceStore;

/// Returned when a persisted or requested value is not one of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("Unsupported theme: {0}")]
    UnsupportedTheme(String),

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),
}

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Translation key for the theme's display name
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Dark => "ui.theme_dark",
            Self::Light => "ui.theme_light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(PreferenceError::UnsupportedTheme(other.to_string())),
        }
    }
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
}

impl Language {
    /// Supported languages in selector order.
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Es];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
        }
    }

    /// Next language in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Parse one of the literal codes `en`, `fr` or `es`. Anything else,
    /// including region variants such as `fr-FR`, is unsupported.
    pub fn parse(code: &str) -> Result<Self, PreferenceError> {
        match code {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "es" => Ok(Self::Es),
            _ => Err(PreferenceError::UnsupportedLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_language_accepts_only_literal_codes() {
        assert_eq!(Language::parse("fr").unwrap(), Language::Fr);
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        for code in ["fr-FR", "es_ES", "en-US", " EN ", "Fr", ""] {
            assert!(Language::parse(code).is_err(), "{code:?} should be unsupported");
        }
        assert_eq!(
            Language::parse("de"),
            Err(PreferenceError::UnsupportedLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_language_cycle_wraps() {
        assert_eq!(Language::En.next(), Language::Fr);
        assert_eq!(Language::Fr.next(), Language::Es);
        assert_eq!(Language::Es.next(), Language::En);
    }
}
