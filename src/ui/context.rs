use crate::i18n::Translator;
use crate::preferences::{Language, PreferenceStore, Theme};

/// Services shared by every part of the UI, built once at startup and passed
/// down explicitly.
#[derive(Debug)]
pub struct SiteContext {
    pub preferences: PreferenceStore,
    pub translator: Translator,
}

impl SiteContext {
    pub fn new(preferences: PreferenceStore, translator: Translator) -> Self {
        Self {
            preferences,
            translator,
        }
    }

    /// Translate `key` into the active language.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translator.resolve(key, self.preferences.language())
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.preferences.theme()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.preferences.language()
    }
}
