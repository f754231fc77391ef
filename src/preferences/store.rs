//! The preference store: theme and language, loaded at startup and written
//! back on every change.

use super::storage::{PreferenceStorage, StorageError};
use super::{Language, Theme};
use crate::constants::{STORAGE_KEY_LANGUAGE, STORAGE_KEY_THEME};

/// Holds the session's theme and language.
///
/// If the backing storage fails on any read or write, the store drops it and
/// keeps running on in-memory values for the rest of the session.
pub struct PreferenceStore {
    theme: Theme,
    language: Language,
    storage: Option<Box<dyn PreferenceStorage>>,
}

impl PreferenceStore {
    /// Initialise from `storage`, falling back to defaults for missing or
    /// unreadable values.
    pub fn new(storage: Box<dyn PreferenceStorage>) -> Self {
        let mut store = Self {
            theme: Theme::default(),
            language: Language::default(),
            storage: Some(storage),
        };

        if let Some(value) = store.load(STORAGE_KEY_THEME) {
            match value.parse::<Theme>() {
                Ok(theme) => store.theme = theme,
                Err(e) => log::warn!("Ignoring persisted theme: {e}"),
            }
        }

        if let Some(value) = store.load(STORAGE_KEY_LANGUAGE) {
            match Language::parse(&value) {
                Ok(language) => store.language = language,
                Err(e) => log::warn!("Ignoring persisted language: {e}"),
            }
        }

        log::info!(
            "Preferences loaded: theme={}, language={}, persistent={}",
            store.theme,
            store.language,
            store.is_persistent()
        );
        store
    }

    /// A store that never touches persistent storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            theme: Theme::default(),
            language: Language::default(),
            storage: None,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between dark and light and persist the result.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.persist(STORAGE_KEY_THEME, self.theme.as_str());
        self.theme
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Select a language by code. Unsupported codes fall back to the default
    /// language. Returns the language now in effect.
    pub fn set_language(&mut self, code: &str) -> Language {
        let language = Language::parse(code).unwrap_or_else(|e| {
            log::warn!("{e}, falling back to {}", Language::default());
            Language::default()
        });
        self.set_language_to(language)
    }

    pub fn set_language_to(&mut self, language: Language) -> Language {
        self.language = language;
        self.persist(STORAGE_KEY_LANGUAGE, language.code());
        language
    }

    /// Advance to the next supported language.
    pub fn cycle_language(&mut self) -> Language {
        self.set_language_to(self.language.next())
    }

    /// Whether changes are still being written to persistent storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    fn load(&mut self, key: &str) -> Option<String> {
        let result = self.storage.as_ref()?.load(key);
        match result {
            Ok(value) => value,
            // Unreadable contents are replaced by the next write
            Err(e @ StorageError::Malformed { .. }) => {
                log::warn!("Ignoring stored '{key}': {e}");
                None
            }
            Err(e) => {
                self.degrade(key, &e);
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        if let Err(e) = storage.save(key, value) {
            self.degrade(key, &e);
        }
    }

    fn degrade(&mut self, key: &str, error: &StorageError) {
        log::warn!("Preference storage failed for '{key}': {error}. Keeping preferences in memory for this session");
        self.storage = None;
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("theme", &self.theme)
            .field("language", &self.language)
            .field("persistent", &self.is_persistent())
            .finish()
    }
}
