//! Translation lookup.
//!
//! Locale files are nested TOML tables. At startup each one is flattened into
//! a `dotted.key -> text` map so that lookups are a single hash probe. Every
//! language must define the same key set; [`Translator::new`] refuses to build
//! otherwise.

use crate::preferences::Language;
use std::collections::{BTreeSet, HashMap};

pub mod dictionary;

pub use dictionary::{builtin_sources, flatten_source};

/// Errors raised while building a [`Translator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    #[error("Failed to parse {language} translations: {message}")]
    Parse { language: Language, message: String },

    #[error("{language} translation '{key}' must be a string, found {kind}")]
    InvalidValue {
        language: Language,
        key: String,
        kind: &'static str,
    },

    #[error("No translations provided for {0}")]
    MissingLanguage(Language),

    #[error("{language} translations are incomplete, missing: {}", missing.join(", "))]
    IncompleteLanguage { language: Language, missing: Vec<String> },
}

/// Resolves dotted keys to display strings for each supported language.
#[derive(Debug, Clone)]
pub struct Translator {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Translator {
    /// Build a translator from raw locale sources.
    ///
    /// Every supported language must be present and every language must
    /// define every key any other language defines.
    pub fn new(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut tables = HashMap::new();
        for (language, source) in sources {
            tables.insert(*language, flatten_source(*language, source)?);
        }

        let translator = Self { tables };
        translator.check_complete()?;
        Ok(translator)
    }

    /// Translator over the locale files embedded in the binary.
    pub fn builtin() -> Result<Self, I18nError> {
        Self::new(&builtin_sources())
    }

    /// Resolve `key` for `language`, returning the key itself when no
    /// translation exists so that gaps stay visible.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map_or(key, String::as_str)
    }

    /// Resolve against a raw language code. Unsupported codes have no
    /// translations, so every key resolves to itself.
    #[must_use]
    pub fn resolve_code<'a>(&'a self, key: &'a str, code: &str) -> &'a str {
        match Language::parse(code) {
            Ok(language) => self.resolve(key, language),
            Err(_) => key,
        }
    }

    /// Whether `language` defines `key`.
    #[must_use]
    pub fn contains(&self, key: &str, language: Language) -> bool {
        self.tables.get(&language).is_some_and(|table| table.contains_key(key))
    }

    /// All keys, sorted. Identical for every language once constructed.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&Language::default())
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Number of keys defined for `language`.
    #[must_use]
    pub fn key_count(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, HashMap::len)
    }

    fn check_complete(&self) -> Result<(), I18nError> {
        let all_keys: BTreeSet<&str> = self
            .tables
            .values()
            .flat_map(|table| table.keys().map(String::as_str))
            .collect();

        for language in Language::ALL {
            let table = self.tables.get(&language).ok_or(I18nError::MissingLanguage(language))?;
            let missing: Vec<String> = all_keys
                .iter()
                .filter(|key| !table.contains_key(**key))
                .map(|key| (*key).to_string())
                .collect();

            if !missing.is_empty() {
                return Err(I18nError::IncompleteLanguage { language, missing });
            }
        }
        Ok(())
    }
}
