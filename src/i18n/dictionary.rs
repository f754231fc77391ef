//! Embedded locale sources and flattening of nested tables into dotted keys.

use super::I18nError;
use crate::preferences::Language;
use std::collections::HashMap;

const EN: &str = include_str!("../../locales/en.toml");
const FR: &str = include_str!("../../locales/fr.toml");
const ES: &str = include_str!("../../locales/es.toml");

/// Raw TOML source for each supported language.
#[must_use]
pub fn builtin_sources() -> [(Language, &'static str); 3] {
    [(Language::En, EN), (Language::Fr, FR), (Language::Es, ES)]
}

/// Parse one locale document and flatten it to `section.key -> text`.
pub fn flatten_source(language: Language, source: &str) -> Result<HashMap<String, String>, I18nError> {
    let table: toml::Table = source.parse().map_err(|e: toml::de::Error| I18nError::Parse {
        language,
        message: e.to_string(),
    })?;

    let mut entries = HashMap::new();
    flatten_table(language, "", &table, &mut entries)?;
    Ok(entries)
}

fn flatten_table(
    language: Language,
    prefix: &str,
    table: &toml::Table,
    entries: &mut HashMap<String, String>,
) -> Result<(), I18nError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            toml::Value::Table(nested) => flatten_table(language, &key, nested, entries)?,
            toml::Value::String(text) => {
                entries.insert(key, text.clone());
            }
            other => {
                return Err(I18nError::InvalidValue {
                    language,
                    key,
                    kind: other.type_str(),
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_tables() {
        let source = r#"
[nav]
home = "Home"

[projects.filters]
all = "All"
"#;
        let entries = flatten_source(Language::En, source).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.get("nav.home").map(String::as_str), Some("Home"));
        assert_eq!(entries.get("projects.filters.all").map(String::as_str), Some("All"));
    }

    #[test]
    fn test_flatten_rejects_non_string_leaf() {
        let err = flatten_source(Language::Fr, "[hero]\nstats1 = 80\n").unwrap_err();
        match err {
            I18nError::InvalidValue { language, key, kind } => {
                assert_eq!(language, Language::Fr);
                assert_eq!(key, "hero.stats1");
                assert_eq!(kind, "integer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flatten_reports_parse_errors() {
        let err = flatten_source(Language::Es, "[nav\nhome = ").unwrap_err();
        assert!(matches!(err, I18nError::Parse { language: Language::Es, .. }));
    }

    #[test]
    fn test_builtin_sources_cover_every_language() {
        let languages: Vec<Language> = builtin_sources().iter().map(|(l, _)| *l).collect();
        assert_eq!(languages, Language::ALL.to_vec());
    }
}
