use nexus_site::i18n::{I18nError, Translator};
use nexus_site::preferences::Language;

const EN: &str = r#"
[hero]
title = "Transforming Industries"
subtitle = "Enterprise solutions"

[nav]
home = "Home"
"#;

const FR: &str = r#"
[hero]
title = "Transformer les industries"
subtitle = "Solutions d'entreprise"

[nav]
home = "Accueil"
"#;

const ES: &str = r#"
[hero]
title = "Transformando industrias"
subtitle = "Soluciones empresariales"

[nav]
home = "Inicio"
"#;

#[test]
fn test_every_builtin_key_resolves_in_every_language() {
    let translator = Translator::builtin().unwrap();
    let keys = translator.keys();
    assert!(!keys.is_empty());

    for language in Language::ALL {
        assert_eq!(translator.key_count(language), keys.len());
        for key in &keys {
            let value = translator.resolve(key, language);
            assert!(!value.is_empty(), "{key} is empty in {language}");
            assert_ne!(value, *key, "{key} is untranslated in {language}");
        }
    }
}

#[test]
fn test_builtin_translations_differ_by_language() {
    let translator = Translator::builtin().unwrap();
    assert_ne!(
        translator.resolve("nav.home", Language::En),
        translator.resolve("nav.home", Language::Fr)
    );
    assert_eq!(translator.resolve("nav.home", Language::En), "Home");
}

#[test]
fn test_resolve_nested_key() {
    let translator = Translator::new(&[(Language::En, EN), (Language::Fr, FR), (Language::Es, ES)]).unwrap();
    assert_eq!(translator.resolve("hero.title", Language::En), "Transforming Industries");
    assert_eq!(translator.resolve("hero.title", Language::Fr), "Transformer les industries");
    assert_eq!(translator.resolve("nav.home", Language::Es), "Inicio");
}

#[test]
fn test_missing_key_returns_key() {
    let translator = Translator::new(&[(Language::En, EN), (Language::Fr, FR), (Language::Es, ES)]).unwrap();
    assert_eq!(translator.resolve("hero.missing", Language::En), "hero.missing");
    assert_eq!(translator.resolve("nonexistent.key", Language::Fr), "nonexistent.key");
    // A table path is not a leaf
    assert_eq!(translator.resolve("hero", Language::En), "hero");
    assert!(!translator.contains("hero", Language::En));
}

#[test]
fn test_unsupported_code_returns_key() {
    let translator = Translator::new(&[(Language::En, EN), (Language::Fr, FR), (Language::Es, ES)]).unwrap();
    assert_eq!(translator.resolve_code("hero.title", "xx"), "hero.title");
    assert_eq!(translator.resolve_code("hero.title", "fr"), "Transformer les industries");
    assert_eq!(translator.resolve_code("hero.title", "fr-CA"), "hero.title");
    assert_eq!(translator.resolve_code("hero.title", "ES"), "hero.title");
}

#[test]
fn test_incomplete_language_names_missing_key() {
    let incomplete_fr = r#"
[hero]
title = "Transformer les industries"

[nav]
home = "Accueil"
"#;

    let err = Translator::new(&[(Language::En, EN), (Language::Fr, incomplete_fr), (Language::Es, ES)]).unwrap_err();
    match &err {
        I18nError::IncompleteLanguage { language, missing } => {
            assert_eq!(*language, Language::Fr);
            assert_eq!(missing, &vec!["hero.subtitle".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("hero.subtitle"));
}

#[test]
fn test_missing_language_is_rejected() {
    let err = Translator::new(&[(Language::En, EN), (Language::Fr, FR)]).unwrap_err();
    assert!(matches!(err, I18nError::MissingLanguage(Language::Es)));
}

#[test]
fn test_invalid_toml_is_rejected() {
    let err = Translator::new(&[(Language::En, "[hero"), (Language::Fr, FR), (Language::Es, ES)]).unwrap_err();
    assert!(matches!(err, I18nError::Parse { language: Language::En, .. }));
}
