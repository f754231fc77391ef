use nexus_site::config::{Config, StorageKind};
use nexus_site::sections::Section;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.sidebar_width, 24);
    assert_eq!(config.ui.start_section, "home");
    assert_eq!(config.preferences.storage, StorageKind::File);
    assert!(config.preferences.path.is_none());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test an unknown start section
    config.ui.sidebar_width = 30;
    config.ui.start_section = "pricing".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.ui.start_section = "careers".to_string();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_start_section_accepts_anchor_form() {
    let mut config = Config::default();
    config.ui.start_section = "#projects".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.start_section(), Section::Projects);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("start_section = \"home\""));
    assert!(toml_str.contains("storage = \"file\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35

[preferences]
storage = "memory"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.sidebar_width, 35);
    assert_eq!(config.preferences.storage, StorageKind::Memory);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.ui.start_section, "home");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.start_section, default_config.ui.start_section);
    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.preferences.storage, default_config.preferences.storage);
}

#[test]
fn test_preferences_path_override() {
    let mut config = Config::default();
    config.preferences.path = Some(PathBuf::from("/tmp/nexus-prefs.json"));
    assert_eq!(config.preferences_path().unwrap(), PathBuf::from("/tmp/nexus-prefs.json"));
}

#[test]
fn test_load_from_file_reports_invalid_values() {
    let dir = std::env::temp_dir().join("nexus_test_invalid_config");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[ui]\nstart_section = \"pricing\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("start_section"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("nexus_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# NEXUS Showcase Configuration File"));
    assert!(content.contains("start_section = \"home\""));

    // The generated file loads back cleanly
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.sidebar_width, Config::default().ui.sidebar_width);

    let _ = fs::remove_dir_all(&temp_dir);
}
