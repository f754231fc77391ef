//! Constants used throughout the application
//!
//! This module centralizes storage keys, file names, UI text that is not
//! translated, and layout limits.

// Preference storage keys
pub const STORAGE_KEY_THEME: &str = "theme";
pub const STORAGE_KEY_LANGUAGE: &str = "language";

// File locations
pub const APP_DIR_NAME: &str = "nexus";
pub const LOCAL_CONFIG_FILE: &str = "nexus.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const LOG_FILE_NAME: &str = "nexus.log";

// Branding
pub const BRAND_NAME: &str = "NEXUS";
pub const BRAND_TAGLINE: &str = "GLOBAL SOLUTIONS";
pub const COPYRIGHT_HOLDER: &str = "NEXUS Global";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOCALES_OK: &str = "✅ Translation dictionaries are complete";
pub const ERROR_LOCALES_INCOMPLETE: &str = "❌ Translation dictionaries are incomplete";
pub const STATUS_HINTS: &str = "j/k: sections • t: theme • l: language • f/F: filter • ?: help • q: quit";
pub const STATUS_HINTS_CONTACT: &str = "Tab: next field • Enter: send • Esc: leave form • ←/→: industry";
pub const DIALOG_DISMISS_HINT: &str = "Press Esc or Enter to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Event poll interval for the UI loop
pub const UI_POLL_INTERVAL_MS: u64 = 100;
