//! NEXUS Global - a terminal rendition of the NEXUS Global showcase site
//!
//! This library holds the site's logic and content: persisted theme and
//! language preferences, translation lookup, static content catalogs with
//! category filtering, the contact form, and the Ratatui interface that
//! presents them.
//!
//! # Modules
//!
//! * [`catalog`] - Static content and category filtering
//! * [`config`] - Application configuration management
//! * [`contact`] - Contact form model and validation
//! * [`i18n`] - Translation dictionaries and key resolution
//! * [`preferences`] - Theme and language preferences with pluggable persistence
//! * [`ui`] - Terminal user interface components

/// Static content catalogs and the category filter
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Contact form state and validation
pub mod contact;

/// Translation lookup with build-checked dictionaries
pub mod i18n;

/// File logging setup
pub mod logger;

/// Theme and language preferences
pub mod preferences;

/// Navigable page sections
pub mod sections;

/// Terminal user interface components and rendering
pub mod ui;

pub use preferences::{Language, Theme};
pub use sections::Section;
