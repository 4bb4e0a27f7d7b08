//! Configuration management for Strata
//!
//! A [`Config`] is read from a YAML or TOML file, patched from `STRATA_*`
//! environment variables and validated before use. [`Config::build_registry`]
//! turns the `i18n` section into a ready [`strata_i18n::TranslationRegistry`].

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigFormat, ConfigLoader};
pub use settings::{Config, I18nSettings, LoggingSettings, PathSettings};
