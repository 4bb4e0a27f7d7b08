//! Application configuration structures

use crate::loader::ConfigError;
use serde::{Deserialize, Serialize};
use strata_common::{LanguageCode, LogFormat, LoggingConfig};
use strata_i18n::resource::DATA_TAG;
use strata_i18n::{FsLocator, TranslationRegistry, Uri};
use tracing::debug;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Translation settings
    #[validate]
    pub i18n: I18nSettings,

    /// Logging settings
    #[validate]
    pub logging: LoggingSettings,
}

/// Translation registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct I18nSettings {
    /// Language consulted when the active one lacks a translation
    #[validate(regex(
        path = "crate::validation::LANGUAGE_CODE_REGEX",
        message = "Default language must be 2 or 3 letters"
    ))]
    pub default_language: String,

    /// Active language; unset means the default language is used directly
    #[validate(regex(
        path = "crate::validation::LANGUAGE_CODE_REGEX",
        message = "Language must be 2 or 3 letters"
    ))]
    pub language: Option<String>,

    /// Select the system language when `language` is unset
    pub auto_detect: bool,

    /// Directory behind `DATA:` locators
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Invalid data root path"
    ))]
    pub data_root: Option<String>,

    /// Search paths, in registration order
    #[validate]
    pub paths: Vec<PathSettings>,
}

/// One registered translation directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PathSettings {
    /// Library the path belongs to
    #[validate(length(min = 1, message = "Library name cannot be empty"))]
    pub library: String,

    /// Locator of the directory (`DATA:translate`, `/opt/app/i18n`, ...)
    #[validate(custom(
        function = "crate::validation::validate_uri",
        message = "Path locator cannot be empty"
    ))]
    pub uri: String,

    /// Whether the path overrides every minor path of the library
    #[serde(default)]
    pub major: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error"
    ))]
    pub level: String,

    /// Optional log file path
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Invalid log file path"
    ))]
    pub file: Option<String>,

    /// Output format
    pub format: LogFormat,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::english().to_string(),
            language: None,
            auto_detect: false,
            data_root: None,
            paths: Vec::new(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Build a translation registry from the `i18n` section.
    pub fn build_registry(&self) -> Result<TranslationRegistry, ConfigError> {
        self.i18n.build_registry()
    }

    /// Seed an existing registry with the `i18n` section.
    pub fn apply_to(&self, registry: &mut TranslationRegistry) -> Result<(), ConfigError> {
        self.i18n.apply_to(registry)
    }
}

impl I18nSettings {
    /// Build a registry reading files from disk, honoring `data_root`.
    pub fn build_registry(&self) -> Result<TranslationRegistry, ConfigError> {
        let mut locator = FsLocator::from_env();
        if let Some(root) = &self.data_root {
            locator = locator.with_root(DATA_TAG, root);
        }

        let mut registry = TranslationRegistry::new().with_locator(locator);
        self.apply_to(&mut registry)?;
        Ok(registry)
    }

    /// Apply languages and search paths to `registry`.
    ///
    /// Paths are added in list order, so later entries take precedence over
    /// earlier ones of the same class.
    pub fn apply_to(&self, registry: &mut TranslationRegistry) -> Result<(), ConfigError> {
        registry.set_language_default(parse_language(&self.default_language)?);

        for path in &self.paths {
            let uri = Uri::parse(&path.uri)?;
            registry.add_path(&path.library, uri, path.major)?;
        }

        match &self.language {
            Some(language) => registry.set_language(parse_language(language)?),
            None if self.auto_detect => {
                if let Some(language) = registry.auto_detect_language() {
                    debug!("Detected language {}", language);
                }
            }
            None => {}
        }

        Ok(())
    }
}

impl LoggingSettings {
    /// Convert to the logging setup understood by `strata_common::init_logging`
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.to_ascii_lowercase(),
            format: self.format,
            file_path: self.file.clone(),
            ..LoggingConfig::default()
        }
    }
}

fn parse_language(value: &str) -> Result<LanguageCode, ConfigError> {
    LanguageCode::new(value).map_err(|source| ConfigError::InvalidLanguage {
        value: value.to_string(),
        source,
    })
}
