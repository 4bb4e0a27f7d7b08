//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use strata_common::{Result as StrataResult, StrataError};
use strata_i18n::I18nError;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable pointing at the configuration file
pub const CONFIG_PATH_ENV: &str = "STRATA_CONFIG_PATH";

/// Files probed in the working directory when no path is given
const DEFAULT_CONFIG_FILES: [&str; 3] = ["strata.yaml", "strata.yml", "strata.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration format: '{0}'")]
    UnsupportedFormat(String),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Language code that cannot be used
    #[error("Invalid language '{value}': {source}")]
    InvalidLanguage {
        /// Configured value
        value: String,
        /// Why it was rejected
        #[source]
        source: StrataError,
    },

    /// The registry refused a configured path
    #[error("Invalid translation path: {0}")]
    InvalidPath(#[from] I18nError),
}

impl From<ConfigError> for StrataError {
    fn from(err: ConfigError) -> Self {
        StrataError::config(err.to_string())
    }
}

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        debug!("Loading configuration from {}", path.display());

        Self::load_str(&content, format)
    }

    /// Parse configuration text, then apply environment overrides and validate.
    pub fn load_str(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        let mut config: Config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> StrataResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Ok(Self::load_config(&config_path)?);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES
            .into_iter()
            .map(Path::new)
            .find(|path| path.exists())
        {
            return Ok(Self::load_config(path)?);
        }

        info!("No configuration file found, using defaults");
        Ok(Self::load_defaults()?)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StrataResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Default configuration with environment overrides
    pub fn load_defaults() -> Result<Config, ConfigError> {
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(language) = env::var("STRATA_LANG") {
            config.i18n.language = Some(language);
        }

        if let Ok(language) = env::var("STRATA_LANG_DEFAULT") {
            config.i18n.default_language = language;
        }

        if let Ok(auto_detect) = env::var("STRATA_AUTO_DETECT") {
            config.i18n.auto_detect = auto_detect.parse()
                .map_err(|e| ConfigError::EnvParseError {
                    var: "STRATA_AUTO_DETECT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(data_root) = env::var("STRATA_DATA_ROOT") {
            config.i18n.data_root = Some(data_root);
        }

        if let Ok(level) = env::var("STRATA_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("STRATA_LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}
