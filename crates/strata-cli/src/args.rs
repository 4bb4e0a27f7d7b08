//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use strata_i18n::{LanguageCode, Uri};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "strata", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (YAML or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configuration
    #[arg(long)]
    pub log_level: Option<String>,

    /// Active language
    #[arg(short, long)]
    pub lang: Option<LanguageCode>,

    /// Fallback language
    #[arg(long)]
    pub default_lang: Option<LanguageCode>,

    /// Minor translation path, repeatable
    #[arg(long = "path", value_name = "LIBRARY=URI")]
    pub paths: Vec<PathSpec>,

    /// Major translation path, repeatable
    #[arg(long = "major", value_name = "LIBRARY=URI")]
    pub majors: Vec<PathSpec>,

    /// Directory behind `DATA:` locators
    #[arg(long)]
    pub data_root: Option<PathBuf>,

    /// Use the system language when no language is given
    #[arg(long)]
    pub auto_detect: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to print
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Translate keys, one result per line
    Get {
        /// Only search this library
        #[arg(long)]
        library: Option<String>,

        /// Keys to translate
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// List the search paths of a library, highest precedence first
    Paths {
        /// Library name
        library: String,
    },
    /// List languages with at least one translation file
    Languages,
}

/// `LIBRARY=URI` pair from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    /// Library name
    pub library: String,
    /// Translation directory locator
    pub uri: Uri,
}

impl FromStr for PathSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (library, uri) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LIBRARY=URI, got '{s}'"))?;

        let library = library.trim();
        if library.is_empty() {
            return Err("library name cannot be empty".to_string());
        }

        let uri = Uri::parse(uri).map_err(|e| e.to_string())?;
        Ok(Self {
            library: library.to_string(),
            uri,
        })
    }
}
