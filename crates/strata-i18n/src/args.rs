//! Process arguments understood by [`init`](crate::init)

use crate::registry::TranslationRegistry;
use crate::resource::{FsLocator, DATA_TAG};
use std::path::PathBuf;
use strata_common::LanguageCode;
use tracing::{info, warn};

const LANG_ARG: &str = "--strata-lang=";
const LANG_DEFAULT_ARG: &str = "--strata-lang-default=";
const DATA_ROOT_ARG: &str = "--strata-data-root=";
const HELP_ARG: &str = "--strata-help";

/// Registry settings picked out of the process arguments.
///
/// Arguments without the `--strata-` prefix belong to the application and are
/// ignored, so the full `argv` can be handed over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// `--strata-lang=XX`
    pub language: Option<LanguageCode>,
    /// `--strata-lang-default=XX`
    pub language_default: Option<LanguageCode>,
    /// `--strata-data-root=DIR`
    pub data_root: Option<PathBuf>,
    /// `--strata-help`
    pub show_help: bool,
}

impl InitOptions {
    /// Scan `args` for `--strata-*` options.
    ///
    /// Malformed values are logged and ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();

        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix(LANG_ARG) {
                options.language = parse_language(LANG_ARG, value);
            } else if let Some(value) = arg.strip_prefix(LANG_DEFAULT_ARG) {
                options.language_default = parse_language(LANG_DEFAULT_ARG, value);
            } else if let Some(value) = arg.strip_prefix(DATA_ROOT_ARG) {
                options.data_root = Some(PathBuf::from(value));
            } else if arg == HELP_ARG {
                options.show_help = true;
            } else if arg.starts_with("--strata-") {
                warn!("Unknown option '{}'", arg);
            }
        }

        options
    }

    /// Build a registry honoring these options.
    pub fn into_registry(self) -> TranslationRegistry {
        if self.show_help {
            for line in Self::usage().lines() {
                info!("{}", line);
            }
        }

        let mut locator = FsLocator::from_env();
        if let Some(root) = self.data_root {
            locator = locator.with_root(DATA_TAG, root);
        }

        let mut registry = TranslationRegistry::new().with_locator(locator);
        if let Some(language) = self.language_default {
            registry.set_language_default(language);
        }
        if let Some(language) = self.language {
            registry.set_language(language);
        }
        registry
    }

    /// Help text for the recognized options
    pub fn usage() -> &'static str {
        "Translation options:\n\
         \x20 --strata-lang=XX          select the language (EN, FR, DE, ...)\n\
         \x20 --strata-lang-default=XX  language used when a translation is missing\n\
         \x20 --strata-data-root=DIR    directory behind DATA: locators\n\
         \x20 --strata-help             print this help"
    }
}

fn parse_language(option: &str, value: &str) -> Option<LanguageCode> {
    match LanguageCode::new(value) {
        Ok(language) => Some(language),
        Err(e) => {
            warn!("Ignoring {}{}: {}", option, value, e);
            None
        }
    }
}
