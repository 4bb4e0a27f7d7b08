//! System language detection

use std::fmt;
use strata_common::LanguageCode;
use tracing::debug;

/// Environment variables consulted, in order, when the OS query gives nothing usable
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Source of the user's preferred language.
pub trait LanguageDetector: Send + Sync + fmt::Debug {
    /// Preferred language, or `None` when it cannot be determined.
    fn detect(&self) -> Option<LanguageCode>;
}

/// Asks the operating system, then the POSIX locale variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguageDetector;

impl LanguageDetector for SystemLanguageDetector {
    fn detect(&self) -> Option<LanguageCode> {
        if let Some(locale) = sys_locale::get_locale() {
            if let Some(code) = LanguageCode::from_locale(&locale) {
                debug!("Detected language {} from system locale '{}'", code, locale);
                return Some(code);
            }
            debug!("System locale '{}' does not name a language", locale);
        }

        LOCALE_ENV_VARS.iter().find_map(|var| {
            let value = std::env::var(var).ok()?;
            let code = LanguageCode::from_locale(&value)?;
            debug!("Detected language {} from {}='{}'", code, var, value);
            Some(code)
        })
    }
}

/// Always answers the same thing
#[derive(Debug, Clone, Default)]
pub struct FixedLanguageDetector(pub Option<LanguageCode>);

impl LanguageDetector for FixedLanguageDetector {
    fn detect(&self) -> Option<LanguageCode> {
        self.0.clone()
    }
}
