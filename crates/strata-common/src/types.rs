//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::{Result, StrataError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A short language code naming a translation file, such as `EN`, `FR` or `ZH`.
///
/// Codes are 2 or 3 ASCII letters and are stored upper case, so `"fr"` and
/// `"FR"` name the same language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// English, the baseline language when nothing else is configured.
    pub fn english() -> Self {
        Self("EN".to_string())
    }

    /// Validate and normalize a language code.
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if !(2..=3).contains(&code.len()) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(StrataError::validation_field(
                format!("Invalid language code '{code}': expected 2 or 3 ASCII letters"),
                "language",
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Extract the language from a system locale string.
    ///
    /// Accepts POSIX forms (`fr_FR.UTF-8`, `de_DE@euro`) and BCP 47 tags
    /// (`pt-BR`). Returns `None` for `C`, `POSIX` and anything unparsable.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let tag = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-");
        let langid: LanguageIdentifier = tag.parse().ok()?;
        let language = langid.language.as_str();
        if language == "und" {
            return None;
        }
        Self::new(language).ok()
    }

    /// The normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = StrataError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
