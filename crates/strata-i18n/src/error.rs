//! Error types for internationalization operations

use strata_common::StrataError;
use thiserror::Error;

/// Errors that can occur while registering paths or loading translation files.
///
/// Lookups never produce these: a missing translation is answered with the
/// key itself.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A library name was empty
    #[error("Library name cannot be empty")]
    EmptyLibraryName,

    /// A resource locator string could not be parsed
    #[error("Invalid resource URI '{uri}': {reason}")]
    InvalidUri {
        /// The rejected input
        uri: String,
        /// Why it was rejected
        reason: String,
    },

    /// A tagged URI used a tag with no root directory
    #[error("No root directory registered for URI tag '{tag}'")]
    UnknownTag {
        /// The unmapped tag
        tag: String,
    },

    /// Failed to read a resource file or directory
    #[error("Failed to read resource: {path}")]
    ResourceRead {
        /// File or directory that failed
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Translation file bytes are not UTF-8
    #[error("Translation file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Failed to parse a JSON translation file
    #[error("Failed to parse JSON translation file: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// Failed to parse a Fluent translation file
    #[error("Failed to parse Fluent resource: {errors:?}")]
    FluentParseError {
        /// One entry per parser error
        errors: Vec<String>,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for StrataError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::JsonParseError(_)
            | I18nError::FluentParseError { .. }
            | I18nError::InvalidUtf8(_) => StrataError::parse_with_source("Translation file", err),
            other => StrataError::Localization {
                message: other.to_string(),
                language: None,
                source: Some(Box::new(other)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            I18nError::EmptyLibraryName.to_string(),
            "Library name cannot be empty"
        );
        assert_eq!(
            I18nError::UnknownTag { tag: "HOME".into() }.to_string(),
            "No root directory registered for URI tag 'HOME'"
        );
    }

    #[test]
    fn test_conversion_to_strata_error() {
        let err: StrataError = I18nError::EmptyLibraryName.into();
        assert!(matches!(err, StrataError::Localization { .. }));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StrataError = I18nError::from(json_err).into();
        assert!(matches!(err, StrataError::Parse { .. }));
    }
}
