//! Validation utilities and regex patterns

use once_cell::sync::Lazy;
use regex::Regex;
use strata_i18n::Uri;
use validator::ValidationError;

/// Regex pattern for language codes (e.g., EN, fr, ast)
pub static LANGUAGE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}$").expect("Invalid language code regex pattern")
});

/// Validate a translation path locator such as `DATA:translate` or `/opt/app/i18n`
pub fn validate_uri(uri: &str) -> Result<(), ValidationError> {
    if uri.trim().is_empty() {
        return Err(ValidationError::new("empty_uri"));
    }

    match Uri::parse(uri) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_uri")),
    }
}

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level.to_ascii_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}
