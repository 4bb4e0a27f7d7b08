//! Decoders turning one translation file into key/value pairs

use crate::error::{I18nError, I18nResult};
use fluent_syntax::ast;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Decodes the bytes of one language file.
pub trait TableParser: Send + Sync + fmt::Debug {
    /// File extension (without the dot) of the files this parser reads.
    fn extension(&self) -> &str;

    /// Decode a whole file into source string → translated string pairs.
    fn parse(&self, bytes: &[u8]) -> I18nResult<HashMap<String, String>>;
}

/// Flat JSON object files: `{ "Open": "Ouvrir", "Close": "Fermer" }`
///
/// Entries whose value is not a string are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl TableParser for JsonParser {
    fn extension(&self) -> &str {
        "json"
    }

    fn parse(&self, bytes: &[u8]) -> I18nResult<HashMap<String, String>> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;

        let mut entries = HashMap::with_capacity(document.len());
        for (key, value) in document {
            match value {
                serde_json::Value::String(text) => {
                    entries.insert(key, text);
                }
                other => debug!("Skipping non-string translation for '{}': {}", key, other),
            }
        }
        Ok(entries)
    }
}

/// Fluent (`.ftl`) files holding plain-text messages: `open-file = Ouvrir le fichier`
///
/// Messages with placeables, and terms, are ignored since the registry only
/// substitutes whole strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluentParser;

impl TableParser for FluentParser {
    fn extension(&self) -> &str {
        "ftl"
    }

    fn parse(&self, bytes: &[u8]) -> I18nResult<HashMap<String, String>> {
        let source = std::str::from_utf8(bytes)?;
        let resource = fluent_syntax::parser::parse(source).map_err(|(_, errors)| {
            I18nError::FluentParseError {
                errors: errors.into_iter().map(|e| format!("{e:?}")).collect(),
            }
        })?;

        let mut entries = HashMap::new();
        for entry in resource.body {
            let ast::Entry::Message(message) = entry else {
                continue;
            };
            let Some(pattern) = message.value else {
                continue;
            };
            match plain_text(&pattern) {
                Some(text) => {
                    entries.insert(message.id.name.to_string(), text);
                }
                None => debug!(
                    "Skipping Fluent message '{}' with placeables",
                    message.id.name
                ),
            }
        }
        Ok(entries)
    }
}

fn plain_text(pattern: &ast::Pattern<&str>) -> Option<String> {
    let mut text = String::new();
    for element in &pattern.elements {
        match element {
            ast::PatternElement::TextElement { value } => text.push_str(value),
            ast::PatternElement::Placeable { .. } => return None,
        }
    }
    Some(text)
}
