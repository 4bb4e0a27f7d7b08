//! Merged key/value table for one (library, language) pair

use std::collections::HashMap;

/// Result of overlaying every search path of a library for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a layer on top of the table; its entries replace existing ones.
    pub fn overlay(&mut self, layer: HashMap<String, String>) {
        self.entries.extend(layer);
    }

    /// Translation of `key`, if any layer defined it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no layer contributed any entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_overlay_later_layer_wins() {
        let mut table = TranslationTable::new();
        table.overlay(layer(&[("hello", "Bonjour"), ("bye", "Au revoir")]));
        table.overlay(layer(&[("hello", "Salut")]));

        assert_eq!(table.get("hello"), Some("Salut"));
        assert_eq!(table.get("bye"), Some("Au revoir"));
        assert_eq!(table.get("missing"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = TranslationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.keys().count(), 0);
    }
}
