//! Translation registry: search paths per library, language selection and lookup

use crate::detect::{LanguageDetector, SystemLanguageDetector};
use crate::error::{I18nError, I18nResult};
use crate::parser::{JsonParser, TableParser};
use crate::resource::{FsLocator, ResourceLocator};
use crate::table::TranslationTable;
use crate::uri::Uri;
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use strata_common::LanguageCode;
use tracing::{debug, info, warn};

/// One registered translation directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    /// Where the language files live
    pub uri: Uri,
    /// Major paths override every non-major path of the library
    pub major: bool,
}

#[derive(Debug)]
struct Library {
    name: String,
    /// Highest precedence first: newest major .. oldest major, newest minor .. oldest minor
    paths: Vec<SearchPath>,
}

impl Library {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            paths: Vec::new(),
        }
    }

    fn push(&mut self, uri: Uri, major: bool) {
        let position = if major {
            0
        } else {
            self.paths.iter().take_while(|path| path.major).count()
        };
        self.paths.insert(position, SearchPath { uri, major });
    }
}

type TableCache = HashMap<String, HashMap<LanguageCode, Arc<TranslationTable>>>;

/// Owns the search paths of every library, the language selection and the
/// table cache.
///
/// Tables are built on first use for a (library, language) pair and cached
/// until a path is added to that library. Lookups take `&self`; the cache is
/// behind its own lock.
#[derive(Debug)]
pub struct TranslationRegistry {
    /// Registration order
    libraries: Vec<Library>,
    language: Option<LanguageCode>,
    language_default: LanguageCode,
    locator: Arc<dyn ResourceLocator>,
    parser: Arc<dyn TableParser>,
    detector: Arc<dyn LanguageDetector>,
    cache: Mutex<TableCache>,
}

impl TranslationRegistry {
    /// Registry reading JSON files from the filesystem, detecting the system language.
    pub fn new() -> Self {
        Self {
            libraries: Vec::new(),
            language: None,
            language_default: LanguageCode::english(),
            locator: Arc::new(FsLocator::from_env()),
            parser: Arc::new(JsonParser),
            detector: Arc::new(SystemLanguageDetector),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the resource locator.
    pub fn with_locator(mut self, locator: impl ResourceLocator + 'static) -> Self {
        self.locator = Arc::new(locator);
        self.cache.get_mut().clear();
        self
    }

    /// Replace the file parser.
    pub fn with_parser(mut self, parser: impl TableParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self.cache.get_mut().clear();
        self
    }

    /// Replace the language detector used by [`auto_detect_language`](Self::auto_detect_language).
    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Arc::new(detector);
        self
    }

    /// Register a translation directory for `library`.
    ///
    /// The location is not checked; missing files are skipped at lookup time.
    /// Registering the same location twice adds a second layer.
    pub fn add_path(&mut self, library: &str, uri: Uri, major: bool) -> I18nResult<()> {
        if library.is_empty() {
            return Err(I18nError::EmptyLibraryName);
        }

        info!(
            "Adding {} translation path for '{}': {}",
            if major { "major" } else { "minor" },
            library,
            uri
        );

        match self.libraries.iter_mut().find(|lib| lib.name == library) {
            Some(lib) => lib.push(uri, major),
            None => {
                let mut lib = Library::new(library);
                lib.push(uri, major);
                self.libraries.push(lib);
            }
        }

        self.cache.get_mut().remove(library);
        Ok(())
    }

    /// Search paths of `library`, highest precedence first.
    ///
    /// Unknown libraries have no paths.
    pub fn paths(&self, library: &str) -> &[SearchPath] {
        self.libraries
            .iter()
            .find(|lib| lib.name == library)
            .map(|lib| lib.paths.as_slice())
            .unwrap_or(&[])
    }

    /// Names of the registered libraries, in registration order
    pub fn libraries(&self) -> impl Iterator<Item = &str> {
        self.libraries.iter().map(|lib| lib.name.as_str())
    }

    /// Set the baseline language, consulted when the active language has no translation.
    pub fn set_language_default(&mut self, language: LanguageCode) {
        if self.language_default != language {
            info!("Default language set to {}", language);
            self.language_default = language;
        }
    }

    /// The baseline language (`EN` unless changed)
    pub fn language_default(&self) -> &LanguageCode {
        &self.language_default
    }

    /// Set the active language for all libraries.
    pub fn set_language(&mut self, language: LanguageCode) {
        if self.language.as_ref() == Some(&language) {
            return;
        }
        info!("Language set to {}", language);
        self.language = Some(language);
    }

    /// The language explicitly selected, if any
    pub fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }

    /// The language lookups start with: the active one, or the default when none was set
    pub fn effective_language(&self) -> &LanguageCode {
        self.language.as_ref().unwrap_or(&self.language_default)
    }

    /// Select the language reported by the detector.
    ///
    /// When nothing is detected the current selection is kept. Returns the
    /// detected language.
    pub fn auto_detect_language(&mut self) -> Option<LanguageCode> {
        match self.detector.detect() {
            Some(language) => {
                self.set_language(language.clone());
                Some(language)
            }
            None => {
                warn!("Could not detect the system language, keeping {}", self.effective_language());
                None
            }
        }
    }

    /// Translate `key`, or return it unchanged when no table defines it.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// Translate `key` using only the tables of `library`.
    pub fn get_in(&self, library: &str, key: &str) -> String {
        self.lookup_in(library, key)
            .unwrap_or_else(|| key.to_string())
    }

    /// Translation of `key`, or `None` when neither the active nor the default
    /// language defines it.
    ///
    /// The most recently registered library is consulted first.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.lookup_with(self.libraries.iter().rev(), key)
    }

    /// Like [`lookup`](Self::lookup), restricted to `library`.
    pub fn lookup_in(&self, library: &str, key: &str) -> Option<String> {
        self.lookup_with(self.libraries.iter().filter(|lib| lib.name == library), key)
    }

    fn lookup_with<'a, I>(&self, libraries: I, key: &str) -> Option<String>
    where
        I: Iterator<Item = &'a Library> + Clone,
    {
        let find = |language: &LanguageCode| {
            libraries
                .clone()
                .find_map(|lib| self.table_for(lib, language).get(key).map(str::to_string))
        };

        let active = self.effective_language();
        find(active).or_else(|| {
            if active == &self.language_default {
                None
            } else {
                find(&self.language_default)
            }
        })
    }

    /// Merged table of `library` for `language`, built on first use.
    ///
    /// Unknown libraries give an empty table.
    pub fn table(&self, library: &str, language: &LanguageCode) -> Arc<TranslationTable> {
        match self.libraries.iter().find(|lib| lib.name == library) {
            Some(lib) => self.table_for(lib, language),
            None => Arc::new(TranslationTable::new()),
        }
    }

    fn table_for(&self, library: &Library, language: &LanguageCode) -> Arc<TranslationTable> {
        let mut cache = self.cache.lock();
        if let Some(table) = cache
            .get(library.name.as_str())
            .and_then(|tables| tables.get(language))
        {
            return Arc::clone(table);
        }

        let table = Arc::new(self.build_table(library, language));
        cache
            .entry(library.name.clone())
            .or_default()
            .insert(language.clone(), Arc::clone(&table));
        table
    }

    fn build_table(&self, library: &Library, language: &LanguageCode) -> TranslationTable {
        let file_name = self.file_name(language);
        let mut table = TranslationTable::new();

        // Lowest precedence first so that higher layers overwrite.
        for path in library.paths.iter().rev() {
            match self.locator.read(&path.uri, &file_name) {
                Ok(Some(bytes)) => match self.parser.parse(&bytes) {
                    Ok(entries) => {
                        debug!(
                            "Loaded {} entries from {}/{} for '{}'",
                            entries.len(),
                            path.uri,
                            file_name,
                            library.name
                        );
                        table.overlay(entries);
                    }
                    Err(e) => warn!("Ignoring {}/{}: {}", path.uri, file_name, e),
                },
                Ok(None) => debug!("No {} in {}", file_name, path.uri),
                Err(e) => warn!("Ignoring {}/{}: {}", path.uri, file_name, e),
            }
        }

        debug!(
            "Built {} table for '{}' with {} entries",
            language,
            library.name,
            table.len()
        );
        table
    }

    fn file_name(&self, language: &LanguageCode) -> String {
        format!("{}.{}", language, self.parser.extension())
    }

    /// Languages with a translation file in at least one registered path, sorted.
    pub fn available_languages(&self) -> Vec<LanguageCode> {
        let suffix = format!(".{}", self.parser.extension());
        let mut languages = BTreeSet::new();

        for path in self.libraries.iter().flat_map(|lib| lib.paths.iter()) {
            let names = match self.locator.list(&path.uri) {
                Ok(names) => names,
                Err(e) => {
                    warn!("Cannot list {}: {}", path.uri, e);
                    continue;
                }
            };
            languages.extend(
                names
                    .iter()
                    .filter_map(|name| name.strip_suffix(suffix.as_str()))
                    // Only names the loader will ask for: `FR.json`, not `fr.json`
                    .filter_map(|stem| {
                        LanguageCode::new(stem)
                            .ok()
                            .filter(|code| code.as_str() == stem)
                    }),
            );
        }

        languages.into_iter().collect()
    }
}

impl Default for TranslationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::FixedLanguageDetector;
    use crate::resource::MemoryLocator;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use strata_common::test_utils::json_table;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn memory_registry(files: &[(&str, &str, &[(&str, &str)])]) -> TranslationRegistry {
        let mut locator = MemoryLocator::new();
        for (dir, file, entries) in files {
            locator.insert(Uri::tagged("DATA", dir), *file, json_table(entries));
        }
        TranslationRegistry::new()
            .with_locator(locator)
            .with_detector(FixedLanguageDetector(None))
    }

    #[test]
    fn test_defaults_before_any_set() {
        let registry = memory_registry(&[]);
        assert_eq!(registry.language_default().as_str(), "EN");
        assert!(registry.language().is_none());
        assert_eq!(registry.effective_language().as_str(), "EN");
    }

    #[test]
    fn test_precedence_order_of_paths() {
        let mut registry = memory_registry(&[]);
        registry.add_path("app", Uri::tagged("DATA", "minor1"), false).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "major1"), true).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "minor2"), false).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "major2"), true).unwrap();

        let order: Vec<String> = registry
            .paths("app")
            .iter()
            .map(|p| p.uri.to_string())
            .collect();
        assert_eq!(
            order,
            vec!["DATA:major2", "DATA:major1", "DATA:minor2", "DATA:minor1"]
        );
    }

    #[test]
    fn test_unknown_library_has_no_paths() {
        let registry = memory_registry(&[]);
        assert!(registry.paths("nope").is_empty());
        assert!(registry.table("nope", &lang("EN")).is_empty());
    }

    #[test]
    fn test_empty_library_name_rejected() {
        let mut registry = memory_registry(&[]);
        let result = registry.add_path("", Uri::path("/tmp"), false);
        assert!(matches!(result, Err(I18nError::EmptyLibraryName)));
        assert_eq!(registry.libraries().count(), 0);
    }

    #[test]
    fn test_major_overlay_wins() {
        let mut registry = memory_registry(&[
            ("p1", "EN.json", &[("hello", "Hello")]),
            ("p1", "FR.json", &[("hello", "Bonjour")]),
            ("p2", "FR.json", &[("hello", "Salut")]),
        ]);
        registry.add_path("app", Uri::tagged("DATA", "p1"), false).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "p2"), true).unwrap();
        registry.set_language_default(lang("EN"));
        registry.set_language(lang("FR"));

        assert_eq!(registry.get("hello"), "Salut");
        assert_eq!(registry.get("bye"), "bye");
    }

    #[test]
    fn test_major_registered_first_still_beats_later_minor() {
        let mut registry = memory_registry(&[
            ("major", "EN.json", &[("k", "major")]),
            ("minor", "EN.json", &[("k", "minor")]),
        ]);
        registry.add_path("app", Uri::tagged("DATA", "major"), true).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "minor"), false).unwrap();

        assert_eq!(registry.get("k"), "major");
    }

    #[test]
    fn test_falls_back_to_default_language() {
        let mut registry = memory_registry(&[("p1", "EN.json", &[("hello", "Hello")])]);
        registry.add_path("app", Uri::tagged("DATA", "p1"), false).unwrap();
        registry.set_language(lang("DE"));

        assert_eq!(registry.get("hello"), "Hello");
        assert_eq!(registry.lookup("other"), None);
    }

    #[test]
    fn test_newest_library_consulted_first() {
        let mut registry = memory_registry(&[
            ("toolkit", "EN.json", &[("Open", "Open…"), ("Quit", "Exit")]),
            ("app", "EN.json", &[("Quit", "Leave")]),
        ]);
        registry.add_path("toolkit", Uri::tagged("DATA", "toolkit"), false).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "app"), false).unwrap();

        assert_eq!(registry.get("Quit"), "Leave");
        assert_eq!(registry.get("Open"), "Open…");
        assert_eq!(registry.get_in("toolkit", "Quit"), "Exit");
        assert_eq!(registry.get_in("app", "Open"), "Open");
        assert_eq!(registry.get_in("missing", "Open"), "Open");
    }

    #[test]
    fn test_active_language_of_any_library_beats_default_of_newer_library() {
        let mut registry = memory_registry(&[
            ("toolkit", "FR.json", &[("Quit", "Quitter")]),
            ("app", "EN.json", &[("Quit", "Leave")]),
        ]);
        registry.add_path("toolkit", Uri::tagged("DATA", "toolkit"), false).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "app"), false).unwrap();
        registry.set_language(lang("FR"));

        assert_eq!(registry.get("Quit"), "Quitter");
    }

    #[test]
    fn test_add_path_invalidates_cached_table() {
        let mut registry = memory_registry(&[
            ("p1", "EN.json", &[("hello", "Hello")]),
            ("p2", "EN.json", &[("hello", "Hi")]),
        ]);
        registry.add_path("app", Uri::tagged("DATA", "p1"), false).unwrap();
        assert_eq!(registry.get("hello"), "Hello");

        registry.add_path("app", Uri::tagged("DATA", "p2"), false).unwrap();
        assert_eq!(registry.get("hello"), "Hi");
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let locator = MemoryLocator::new()
            .with_file(Uri::tagged("DATA", "good"), "EN.json", json_table(&[("a", "A")]))
            .with_file(Uri::tagged("DATA", "bad"), "EN.json", "{ not json");
        let mut registry = TranslationRegistry::new().with_locator(locator);
        registry.add_path("app", Uri::tagged("DATA", "good"), false).unwrap();
        registry.add_path("app", Uri::tagged("DATA", "bad"), true).unwrap();

        assert_eq!(registry.get("a"), "A");
    }

    #[test]
    fn test_auto_detect_sets_or_keeps_language() {
        let mut registry = memory_registry(&[]).with_detector(FixedLanguageDetector(Some(lang("JA"))));
        assert_eq!(registry.auto_detect_language(), Some(lang("JA")));
        assert_eq!(registry.language(), Some(&lang("JA")));

        let mut registry = memory_registry(&[]);
        registry.set_language(lang("KO"));
        assert_eq!(registry.auto_detect_language(), None);
        assert_eq!(registry.language(), Some(&lang("KO")));
    }

    #[test]
    fn test_available_languages() {
        let mut registry = memory_registry(&[
            ("p1", "EN.json", &[]),
            ("p1", "FR.json", &[]),
            ("p2", "DE.json", &[]),
            ("p2", "README.md", &[]),
            ("p2", "notes.json", &[]),
        ]);
        registry.add_path("app", Uri::tagged("DATA", "p1"), false).unwrap();
        registry.add_path("lib", Uri::tagged("DATA", "p2"), false).unwrap();

        assert_eq!(
            registry.available_languages(),
            vec![lang("DE"), lang("EN"), lang("FR")]
        );
    }

    #[test]
    fn test_available_languages_skips_lower_case_file_names() {
        let mut registry = memory_registry(&[
            ("p1", "EN.json", &[]),
            ("p1", "fr.json", &[("hello", "Bonjour")]),
        ]);
        registry.add_path("app", Uri::tagged("DATA", "p1"), false).unwrap();

        assert_eq!(registry.available_languages(), vec![lang("EN")]);
    }

    #[derive(Debug)]
    struct CountingLocator {
        inner: MemoryLocator,
        reads: Arc<AtomicUsize>,
    }

    impl ResourceLocator for CountingLocator {
        fn read(&self, location: &Uri, file_name: &str) -> I18nResult<Option<Vec<u8>>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read(location, file_name)
        }

        fn list(&self, location: &Uri) -> I18nResult<Vec<String>> {
            self.inner.list(location)
        }
    }

    #[test]
    fn test_tables_are_cached_per_language() {
        let reads = Arc::new(AtomicUsize::new(0));
        let locator = CountingLocator {
            inner: MemoryLocator::new()
                .with_file(Uri::tagged("DATA", "p1"), "EN.json", json_table(&[("a", "A")])),
            reads: Arc::clone(&reads),
        };
        let mut registry = TranslationRegistry::new().with_locator(locator);
        registry.add_path("app", Uri::tagged("DATA", "p1"), false).unwrap();

        registry.get("a");
        registry.get("a");
        registry.get("b");
        assert_eq!(reads.load(Ordering::SeqCst), 1);

        registry.set_language(lang("FR"));
        registry.get("a");
        registry.set_language(lang("EN"));
        registry.get("a");
        assert_eq!(reads.load(Ordering::SeqCst), 2);
    }
}
