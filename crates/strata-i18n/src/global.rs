//! Process-wide registry behind free functions.
//!
//! [`init`] installs a [`TranslationRegistry`] and [`un_init`] drops it with
//! every path, language setting and cached table. Between the two, any thread
//! can register paths or translate. Before `init` (or after `un_init`),
//! mutations are ignored with a warning and [`get`] returns its argument.

use crate::args::InitOptions;
use crate::registry::TranslationRegistry;
use crate::uri::Uri;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use strata_common::LanguageCode;
use tracing::{info, warn};

static REGISTRY: Lazy<RwLock<Option<TranslationRegistry>>> = Lazy::new(|| RwLock::new(None));

fn with_registry<R>(f: impl FnOnce(&TranslationRegistry) -> R) -> Option<R> {
    REGISTRY.read().as_ref().map(f)
}

fn with_registry_mut(operation: &str, f: impl FnOnce(&mut TranslationRegistry)) {
    match REGISTRY.write().as_mut() {
        Some(registry) => f(registry),
        None => warn!("Translation registry not initialized, ignoring {}", operation),
    }
}

/// Create the process-wide registry from the process arguments.
///
/// See [`InitOptions`] for the recognized `--strata-*` arguments; everything
/// else is ignored, including an empty argument list. Calling `init` again
/// replaces the registry.
pub fn init<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    init_with(InitOptions::from_args(args).into_registry());
}

/// Install a registry built by the caller.
pub fn init_with(registry: TranslationRegistry) {
    let mut slot = REGISTRY.write();
    if slot.is_some() {
        warn!("Translation registry already initialized, replacing it");
    }
    *slot = Some(registry);
    info!("Translation registry initialized");
}

/// Drop the process-wide registry and everything it loaded.
pub fn un_init() {
    if REGISTRY.write().take().is_some() {
        info!("Translation registry released");
    }
}

/// Whether [`init`] has been called without a matching [`un_init`]
pub fn is_initialized() -> bool {
    REGISTRY.read().is_some()
}

/// Register a translation directory for `library`.
///
/// `major` paths override every non-major path of the same library.
pub fn add_path(library: &str, uri: Uri, major: bool) {
    with_registry_mut("add_path", |registry| {
        if let Err(e) = registry.add_path(library, uri, major) {
            warn!("Cannot add translation path: {}", e);
        }
    });
}

/// Search paths of `library`, highest precedence first; empty when unknown.
pub fn paths(library: &str) -> Vec<Uri> {
    with_registry(|registry| {
        registry
            .paths(library)
            .iter()
            .map(|path| path.uri.clone())
            .collect()
    })
    .unwrap_or_default()
}

/// Set the fallback language. Invalid codes are ignored.
pub fn set_language_default(language: &str) {
    let Some(language) = parse_language(language) else {
        return;
    };
    with_registry_mut("set_language_default", |registry| {
        registry.set_language_default(language);
    });
}

/// The fallback language code, empty when not initialized
pub fn language_default() -> String {
    with_registry(|registry| registry.language_default().to_string()).unwrap_or_default()
}

/// Set the active language. Invalid codes are ignored.
pub fn set_language(language: &str) {
    let Some(language) = parse_language(language) else {
        return;
    };
    with_registry_mut("set_language", |registry| registry.set_language(language));
}

/// The active language code, empty when none was selected
pub fn language() -> String {
    with_registry(|registry| registry.language().map(ToString::to_string))
        .flatten()
        .unwrap_or_default()
}

/// Select the system language; keeps the current one when detection fails.
pub fn auto_detect_language() {
    with_registry_mut("auto_detect_language", |registry| {
        registry.auto_detect_language();
    });
}

/// Languages with at least one translation file among the registered paths
pub fn available_languages() -> Vec<LanguageCode> {
    with_registry(TranslationRegistry::available_languages).unwrap_or_default()
}

/// Translate `key`; returns it unchanged when there is no translation.
pub fn get(key: &str) -> String {
    with_registry(|registry| registry.get(key)).unwrap_or_else(|| key.to_string())
}

/// Translate `key` using only the paths of `library`.
pub fn get_in(library: &str, key: &str) -> String {
    with_registry(|registry| registry.get_in(library, key)).unwrap_or_else(|| key.to_string())
}

fn parse_language(language: &str) -> Option<LanguageCode> {
    match LanguageCode::new(language) {
        Ok(language) => Some(language),
        Err(e) => {
            warn!("Ignoring language '{}': {}", language, e);
            None
        }
    }
}
