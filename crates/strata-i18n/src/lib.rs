//! # Strata I18n
//!
//! Runtime string translation built from layered lookup tables.
//!
//! Applications register translation directories per *library* (a namespace
//! such as `"app"` or `"widgets"`), pick an active language and ask for
//! strings by key. For each (library, language) pair the registered paths are
//! overlaid into one table: major paths win over minor ones, and within a
//! class the newest registration wins. A key missing from the active language
//! is looked up in the default language, and a key missing there comes back
//! unchanged.
//!
//! Translation files are named after the language code they hold
//! (`EN.json`, `FR.json`, ...) and live directly in the registered directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use strata_i18n::{tr, Uri};
//!
//! strata_i18n::init(std::env::args());
//! strata_i18n::add_path("app", Uri::parse("DATA:translate").unwrap(), false);
//! strata_i18n::set_language("FR");
//!
//! println!("{}", tr!("Open file"));
//! strata_i18n::un_init();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod detect;
pub mod error;
pub mod global;
pub mod parser;
pub mod registry;
pub mod resource;
pub mod table;
pub mod uri;

pub use args::InitOptions;
pub use detect::{FixedLanguageDetector, LanguageDetector, SystemLanguageDetector};
pub use error::{I18nError, I18nResult};
pub use global::{
    add_path, auto_detect_language, available_languages, get, get_in, init, init_with,
    is_initialized, language, language_default, paths, set_language, set_language_default,
    un_init,
};
pub use parser::{FluentParser, JsonParser, TableParser};
pub use registry::{SearchPath, TranslationRegistry};
pub use resource::{FsLocator, MemoryLocator, ResourceLocator};
pub use strata_common::LanguageCode;
pub use table::TranslationTable;
pub use uri::Uri;

/// Translate a string through the process-wide registry.
///
/// `tr!("Save")` is shorthand for [`get`]`("Save")`.
#[macro_export]
macro_rules! tr {
    ($key:expr) => {
        $crate::global::get($key)
    };
}
