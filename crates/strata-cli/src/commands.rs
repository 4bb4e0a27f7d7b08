//! Registry construction and command execution

use crate::args::{Args, Command};
use strata_config::{Config, ConfigError, I18nSettings, PathSettings};
use strata_i18n::TranslationRegistry;
use tracing::debug;

/// Merge command line overrides into the configured `i18n` section.
///
/// Command line paths are registered after the configured ones.
pub fn merge_settings(args: &Args, config: &Config) -> I18nSettings {
    let mut settings = config.i18n.clone();

    if let Some(language) = &args.lang {
        settings.language = Some(language.to_string());
    }
    if let Some(language) = &args.default_lang {
        settings.default_language = language.to_string();
    }
    if let Some(root) = &args.data_root {
        settings.data_root = Some(root.display().to_string());
    }
    if args.auto_detect {
        settings.auto_detect = true;
    }

    let minors = args.paths.iter().map(|spec| (spec, false));
    let majors = args.majors.iter().map(|spec| (spec, true));
    settings
        .paths
        .extend(minors.chain(majors).map(|(spec, major)| PathSettings {
            library: spec.library.clone(),
            uri: spec.uri.to_string(),
            major,
        }));

    settings
}

/// Build the registry described by the configuration and command line.
pub fn build_registry(args: &Args, config: &Config) -> Result<TranslationRegistry, ConfigError> {
    let settings = merge_settings(args, config);
    debug!("Registry settings: {:?}", settings);
    settings.build_registry()
}

/// Run `command` against `registry`, returning the lines to print.
pub fn execute(command: &Command, registry: &TranslationRegistry) -> Vec<String> {
    match command {
        Command::Get { library, keys } => keys
            .iter()
            .map(|key| match library {
                Some(library) => registry.get_in(library, key),
                None => registry.get(key),
            })
            .collect(),
        Command::Paths { library } => registry
            .paths(library)
            .iter()
            .map(|path| {
                let class = if path.major { "major" } else { "minor" };
                format!("{class}\t{}", path.uri)
            })
            .collect(),
        Command::Languages => registry
            .available_languages()
            .into_iter()
            .map(|language| language.to_string())
            .collect(),
    }
}
