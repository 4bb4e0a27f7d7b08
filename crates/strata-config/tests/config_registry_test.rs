//! End-to-end: configuration file to working translation registry

use serial_test::serial;
use std::fs;
use strata_config::{ConfigFormat, ConfigLoader};
use tempfile::TempDir;

fn clear_env() {
    for var in [
        "STRATA_CONFIG_PATH",
        "STRATA_LANG",
        "STRATA_LANG_DEFAULT",
        "STRATA_AUTO_DETECT",
        "STRATA_DATA_ROOT",
        "STRATA_LOG_LEVEL",
        "STRATA_LOG_FILE",
    ] {
        std::env::remove_var(var);
    }
}

fn write_translations(root: &TempDir) {
    let base = root.path().join("translate");
    let theme = root.path().join("theme");
    fs::create_dir_all(&base).unwrap();
    fs::create_dir_all(&theme).unwrap();

    fs::write(base.join("EN.json"), r#"{"hello": "Hello", "Open": "Open"}"#).unwrap();
    fs::write(base.join("FR.json"), r#"{"hello": "Bonjour", "Open": "Ouvrir"}"#).unwrap();
    fs::write(theme.join("FR.json"), r#"{"hello": "Salut"}"#).unwrap();
}

#[test]
#[serial]
fn test_yaml_config_builds_registry() {
    clear_env();
    let root = TempDir::new().unwrap();
    write_translations(&root);

    let yaml = format!(
        "i18n:\n  language: FR\n  data_root: \"{}\"\n  paths:\n    - library: app\n      uri: \"DATA:translate\"\n    - library: app\n      uri: \"DATA:///theme\"\n      major: true\n",
        root.path().display()
    );
    let config = ConfigLoader::load_str(&yaml, ConfigFormat::Yaml).unwrap();
    let registry = config.build_registry().unwrap();

    assert_eq!(registry.get("hello"), "Salut");
    assert_eq!(registry.get("Open"), "Ouvrir");
    assert_eq!(registry.get("bye"), "bye");
}

#[test]
#[serial]
fn test_toml_config_with_env_language() {
    clear_env();
    let root = TempDir::new().unwrap();
    write_translations(&root);
    std::env::set_var("STRATA_LANG", "DE");

    let toml = format!(
        "[i18n]\ndata_root = '{}'\n\n[[i18n.paths]]\nlibrary = \"app\"\nuri = \"DATA:translate\"\n",
        root.path().display()
    );
    let config = ConfigLoader::load_str(&toml, ConfigFormat::Toml).unwrap();
    let registry = config.build_registry().unwrap();

    // No German file: falls back to the default language
    assert_eq!(registry.language().map(|l| l.as_str()), Some("DE"));
    assert_eq!(registry.get("hello"), "Hello");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_config_is_a_strata_config_error() {
    clear_env();
    let root = TempDir::new().unwrap();
    let path = root.path().join("strata.yaml");
    fs::write(&path, "logging:\n  level: chatty\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, strata_common::StrataError::Config { .. }));
}
