//! Tests for building registries from configuration.

mod common;

use std::fs;

use common::fixtures;
use pretty_assertions::assert_eq;
use tint::assets::AssetLoader;
use tint::{AppConfig, TintRegistry};

#[test]
fn test_registry_from_external_config() {
    let dir = tempfile::tempdir().unwrap();
    let colors_path = dir.path().join("brand.txt");
    fs::write(&colors_path, fixtures::COLOR_FILE).unwrap();

    let config_path = dir.path().join("config.yaml");
    fs::write(
        &config_path,
        format!(
            "match_limit: null\nload_defaults: false\nsystems:\n  brand: {}\n",
            colors_path.display()
        ),
    )
    .unwrap();

    let loader = AssetLoader::new(None, Some(config_path));
    let config = AppConfig::load_from_assets(&loader);
    assert_eq!(config.match_limit, None);
    assert!(!config.load_defaults);

    let registry = TintRegistry::from_config(&config, &loader).unwrap();
    assert_eq!(registry.systems(), vec!["brand"]);
    common::assert_exact_match(&registry.match_name("brand blue").unwrap(), "0033aa");
}

#[test]
fn test_relative_system_path_follows_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("etc");
    fs::create_dir_all(config_dir.join("colors")).unwrap();
    fs::write(config_dir.join("colors/brand.txt"), fixtures::COLOR_FILE).unwrap();

    let config_path = config_dir.join("config.yaml");
    fs::write(
        &config_path,
        "load_defaults: false\nsystems:\n  brand: colors/brand.txt\n",
    )
    .unwrap();

    let loader = AssetLoader::new(None, Some(config_path));
    let config = AppConfig::load_from_assets(&loader);
    let registry = TintRegistry::from_config(&config, &loader).unwrap();

    assert_eq!(registry.system_len("brand"), Some(3));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "match_limit: [not, a, number]\n").unwrap();

    let loader = AssetLoader::new(None, Some(config_path));
    assert_eq!(AppConfig::load_from_assets(&loader), AppConfig::default());
}

#[test]
fn test_data_dir_overrides_bundled_system() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.txt"), "only white #ffffff\n").unwrap();

    let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None);
    let registry = TintRegistry::from_config(&AppConfig::default(), &loader).unwrap();

    assert_eq!(registry.system_len("en"), Some(1));
    let found = registry.find_nearest("fefefe", Some("en"), None).unwrap();
    common::assert_near_find(&found, "only white");
    // Systems without an override still come from the bundled data
    assert!(registry.system_len("de").unwrap_or(0) > 1);
}

#[test]
fn test_missing_system_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        load_defaults: false,
        systems: [("brand".to_string(), dir.path().join("missing.txt"))]
            .into_iter()
            .collect(),
        ..AppConfig::default()
    };

    let result = TintRegistry::from_config(&config, &AssetLoader::embedded());
    assert!(result.is_err());
}
