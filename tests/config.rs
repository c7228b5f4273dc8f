//! Configuration system tests
//!
//! Tests for config paths and config file loading/saving.

use spotlight::config::{SpotlightConfig, DEFAULT_COLORS};
use spotlight::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
        assert!(path.to_string_lossy().contains("spotlight"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Config File Tests
// ========================================================================

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = SpotlightConfig {
        tag: "REGION".to_string(),
        colors: vec!["#112233".to_string(), "hsl(10, 20%, 30%)".to_string()],
        default_opacity: 0.3,
    };
    config.save_to(&path).unwrap();

    let loaded = SpotlightConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SpotlightConfig::load_or_default(&dir.path().join("absent.yaml"));
    assert_eq!(config, SpotlightConfig::default());
}

#[test]
fn test_malformed_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "colors: {not: [a list\n").unwrap();

    assert!(SpotlightConfig::from_file(&path).is_err());
    assert_eq!(
        SpotlightConfig::load_or_default(&path),
        SpotlightConfig::default()
    );
}

#[test]
fn test_file_values_are_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "default_opacity: 7\ncolors: []\n").unwrap();

    let config = SpotlightConfig::from_file(&path).unwrap();
    assert_eq!(config.default_opacity, 1.0);
    assert!(config.colors.is_empty());
}

#[test]
fn test_default_palette_is_builtin() {
    let config = SpotlightConfig::default();
    assert_eq!(config.colors.len(), DEFAULT_COLORS.len());
    assert!(config.colors.iter().all(|c| c.starts_with("rgba(")));
}
