use std::path::{Path, PathBuf};

use tempfile::tempdir;

use crate::plugin_system::dependency::DependencyCheck;
use crate::storage::config::{ConfigFormat, KilnConfig};
use crate::storage::error::StorageSystemError;

#[test]
fn test_default_config() {
    let config = KilnConfig::default();
    assert_eq!(config.base_path, PathBuf::from("."));
    assert_eq!(config.log_level, "info");
    assert_eq!(config.panel, "admin");
    assert_eq!(config.dependency_check, DependencyCheck::AtRegistration);
    assert!(config.disabled.is_empty());
    assert!(config.discovery.enabled);
    assert_eq!(config.discovery.extra_namespace, "kiln");
    assert_eq!(config.lock_file_path(), PathBuf::from("./kiln.lock"));
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("kiln.json")), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_path(Path::new("kiln.TOML")), Some(ConfigFormat::Toml));
    assert_eq!(ConfigFormat::from_path(Path::new("kiln.yml")), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_path(Path::new("kiln.ini")), None);
    assert_eq!(ConfigFormat::from_path(Path::new("kiln")), None);
    assert_eq!(ConfigFormat::Toml.extension(), "toml");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = KilnConfig::load(&dir.path().join("kiln.toml")).unwrap();
    assert_eq!(config, KilnConfig::default());
}

#[test]
fn test_load_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kiln.toml");
    std::fs::write(
        &path,
        r#"
base_path = "/srv/app"
panel = "backoffice"
dependency_check = "at_boot"
disabled = ["legacy"]

[discovery]
lock_file = "vendor/kiln.lock"
"#,
    )
    .unwrap();

    let config = KilnConfig::load(&path).unwrap();
    assert_eq!(config.panel, "backoffice");
    assert_eq!(config.dependency_check, DependencyCheck::AtBoot);
    assert_eq!(config.disabled, vec!["legacy".to_string()]);
    assert!(config.discovery.enabled, "Unset keys keep their defaults");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.lock_file_path(), PathBuf::from("/srv/app/vendor/kiln.lock"));
}

#[test]
fn test_load_json_and_yaml() {
    let dir = tempdir().unwrap();

    let json_path = dir.path().join("kiln.json");
    std::fs::write(&json_path, r#"{ "discovery": { "enabled": false } }"#).unwrap();
    assert!(!KilnConfig::load(&json_path).unwrap().discovery.enabled);

    let yaml_path = dir.path().join("kiln.yaml");
    std::fs::write(&yaml_path, "log_level: debug\ndiscovery:\n  extra_namespace: acme\n").unwrap();
    let config = KilnConfig::load(&yaml_path).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.discovery.extra_namespace, "acme");
}

#[test]
fn test_load_unsupported_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kiln.ini");
    std::fs::write(&path, "panel=admin").unwrap();

    assert!(matches!(
        KilnConfig::load(&path),
        Err(StorageSystemError::UnsupportedConfigFormat(_))
    ));
}

#[test]
fn test_load_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kiln.toml");
    std::fs::write(&path, "dependency_check = \"sometimes\"").unwrap();

    match KilnConfig::load(&path) {
        Err(StorageSystemError::DeserializationError { format, .. }) => assert_eq!(format, "toml"),
        other => panic!("Expected DeserializationError, got {:?}", other),
    }
}

#[test]
fn test_absolute_lock_file_ignores_base_path() {
    let mut config = KilnConfig::default();
    config.base_path = PathBuf::from("/srv/app");
    config.discovery.lock_file = PathBuf::from("/etc/kiln/kiln.lock");
    assert_eq!(config.lock_file_path(), PathBuf::from("/etc/kiln/kiln.lock"));
}

#[test]
fn test_discovery_override_values() {
    let mut config = KilnConfig::default();

    config.apply_discovery_override("false");
    assert!(!config.discovery.enabled);

    config.apply_discovery_override("maybe");
    assert!(!config.discovery.enabled, "Unrecognised values leave the setting alone");

    config.apply_discovery_override(" ON ");
    assert!(config.discovery.enabled);

    config.apply_discovery_override("0");
    assert!(!config.discovery.enabled);
}
