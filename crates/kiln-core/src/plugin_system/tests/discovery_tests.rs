use std::path::Path;
use std::sync::Arc;

use tempfile::tempdir;

use crate::plugin_system::container::ProviderContainer;
use crate::plugin_system::discovery::PluginDiscovery;
use crate::plugin_system::error::{DiscoveryError, PluginSystemError};
use super::mock::MockPlugin;

const LOCK_FILE: &str = r#"{
    "packages": [
        {
            "name": "acme/core",
            "extra": { "kiln": { "providers": ["acme::CorePlugin", "acme::MailService"] } }
        },
        { "name": "acme/no-extra" },
        {
            "name": "acme/other-host",
            "extra": { "other": { "providers": ["acme::OtherPlugin"] } }
        },
        {
            "name": "acme/blog",
            "extra": { "kiln": { "providers": ["acme::BlogPlugin", "acme::Unbound", 42] } }
        }
    ]
}"#;

fn container() -> ProviderContainer {
    let mut container = ProviderContainer::new();
    container
        .bind_plugin("acme::CorePlugin", || Ok(MockPlugin::new("core").arc()))
        .bind_plugin("acme::BlogPlugin", || Ok(MockPlugin::with_deps("blog", &["core"]).arc()))
        .bind_plugin("acme::OtherPlugin", || Ok(MockPlugin::new("other").arc()))
        .bind_service("acme::MailService");
    container
}

fn discovery_for(path: &Path, container: ProviderContainer) -> PluginDiscovery {
    PluginDiscovery::new(path, "kiln", Arc::new(container))
}

#[tokio::test]
async fn test_discover_missing_lock_file_finds_nothing() {
    let dir = tempdir().unwrap();
    let discovery = discovery_for(&dir.path().join("kiln.lock"), container());

    let plugins = discovery.discover().await.unwrap();
    assert!(plugins.is_empty());
}

#[tokio::test]
async fn test_discover_instantiates_plugin_providers_in_lock_order() {
    let dir = tempdir().unwrap();
    let lock_path = dir.path().join("kiln.lock");
    std::fs::write(&lock_path, LOCK_FILE).unwrap();

    let discovery = discovery_for(&lock_path, container());
    let plugins = discovery.discover().await.unwrap();

    let ids: Vec<&str> = plugins.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["core", "blog"]);
    assert_eq!(discovery.lock_path(), lock_path.as_path());
}

#[tokio::test]
async fn test_discover_uses_configured_namespace() {
    let dir = tempdir().unwrap();
    let lock_path = dir.path().join("kiln.lock");
    std::fs::write(&lock_path, LOCK_FILE).unwrap();

    let discovery = PluginDiscovery::new(&lock_path, "other", Arc::new(container()));
    let plugins = discovery.discover().await.unwrap();

    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].id(), "other");
}

#[tokio::test]
async fn test_discover_lock_without_packages() {
    let dir = tempdir().unwrap();
    let lock_path = dir.path().join("kiln.lock");
    std::fs::write(&lock_path, "{}").unwrap();

    let plugins = discovery_for(&lock_path, container()).discover().await.unwrap();
    assert!(plugins.is_empty());
}

#[tokio::test]
async fn test_discover_malformed_lock_file() {
    let dir = tempdir().unwrap();
    let lock_path = dir.path().join("kiln.lock");
    std::fs::write(&lock_path, "{ not json").unwrap();

    let result = discovery_for(&lock_path, container()).discover().await;
    match result {
        Err(PluginSystemError::Discovery(DiscoveryError::MalformedLockFile { path, .. })) => {
            assert_eq!(path, lock_path);
        }
        other => panic!("Expected MalformedLockFile, got {:?}", other),
    }
}

#[tokio::test]
async fn test_discover_lock_path_is_a_directory() {
    let dir = tempdir().unwrap();

    let result = discovery_for(dir.path(), container()).discover().await;
    assert!(matches!(
        result,
        Err(PluginSystemError::Discovery(DiscoveryError::Io { .. }))
    ));
}

#[tokio::test]
async fn test_discover_propagates_factory_failure() {
    let dir = tempdir().unwrap();
    let lock_path = dir.path().join("kiln.lock");
    std::fs::write(&lock_path, LOCK_FILE).unwrap();

    let mut failing = container();
    failing.bind_plugin("acme::BlogPlugin", || {
        Err(PluginSystemError::ResolutionFailed {
            provider: "acme::BlogPlugin".to_string(),
            message: "missing configuration".to_string(),
        })
    });

    let result = discovery_for(&lock_path, failing).discover().await;
    assert!(matches!(result, Err(PluginSystemError::ResolutionFailed { .. })));
}
