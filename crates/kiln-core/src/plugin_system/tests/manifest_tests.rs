use crate::plugin_system::manifest::{ManifestRecord, PluginManifest};
use crate::plugin_system::registry::PluginRegistry;
use super::mock::MockPlugin;

fn sample_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry
        .register(
            MockPlugin::new("core")
                .at_version("2.1.0")
                .described("Core services")
                .authored_by("Kiln Team")
                .arc(),
        )
        .unwrap();
    registry
        .register(MockPlugin::with_deps("blog", &["core"]).arc())
        .unwrap();
    registry
}

#[test]
fn test_manifest_reflects_plugin_metadata() {
    let registry = sample_registry();
    let manifest = registry.manifest();

    assert_eq!(manifest.len(), 2);
    assert_eq!(
        manifest.records()[0],
        ManifestRecord {
            id: "core".to_string(),
            name: "core plugin".to_string(),
            version: "2.1.0".to_string(),
            description: "Core services".to_string(),
            author: "Kiln Team".to_string(),
            enabled: true,
            dependencies: Vec::new(),
        }
    );
    assert_eq!(manifest.records()[1].id, "blog");
    assert_eq!(manifest.records()[1].dependencies, vec!["core".to_string()]);
}

#[test]
fn test_manifest_is_a_snapshot() {
    let registry = sample_registry();
    let before = registry.manifest();

    registry.disable("blog").unwrap();
    let after = registry.manifest();

    assert!(before.records()[1].enabled);
    assert!(!after.records()[1].enabled);
}

#[test]
fn test_empty_manifest() {
    let manifest = PluginRegistry::new().manifest();
    assert!(manifest.is_empty());
    assert_eq!(manifest.to_json().unwrap(), "[]");
}

#[test]
fn test_manifest_json_shape() {
    let manifest = sample_registry().manifest();
    let json = manifest.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().expect("manifest should serialize as an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "core");
    assert_eq!(entries[0]["author"], "Kiln Team");
    assert_eq!(entries[1]["enabled"], true);
    assert_eq!(entries[1]["dependencies"][0], "core");

    let restored = PluginManifest::from_json(&json).unwrap();
    assert_eq!(restored, manifest);
}
