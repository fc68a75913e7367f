use serde::{Deserialize, Serialize};

use crate::plugin_system::registry::PluginRegistry;

/// Metadata of one registered plugin, as read at snapshot time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Unique identifier for the plugin
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Plugin version
    pub version: String,

    /// Plugin description
    pub description: String,

    /// Plugin author
    pub author: String,

    /// Whether the plugin was enabled when the snapshot was taken
    pub enabled: bool,

    /// Ids of the plugins it depends on
    pub dependencies: Vec<String>,
}

/// Serializable snapshot of a registry's plugins, in registration order.
///
/// Values are copied out of the plugins when captured; later changes to the
/// plugins are not reflected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginManifest {
    records: Vec<ManifestRecord>,
}

impl PluginManifest {
    pub fn capture(registry: &PluginRegistry) -> Self {
        let records = registry
            .all()
            .map(|(_, plugin)| ManifestRecord {
                id: plugin.id().to_string(),
                name: plugin.name().to_string(),
                version: plugin.version().to_string(),
                description: plugin.description().to_string(),
                author: plugin.author().to_string(),
                enabled: plugin.is_enabled(),
                dependencies: plugin.dependencies(),
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ManifestRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty-printed JSON array of the records
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Read back a manifest produced by [`PluginManifest::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str(json)?;
        Ok(Self { records })
    }
}
