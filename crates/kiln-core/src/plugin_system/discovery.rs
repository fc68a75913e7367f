use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tokio::fs;

use crate::plugin_system::container::ProviderContainer;
use crate::plugin_system::error::{DiscoveryError, PluginSystemError};
use crate::plugin_system::traits::Plugin;

// --- Intermediate structs for deserialization ---

#[derive(Deserialize, Debug)]
struct RawLockFile {
    #[serde(default)]
    packages: Vec<RawLockedPackage>,
}

#[derive(Deserialize, Debug)]
struct RawLockedPackage {
    #[serde(default)]
    name: String,
    #[serde(default)]
    extra: serde_json::Value,
}

impl RawLockedPackage {
    /// Provider names listed under `extra.<namespace>.providers`
    fn providers<'a>(&'a self, namespace: &str) -> Vec<&'a str> {
        self.extra
            .get(namespace)
            .and_then(|section| section.get("providers"))
            .and_then(|providers| providers.as_array())
            .map(|providers| providers.iter().filter_map(|p| p.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Finds installed plugins by reading the dependency lock file.
///
/// Each locked package may advertise provider names in its `extra` metadata.
/// Providers the container binds with the plugin capability are instantiated,
/// in lock file order. Discovery never registers what it finds.
#[derive(Debug, Clone)]
pub struct PluginDiscovery {
    lock_path: PathBuf,
    extra_namespace: String,
    container: Arc<ProviderContainer>,
}

impl PluginDiscovery {
    pub fn new(lock_path: impl Into<PathBuf>, extra_namespace: &str, container: Arc<ProviderContainer>) -> Self {
        Self {
            lock_path: lock_path.into(),
            extra_namespace: extra_namespace.to_string(),
            container,
        }
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    /// Instantiate every plugin provider listed in the lock file.
    ///
    /// A missing lock file yields no plugins. A malformed lock file or a
    /// provider that fails to build aborts the whole pass.
    pub async fn discover(&self) -> Result<Vec<Arc<dyn Plugin>>, PluginSystemError> {
        let lock = match self.read_lock_file().await? {
            Some(lock) => lock,
            None => {
                log::debug!("No lock file at {}, nothing to discover", self.lock_path.display());
                return Ok(Vec::new());
            }
        };

        let mut plugins = Vec::new();
        for package in &lock.packages {
            for provider in package.providers(&self.extra_namespace) {
                if !self.container.provides_plugin(provider) {
                    log::debug!("Skipping provider '{}' of package '{}'", provider, package.name);
                    continue;
                }
                let plugin = self.container.make(provider)?;
                log::info!(
                    "Discovered plugin '{}' from provider '{}' ({})",
                    plugin.id(),
                    provider,
                    package.name
                );
                plugins.push(plugin);
            }
        }

        Ok(plugins)
    }

    async fn read_lock_file(&self) -> Result<Option<RawLockFile>, DiscoveryError> {
        let content = match fs::read_to_string(&self.lock_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(DiscoveryError::Io {
                    path: self.lock_path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| DiscoveryError::MalformedLockFile {
                path: self.lock_path.clone(),
                source,
            })
    }
}
