use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::plugin_system::dependency::DependencyCheck;
use crate::plugin_system::discovery::PluginDiscovery;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::manifest::PluginManifest;
use crate::plugin_system::panel::Panel;
use crate::plugin_system::registry::PluginRegistry;

type Result<T> = std::result::Result<T, PluginSystemError>;

/// Plugin system component interface
#[async_trait]
pub trait PluginManager: Send + Sync + Debug {
    /// Discover installed plugins and register them in discovery order.
    /// Returns how many plugins were registered.
    async fn discover(&self) -> Result<usize>;

    /// Boot every registered plugin, dependencies first
    async fn boot_all(&self) -> Result<()>;

    /// Snapshot of the registered plugins' metadata
    async fn manifest(&self) -> PluginManifest;

    /// Hand every enabled plugin to the panel
    async fn register_with_panel(&self, panel: &mut Panel) -> Result<()>;
}

/// Default implementation of plugin manager
#[derive(Clone)]
pub struct DefaultPluginManager {
    registry: Arc<Mutex<PluginRegistry>>,
    discovery: PluginDiscovery,
}

impl DefaultPluginManager {
    pub fn new(discovery: PluginDiscovery, dependency_check: DependencyCheck) -> Self {
        Self {
            registry: Arc::new(Mutex::new(PluginRegistry::with_dependency_check(dependency_check))),
            discovery,
        }
    }

    /// Get reference to the plugin registry Arc<Mutex>
    pub fn registry(&self) -> &Arc<Mutex<PluginRegistry>> {
        &self.registry
    }

    pub fn discovery(&self) -> &PluginDiscovery {
        &self.discovery
    }
}

impl Debug for DefaultPluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultPluginManager")
            .field("lock_path", &self.discovery.lock_path())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PluginManager for DefaultPluginManager {
    async fn discover(&self) -> Result<usize> {
        // Read the lock file before taking the registry lock
        let plugins = self.discovery.discover().await?;
        let count = plugins.len();

        let mut registry = self.registry.lock().await;
        for plugin in plugins {
            registry.register(plugin)?;
        }
        Ok(count)
    }

    async fn boot_all(&self) -> Result<()> {
        self.registry.lock().await.boot_all()
    }

    async fn manifest(&self) -> PluginManifest {
        self.registry.lock().await.manifest()
    }

    async fn register_with_panel(&self, panel: &mut Panel) -> Result<()> {
        self.registry.lock().await.register_with_panel(panel)
    }
}
