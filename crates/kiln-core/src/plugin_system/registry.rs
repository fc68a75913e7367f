use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::plugin_system::dependency::{BootPlan, DependencyCheck};
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::manifest::PluginManifest;
use crate::plugin_system::panel::Panel;
use crate::plugin_system::traits::Plugin;

type Result<T> = std::result::Result<T, PluginSystemError>;

/// Registry for managing plugins
///
/// Owns every registered plugin for the lifetime of the process and tracks
/// which of them have been booted. Iteration follows registration order.
pub struct PluginRegistry {
    /// Registered plugins (using Arc for shared ownership)
    plugins: HashMap<String, Arc<dyn Plugin>>,
    /// Registration order of plugin ids
    order: Vec<String>,
    /// Ids that completed boot
    booted: HashSet<String>,
    /// Ids in the order they were booted
    boot_sequence: Vec<String>,
    dependency_check: DependencyCheck,
}

impl PluginRegistry {
    /// Create an empty registry that checks dependencies at registration time
    pub fn new() -> Self {
        Self::with_dependency_check(DependencyCheck::default())
    }

    pub fn with_dependency_check(dependency_check: DependencyCheck) -> Self {
        Self {
            plugins: HashMap::new(),
            order: Vec::new(),
            booted: HashSet::new(),
            boot_sequence: Vec::new(),
            dependency_check,
        }
    }

    pub fn dependency_check(&self) -> DependencyCheck {
        self.dependency_check
    }

    /// Register a plugin
    ///
    /// Fails if the id is taken or, when checking at registration, if any
    /// declared dependency is not registered yet. The registry is left
    /// untouched on failure.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Result<()> {
        let id = plugin.id().to_string();

        if self.plugins.contains_key(&id) {
            return Err(PluginSystemError::DuplicateRegistration { plugin_id: id });
        }

        if self.dependency_check == DependencyCheck::AtRegistration {
            let missing: Vec<String> = plugin
                .dependencies()
                .into_iter()
                .filter(|dep| !self.has(dep))
                .collect();
            if !missing.is_empty() {
                return Err(PluginSystemError::UnsatisfiedDependency { plugin_id: id, missing });
            }
        }

        log::info!("Registered plugin '{}' v{}", id, plugin.version());
        self.order.push(id.clone());
        self.plugins.insert(id, plugin);
        Ok(())
    }

    /// Boot a plugin and, first, the dependencies it declares.
    ///
    /// Booting an already booted plugin does nothing. A disabled plugin is
    /// skipped without being marked, so it can still boot after `enable`.
    pub fn boot(&mut self, id: &str) -> Result<()> {
        let mut plan = BootPlan::new(self);
        plan.visit(id)?;
        let order = plan.into_order();
        self.apply(order);
        Ok(())
    }

    /// Boot every registered plugin in dependency-first order.
    ///
    /// The whole order is resolved before anything is marked, so an error
    /// leaves the booted set as it was.
    pub fn boot_all(&mut self) -> Result<()> {
        let order = self.boot_order()?;
        self.apply(order);
        Ok(())
    }

    /// The order `boot_all` would boot plugins in, without booting them.
    pub fn boot_order(&self) -> Result<Vec<String>> {
        let mut plan = BootPlan::new(self);
        for id in &self.order {
            plan.visit(id)?;
        }
        Ok(plan.into_order())
    }

    fn apply(&mut self, order: Vec<String>) {
        for id in order {
            if self.booted.insert(id.clone()) {
                log::info!("Booted plugin '{}'", id);
                self.boot_sequence.push(id);
            }
        }
    }

    /// Get a plugin by ID
    pub fn get(&self, id: &str) -> Result<Arc<dyn Plugin>> {
        self.lookup(id)
            .cloned()
            .ok_or_else(|| PluginSystemError::not_registered(id))
    }

    pub(crate) fn lookup(&self, id: &str) -> Option<&Arc<dyn Plugin>> {
        self.plugins.get(id)
    }

    /// Check if a plugin is registered by ID
    pub fn has(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// All registered plugins in registration order
    pub fn all(&self) -> impl Iterator<Item = (&str, &Arc<dyn Plugin>)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.plugins.get(id).map(|plugin| (id.as_str(), plugin)))
    }

    /// Enabled plugins in registration order
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &Arc<dyn Plugin>)> + '_ {
        self.all().filter(|(_, plugin)| plugin.is_enabled())
    }

    pub fn enable(&self, id: &str) -> Result<()> {
        self.get(id)?.enable();
        Ok(())
    }

    pub fn disable(&self, id: &str) -> Result<()> {
        self.get(id)?.disable();
        Ok(())
    }

    pub fn is_booted(&self, id: &str) -> bool {
        self.booted.contains(id)
    }

    /// Booted plugin ids, earliest first
    pub fn boot_sequence(&self) -> &[String] {
        &self.boot_sequence
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of the registered plugins' metadata
    pub fn manifest(&self) -> PluginManifest {
        PluginManifest::capture(self)
    }

    /// Register then boot every enabled plugin against `panel`, in registration order.
    pub fn register_with_panel(&self, panel: &mut Panel) -> Result<()> {
        for (id, plugin) in self.enabled() {
            log::debug!("Registering plugin '{}' with panel '{}'", id, panel.id());
            plugin.register(panel)?;
            plugin.boot(panel)?;
        }
        Ok(())
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.order)
            .field("booted", &self.boot_sequence)
            .field("dependency_check", &self.dependency_check)
            .finish()
    }
}
