use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::traits::Plugin;

/// Builds a plugin instance for a provider binding.
pub type PluginFactory =
    Arc<dyn Fn() -> Result<Arc<dyn Plugin>, PluginSystemError> + Send + Sync>;

/// What a provider name is bound to in the container
#[derive(Clone)]
pub enum ProviderBinding {
    /// A provider with the plugin capability, built by its factory
    Plugin(PluginFactory),
    /// A provider known to the host that is not a plugin
    Service,
}

impl fmt::Debug for ProviderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderBinding::Plugin(_) => f.write_str("Plugin(<factory>)"),
            ProviderBinding::Service => f.write_str("Service"),
        }
    }
}

/// Maps provider names found in lock files to the code that builds them.
///
/// Discovery only instantiates providers bound here with the plugin
/// capability; everything else in a lock file is ignored.
#[derive(Debug, Clone, Default)]
pub struct ProviderContainer {
    bindings: HashMap<String, ProviderBinding>,
}

impl ProviderContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a plugin-capable provider. Rebinding replaces the previous factory.
    pub fn bind_plugin<F>(&mut self, provider: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn Plugin>, PluginSystemError> + Send + Sync + 'static,
    {
        self.bindings
            .insert(provider.to_string(), ProviderBinding::Plugin(Arc::new(factory)));
        self
    }

    /// Bind a provider that resolves but does not provide a plugin
    pub fn bind_service(&mut self, provider: &str) -> &mut Self {
        self.bindings.insert(provider.to_string(), ProviderBinding::Service);
        self
    }

    pub fn is_resolvable(&self, provider: &str) -> bool {
        self.bindings.contains_key(provider)
    }

    /// Bound, and bound with the plugin capability
    pub fn provides_plugin(&self, provider: &str) -> bool {
        matches!(self.bindings.get(provider), Some(ProviderBinding::Plugin(_)))
    }

    /// Build a new plugin instance for `provider`
    pub fn make(&self, provider: &str) -> Result<Arc<dyn Plugin>, PluginSystemError> {
        match self.bindings.get(provider) {
            Some(ProviderBinding::Plugin(factory)) => factory(),
            Some(ProviderBinding::Service) => Err(PluginSystemError::ResolutionFailed {
                provider: provider.to_string(),
                message: "provider does not implement the plugin capability".to_string(),
            }),
            None => Err(PluginSystemError::ResolutionFailed {
                provider: provider.to_string(),
                message: "provider is not bound in the container".to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
