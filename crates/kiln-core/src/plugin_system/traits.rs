use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::kernel::constants::DEFAULT_PLUGIN_VERSION;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::panel::Panel;

/// Enabled state shared by a plugin and everything holding an `Arc` to it.
///
/// Plugins are stored as `Arc<dyn Plugin>`, so toggling goes through `&self`.
/// New flags start enabled.
pub struct EnabledFlag(AtomicBool);

impl EnabledFlag {
    pub fn new(enabled: bool) -> Self {
        Self(AtomicBool::new(enabled))
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::SeqCst);
    }
}

impl Default for EnabledFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

impl fmt::Debug for EnabledFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnabledFlag").field(&self.get()).finish()
    }
}

/// Core trait that all plugins must implement
pub trait Plugin: Send + Sync {
    /// Unique, stable identifier used as the registry key
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Semantic version string
    fn version(&self) -> &str {
        DEFAULT_PLUGIN_VERSION
    }

    fn description(&self) -> &str {
        ""
    }

    fn author(&self) -> &str {
        ""
    }

    /// Ids of plugins that must be booted before this one, in boot order
    fn dependencies(&self) -> Vec<String> {
        Vec::new()
    }

    /// Whether the plugin currently takes part in boot and panel registration
    fn is_enabled(&self) -> bool;

    fn enable(&self);

    fn disable(&self);

    /// Contribute to a panel. Called once per enabled plugin by
    /// [`PluginRegistry::register_with_panel`](crate::plugin_system::PluginRegistry::register_with_panel).
    fn register(&self, panel: &mut Panel) -> Result<(), PluginSystemError>;

    /// Runs right after [`Plugin::register`] for the same panel.
    fn boot(&self, _panel: &mut Panel) -> Result<(), PluginSystemError> {
        Ok(())
    }
}

impl fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("id", &self.id())
            .field("version", &self.version())
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}
