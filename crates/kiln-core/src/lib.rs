pub mod kernel;
pub mod plugin_system;
pub mod storage;

// Re-export key public types/traits for easier use by the binary and plugins
pub use kernel::Application;
pub use kernel::error::Error as KernelError;
pub use plugin_system::{
    Plugin, PluginManifest, PluginManager, PluginRegistry, DefaultPluginManager,
    PluginDiscovery, ProviderContainer, Panel,
};
pub use storage::KilnConfig;
