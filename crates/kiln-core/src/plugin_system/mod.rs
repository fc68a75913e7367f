//! # Kiln Core Plugin System
//!
//! Registration, discovery and dependency-ordered booting of plugins.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`traits`]**: the [`Plugin`] trait every plugin implements, plus
//!   [`EnabledFlag`] for the shared enabled state.
//! - **[`registry`]**: [`PluginRegistry`], the authoritative id -> plugin map with
//!   the booted set and `boot`/`boot_all`.
//! - **[`dependency`]**: [`DependencyCheck`] policy and the boot order planner
//!   with cycle detection.
//! - **[`container`]**: [`ProviderContainer`], binding provider names to plugin
//!   factories.
//! - **[`discovery`]**: [`PluginDiscovery`], instantiating plugins advertised in
//!   the dependency lock file.
//! - **[`manifest`]**: [`PluginManifest`], a serializable metadata snapshot.
//! - **[`manager`]**: [`DefaultPluginManager`], the shared, lock-guarded registry
//!   paired with discovery.
//! - **[`panel`]**: [`Panel`], the host surface enabled plugins register with.
//! - **[`error`]**: [`PluginSystemError`] and [`DiscoveryError`](error::DiscoveryError).
pub mod container;
pub mod dependency;
pub mod discovery;
pub mod error;
pub mod manager;
pub mod manifest;
pub mod panel;
pub mod registry;
pub mod traits;

pub use container::{ProviderContainer, ProviderBinding};
pub use dependency::DependencyCheck;
pub use discovery::PluginDiscovery;
pub use error::PluginSystemError;
pub use manager::{PluginManager, DefaultPluginManager};
pub use manifest::{PluginManifest, ManifestRecord};
pub use panel::Panel;
pub use registry::PluginRegistry;
pub use traits::{Plugin, EnabledFlag};

// Test module declaration
#[cfg(test)]
mod tests;
