//! # Kiln Core Plugin System Errors
//!
//! [`PluginSystemError`] covers registration, boot and resolution failures.
//! Lock file problems found while discovering plugins are reported through
//! [`DiscoveryError`] and wrapped by the `Discovery` variant.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Plugin '{plugin_id}' is already registered")]
    DuplicateRegistration { plugin_id: String },

    #[error("Plugin '{plugin_id}' dependencies not satisfied: {}", .missing.join(", "))]
    UnsatisfiedDependency {
        plugin_id: String,
        missing: Vec<String>,
    },

    #[error("Plugin '{plugin_id}' is not registered")]
    NotRegistered { plugin_id: String },

    #[error("Circular plugin dependency detected: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    #[error("Failed to resolve provider '{provider}': {message}")]
    ResolutionFailed { provider: String, message: String },

    #[error("Plugin '{plugin_id}' failed during panel {hook}: {message}")]
    HookFailed {
        plugin_id: String,
        hook: &'static str,
        message: String,
    },

    #[error("Plugin discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Failed to read lock file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed lock file '{path}': {source}")]
    MalformedLockFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PluginSystemError {
    pub(crate) fn not_registered(plugin_id: &str) -> Self {
        PluginSystemError::NotRegistered {
            plugin_id: plugin_id.to_string(),
        }
    }
}
