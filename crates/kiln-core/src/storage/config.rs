use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kernel::constants;
use crate::plugin_system::dependency::DependencyCheck;
use crate::storage::error::StorageSystemError;

type Result<T> = std::result::Result<T, StorageSystemError>;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Lock file discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Whether plugins are discovered from the lock file at startup
    pub enabled: bool,
    /// Lock file path, relative to `base_path` unless absolute
    pub lock_file: PathBuf,
    /// Key under each package's `extra` section listing its providers
    pub extra_namespace: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lock_file: PathBuf::from(constants::DEFAULT_LOCK_FILE),
            extra_namespace: constants::DEFAULT_EXTRA_NAMESPACE.to_string(),
        }
    }
}

/// Host configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KilnConfig {
    /// Application root the lock file is resolved against
    pub base_path: PathBuf,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Id of the panel plugins register with
    pub panel: String,
    pub dependency_check: DependencyCheck,
    /// Plugin ids to disable after discovery
    pub disabled: Vec<String>,
    pub discovery: DiscoveryConfig,
}

impl Default for KilnConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            log_level: "info".to_string(),
            panel: constants::DEFAULT_PANEL_ID.to_string(),
            dependency_check: DependencyCheck::default(),
            disabled: Vec::new(),
            discovery: DiscoveryConfig::default(),
        }
    }
}

impl KilnConfig {
    /// Load configuration from `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| StorageSystemError::UnsupportedConfigFormat(path.display().to_string()))?;
        let data = std::fs::read_to_string(path)
            .map_err(|e| StorageSystemError::io(e, "read_config", path.to_path_buf()))?;
        Self::deserialize(&data, format)
    }

    /// Deserialize from string based on format
    pub fn deserialize(data: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| {
                StorageSystemError::DeserializationError { format: "json".to_string(), source: Box::new(e) }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| {
                StorageSystemError::DeserializationError { format: "yaml".to_string(), source: Box::new(e) }
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| {
                StorageSystemError::DeserializationError { format: "toml".to_string(), source: Box::new(e) }
            }),
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(constants::DISCOVERY_ENV_VAR) {
            self.apply_discovery_override(&raw);
        }
    }

    /// Apply a `KILN_PLUGIN_DISCOVERY` style value. Unrecognised values are ignored.
    pub fn apply_discovery_override(&mut self, raw: &str) {
        match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => self.discovery.enabled = true,
            "0" | "false" | "no" | "off" => self.discovery.enabled = false,
            other => log::warn!(
                "Ignoring {}='{}': expected true or false",
                constants::DISCOVERY_ENV_VAR,
                other
            ),
        }
    }

    /// The lock file path resolved against `base_path`
    pub fn lock_file_path(&self) -> PathBuf {
        if self.discovery.lock_file.is_absolute() {
            self.discovery.lock_file.clone()
        } else {
            self.base_path.join(&self.discovery.lock_file)
        }
    }
}
