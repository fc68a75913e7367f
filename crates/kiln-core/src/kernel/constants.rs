/// Application name
pub const APP_NAME: &str = "Kiln";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version reported by plugins that do not declare one
pub const DEFAULT_PLUGIN_VERSION: &str = "1.0.0";

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "kiln.toml";

/// Default dependency lock file, relative to the application base path
pub const DEFAULT_LOCK_FILE: &str = "kiln.lock";

/// Key under a locked package's `extra` section that lists its providers
pub const DEFAULT_EXTRA_NAMESPACE: &str = "kiln";

/// Default panel plugins are registered with
pub const DEFAULT_PANEL_ID: &str = "admin";

/// Environment variable overriding `discovery.enabled`
pub const DISCOVERY_ENV_VAR: &str = "KILN_PLUGIN_DISCOVERY";
