//! # Kiln Core Logging
//!
//! The `core-logging` plugin and the process-wide `tracing` subscriber it
//! relies on. Kiln crates log through the `log` facade; [`init_subscriber`]
//! forwards those records into `tracing` and prints them to stderr.
use kiln_core::plugin_system::error::PluginSystemError;
use kiln_core::plugin_system::traits::{EnabledFlag, Plugin};
use kiln_core::Panel;
use tracing_subscriber::EnvFilter;

pub const PLUGIN_ID: &str = "core-logging";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level`. An unparsable `default_level` falls
/// back to `info`. Fails if a subscriber or `log` bridge is already installed.
pub fn init_subscriber(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Exposes the log viewer on the panel.
#[derive(Debug, Default)]
pub struct LoggingPlugin {
    enabled: EnabledFlag,
}

impl LoggingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for LoggingPlugin {
    fn id(&self) -> &str {
        PLUGIN_ID
    }

    fn name(&self) -> &str {
        "Core Logging"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &str {
        "Structured application logging and the log viewer"
    }

    fn author(&self) -> &str {
        "Kiln Developers"
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn enable(&self) {
        self.enabled.set(true);
    }

    fn disable(&self) {
        self.enabled.set(false);
    }

    fn register(&self, panel: &mut Panel) -> Result<(), PluginSystemError> {
        panel.attach(PLUGIN_ID);
        panel.add_navigation_item(PLUGIN_ID, "Logs");
        log::info!("Core logging registered with panel '{}'", panel.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
