use std::sync::Arc;

use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::plugin_system::{
    DefaultPluginManager, Panel, PluginDiscovery, PluginManager, ProviderContainer,
};
use crate::storage::KilnConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartState {
    NotStarted,
    Started,
    Failed,
}

/// Main application struct: one plugin manager and one panel per process.
pub struct Application {
    config: KilnConfig,
    plugin_manager: Arc<DefaultPluginManager>,
    panel: Panel,
    state: StartState,
}

impl Application {
    /// Build the application from configuration and the host's provider bindings.
    pub fn new(config: KilnConfig, container: ProviderContainer) -> Result<Self> {
        log::info!("Initializing {} v{}", constants::APP_NAME, constants::APP_VERSION);

        if config.discovery.extra_namespace.trim().is_empty() {
            return Err(Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Bootstrap,
                message: "discovery.extra_namespace must not be empty".to_string(),
            });
        }

        let discovery = PluginDiscovery::new(
            config.lock_file_path(),
            &config.discovery.extra_namespace,
            Arc::new(container),
        );
        log::info!("Using lock file: {}", discovery.lock_path().display());

        let plugin_manager = Arc::new(DefaultPluginManager::new(discovery, config.dependency_check));
        let panel = Panel::new(&config.panel);

        Ok(Self {
            config,
            plugin_manager,
            panel,
            state: StartState::NotStarted,
        })
    }

    /// Discover, boot and register plugins with the panel.
    ///
    /// Disabled ids from the configuration are applied after discovery and
    /// before booting. Runs at most once: after a failed start the registry
    /// may already hold discovered plugins, so retrying is rejected too.
    pub async fn start(&mut self) -> Result<()> {
        match self.state {
            StartState::NotStarted => {}
            StartState::Started => return Err(start_error("Application already started")),
            StartState::Failed => {
                return Err(start_error("A previous start failed; build a new Application to retry"));
            }
        }

        match self.run_start().await {
            Ok(()) => {
                self.state = StartState::Started;
                log::info!("{} started with panel '{}'", constants::APP_NAME, self.panel.id());
                Ok(())
            }
            Err(e) => {
                self.state = StartState::Failed;
                log::error!("{} failed to start: {}", constants::APP_NAME, e);
                Err(e)
            }
        }
    }

    async fn run_start(&mut self) -> Result<()> {
        if self.config.discovery.enabled {
            let count = self.plugin_manager.discover().await?;
            log::info!("Registered {} discovered plugin(s)", count);
        } else {
            log::info!("Plugin discovery disabled");
        }

        {
            let registry = self.plugin_manager.registry().lock().await;
            for id in &self.config.disabled {
                if registry.has(id) {
                    registry.disable(id)?;
                    log::info!("Plugin '{}' disabled by configuration", id);
                } else {
                    log::warn!("Cannot disable unknown plugin '{}'", id);
                }
            }
        }

        self.plugin_manager.boot_all().await?;
        self.plugin_manager.register_with_panel(&mut self.panel).await?;
        Ok(())
    }

    /// True once `start` has completed successfully
    pub fn is_started(&self) -> bool {
        self.state == StartState::Started
    }

    pub fn config(&self) -> &KilnConfig {
        &self.config
    }

    pub fn plugin_manager(&self) -> Arc<DefaultPluginManager> {
        self.plugin_manager.clone()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }
}

fn start_error(message: &str) -> Error {
    Error::KernelLifecycleError {
        phase: KernelLifecyclePhase::Start,
        message: message.to_string(),
    }
}
