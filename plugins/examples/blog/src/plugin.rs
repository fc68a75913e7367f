use kiln_core::plugin_system::error::PluginSystemError;
use kiln_core::plugin_system::traits::{EnabledFlag, Plugin};
use kiln_core::Panel;

pub const PLUGIN_ID: &str = "blog";

/// Adds posts and categories to the panel. Needs `core-logging` booted first.
#[derive(Debug, Default)]
pub struct BlogPlugin {
    enabled: EnabledFlag,
}

impl BlogPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for BlogPlugin {
    fn id(&self) -> &str {
        PLUGIN_ID
    }

    fn name(&self) -> &str {
        "Blog"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &str {
        "Posts and categories"
    }

    fn author(&self) -> &str {
        "Kiln Developers"
    }

    fn dependencies(&self) -> Vec<String> {
        vec!["core-logging".to_string()]
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
        panel.add_navigation_item(PLUGIN_ID, "Posts");
        panel.add_navigation_item(PLUGIN_ID, "Categories");
        Ok(())
    }

    fn boot(&self, panel: &mut Panel) -> Result<(), PluginSystemError> {
        log::info!("Blog ready on panel '{}'", panel.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
