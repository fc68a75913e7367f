/// A navigation entry contributed by a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub plugin_id: String,
    pub label: String,
}

/// Host surface that enabled plugins register themselves with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    id: String,
    plugins: Vec<String>,
    navigation: Vec<NavigationItem>,
}

impl Panel {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            plugins: Vec::new(),
            navigation: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record that a plugin is attached to this panel. Attaching twice is a no-op.
    pub fn attach(&mut self, plugin_id: &str) {
        if !self.has_plugin(plugin_id) {
            self.plugins.push(plugin_id.to_string());
        }
    }

    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|p| p == plugin_id)
    }

    /// Attached plugin ids, in attach order
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn add_navigation_item(&mut self, plugin_id: &str, label: &str) {
        self.navigation.push(NavigationItem {
            plugin_id: plugin_id.to_string(),
            label: label.to_string(),
        });
    }

    pub fn navigation(&self) -> &[NavigationItem] {
        &self.navigation
    }
}
