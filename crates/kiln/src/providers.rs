use std::sync::Arc;

use blog::BlogPlugin;
use core_logging::LoggingPlugin;
use kiln_core::ProviderContainer;

pub const LOGGING_PROVIDER: &str = "core_logging::LoggingPlugin";
pub const BLOG_PROVIDER: &str = "blog::BlogPlugin";
pub const CONSOLE_PROVIDER: &str = "kiln::ConsoleServiceProvider";

/// Registers console commands with the host. Resolvable from lock files,
/// but not a plugin, so discovery skips it.
#[derive(Debug)]
pub struct ConsoleServiceProvider;

impl ConsoleServiceProvider {
    pub fn bind(container: &mut ProviderContainer) {
        container.bind_service(CONSOLE_PROVIDER);
    }
}

/// Provider bindings for everything this binary ships with.
pub fn container() -> ProviderContainer {
    let mut container = ProviderContainer::new();
    container
        .bind_plugin(LOGGING_PROVIDER, || Ok(Arc::new(LoggingPlugin::new())))
        .bind_plugin(BLOG_PROVIDER, || Ok(Arc::new(BlogPlugin::new())));
    ConsoleServiceProvider::bind(&mut container);
    container
}
