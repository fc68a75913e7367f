use super::*;

#[test]
fn logging_plugin_metadata() {
    let plugin = LoggingPlugin::new();
    assert_eq!(plugin.id(), "core-logging");
    assert_eq!(plugin.version(), env!("CARGO_PKG_VERSION"));
    assert!(plugin.dependencies().is_empty());
    assert!(plugin.is_enabled());
}

#[test]
fn logging_plugin_registers_log_viewer() {
    let plugin = LoggingPlugin::new();
    let mut panel = Panel::new("admin");

    plugin.register(&mut panel).unwrap();
    plugin.boot(&mut panel).unwrap();

    assert!(panel.has_plugin("core-logging"));
    assert_eq!(panel.navigation().len(), 1);
    assert_eq!(panel.navigation()[0].label, "Logs");
}

#[test]
fn logging_plugin_toggles() {
    let plugin = LoggingPlugin::new();
    plugin.disable();
    assert!(!plugin.is_enabled());
    plugin.enable();
    assert!(plugin.is_enabled());
}

#[test]
fn init_subscriber_bridges_log_facade() {
    assert_eq!(log::max_level(), log::LevelFilter::Off);
    assert!(init_subscriber("debug").is_ok());
    assert_eq!(log::max_level(), log::LevelFilter::Trace, "log records reach tracing");

    let mut panel = Panel::new("admin");
    LoggingPlugin::new().register(&mut panel).unwrap();
    assert!(panel.has_plugin(PLUGIN_ID));

    assert!(init_subscriber("debug").is_err(), "A second global subscriber is rejected");
}
