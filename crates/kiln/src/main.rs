mod providers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kiln_core::kernel::constants::DEFAULT_CONFIG_FILE;
use kiln_core::{Application, KernelError, KilnConfig, PluginManager};
use log::{info, warn};

/// Kiln: discovers installed plugins and boots them in dependency order
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Configuration file (JSON, TOML or YAML)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Application root the lock file is resolved against
    #[arg(long)]
    base_path: Option<PathBuf>,

    /// Simple ping command for testing
    #[arg(long)]
    ping: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect plugins
    Plugin {
        #[command(subcommand)]
        command: PluginCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PluginCommand {
    /// List registered plugins
    List,
    /// Print the plugin manifest as JSON
    Manifest,
    /// Print booted plugin ids in boot order
    BootOrder,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.ping {
        println!("pong");
        return;
    }

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<(), KernelError> {
    let mut config = KilnConfig::load(&args.config)?;
    if let Some(base_path) = args.base_path {
        config.base_path = base_path;
    }
    config.apply_env_overrides();

    if let Err(e) = core_logging::init_subscriber(&config.log_level) {
        eprintln!("Logging unavailable: {}", e);
    }

    let mut app = Application::new(config, providers::container())?;
    app.start().await?;

    let plugin_manager = app.plugin_manager();
    match args.command {
        Some(Commands::Plugin { command }) => match command {
            PluginCommand::List => {
                let registry = plugin_manager.registry().lock().await;
                if registry.is_empty() {
                    println!("No plugins registered.");
                }
                for (id, plugin) in registry.all() {
                    let status = if plugin.is_enabled() { "enabled" } else { "disabled" };
                    let booted = if registry.is_booted(id) { "booted" } else { "not booted" };
                    println!("{} {} [{}, {}]", id, plugin.version(), status, booted);
                }
            }
            PluginCommand::Manifest => {
                let manifest = plugin_manager.manifest().await;
                let json = manifest
                    .to_json()
                    .map_err(|e| format!("Failed to serialize manifest: {}", e))?;
                println!("{}", json);
            }
            PluginCommand::BootOrder => {
                let registry = plugin_manager.registry().lock().await;
                for id in registry.boot_sequence() {
                    println!("{}", id);
                }
            }
        },
        None => {
            let manifest = plugin_manager.manifest().await;
            if manifest.is_empty() {
                warn!("No plugins discovered");
            }
            println!(
                "Kiln ready: {} plugin(s) on panel '{}'",
                manifest.len(),
                app.panel().id()
            );
        }
    }

    info!("Shutting down");
    Ok(())
}
