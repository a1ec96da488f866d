use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::domain::Catalog;
use crate::state::{App, AppConfig};

// NovaCrust version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
███╗   ██╗ ██████╗ ██╗   ██╗ █████╗  ██████╗██████╗ ██╗   ██╗███████╗████████╗
████╗  ██║██╔═══██╗██║   ██║██╔══██╗██╔════╝██╔══██╗██║   ██║██╔════╝╚══██╔══╝
██╔██╗ ██║██║   ██║██║   ██║███████║██║     ██████╔╝██║   ██║███████╗   ██║
██║╚██╗██║██║   ██║╚██╗ ██╔╝██╔══██║██║     ██╔══██╗██║   ██║╚════██║   ██║
██║ ╚████║╚██████╔╝ ╚████╔╝ ██║  ██║╚██████╗██║  ██║╚██████╔╝███████║   ██║
╚═╝  ╚═══╝ ╚═════╝   ╚═══╝  ╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝   ╚═╝
"#;

/// NovaCrust - Terminal checkout for converting crypto to cash
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load settings from this file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in option catalogs as JSON
    Catalog,
    /// Show the config file location and effective settings
    Config {
        /// Write the default settings to the config file
        #[arg(long)]
        init: bool,
    },
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return handle_command(command, &cli);
    }

    let _logging = logging::init();
    let config = load_config(&cli)?;
    let mouse = config.mouse && !cli.no_mouse;
    tracing::info!(version = VERSION, mouse, "starting checkout");

    let mut terminal = tui::init(mouse)?;
    let mut app = App::new(config, Arc::new(Catalog::builtin()));
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}

/// Loads settings. An explicit `--config` path must exist and parse; the
/// default location falls back to defaults.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    match &cli.config {
        Some(path) => AppConfig::load_from(path).map_err(|e| e.into_report()),
        None => Ok(AppConfig::load()),
    }
}

fn handle_command(command: &Commands, cli: &Cli) -> Result<()> {
    match command {
        Commands::Catalog => {
            let json = serde_json::to_string_pretty(&Catalog::builtin())?;
            println!("{json}");
        }
        Commands::Config { init } => {
            let path = match (&cli.config, *init) {
                (Some(path), true) => {
                    AppConfig::default()
                        .save_to(path)
                        .map_err(|e| e.into_report())?;
                    path.clone()
                }
                (None, true) => AppConfig::default().save().map_err(|e| e.into_report())?,
                (Some(path), false) => path.clone(),
                (None, false) => AppConfig::config_path().map_err(|e| e.into_report())?,
            };
            if *init {
                println!("Wrote default settings to {}", path.display());
            } else {
                println!("Config file: {}", path.display());
            }
            println!("Log directory: {}", logging::log_dir().display());
            let config = load_config(cli)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Version => {
            println!("{LOGO}");
            println!("NovaCrust v{VERSION}");
            println!("A terminal checkout for converting crypto to cash");
        }
    }
    Ok(())
}
