//! Configuration management commands.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::constants::APP_NAME;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Display the current configuration
    Show,
    /// Write a default config file to edit
    Init,
}

impl ConfigArgs {
    /// Execute the config subcommand
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            ConfigCommand::Path => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
            ConfigCommand::Show => show(),
            ConfigCommand::Init => init(),
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    println!("{APP_NAME} Configuration");
    println!("====================");
    println!();

    println!("Data:");
    println!("  Places: {}", config.data.places_path().display());
    println!("  Links:  {}", config.data.links_path().display());
    println!("  Items:  {}", config.data.items_path().display());
    println!();

    println!("Map:");
    println!(
        "  Center: {:.4}, {:.4}",
        config.map.center_lat, config.map.center_lon
    );
    println!("  Zoom:   {}", config.map.zoom);
    println!();

    println!("UI:");
    println!(
        "  Theme Mode:    {}",
        format!("{:?}", config.ui.theme_mode).to_lowercase()
    );
    println!("  Sidebar Width: {}", config.ui.sidebar_width);
    println!("  Show Welcome:  {}", config.ui.show_welcome);
    println!("  Legend Rows:   {}", config.ui.legend.len());
    println!();

    println!("Log:");
    match &config.log.file {
        Some(path) => println!("  File:  {}", path.display()),
        None => println!("  File:  (disabled)"),
    }
    println!("  Level: {}", config.log.level);
    println!();

    Ok(())
}

fn init() -> Result<()> {
    let path = Config::config_file_path()?;
    if Config::exists() {
        bail!("Configuration already exists at {}", path.display());
    }
    Config::default()
        .save()
        .context("Failed to write configuration")?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
