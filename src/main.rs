//! hubmap - Terminal map explorer for linked place collections
//!
//! This application renders hubs and the places linked to them on a pannable,
//! zoomable terminal map, with a detail sidebar and mouse-driven drilldown.

// Module declarations
mod cli;
mod config;
mod constants;
mod map;
mod models;
mod parser;
mod services;
mod shortcuts;
mod tui;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{ConfigArgs, ValidateArgs};
use config::{Config, ThemeMode};
use constants::{APP_BINARY_NAME, APP_NAME};
use services::DataIndex;

/// hubmap - Terminal map explorer for linked place collections
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Directory holding places.csv, links.csv, and items.csv
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the CSV tables for dangling references
    Validate(ValidateArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Subcommands run headless; no terminal takeover, no banner
    if let Some(command) = cli.command {
        return match command {
            Command::Validate(args) => args.execute(),
            Command::Config(args) => args.execute(),
        };
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    apply_overrides(&mut config, &cli)?;
    config.validate()?;

    init_logging(&config)?;

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal map explorer for linked place collections");
    println!();

    // A failed load still opens the map: the empty index renders, the error
    // overlay explains, and 'r' retries once the files are fixed.
    let load_result = parser::load_tables(
        &config.data.places_path(),
        &config.data.links_path(),
        &config.data.items_path(),
    );
    let (index, load_error) = match load_result {
        Ok(tables) => (DataIndex::build(&tables), None),
        Err(err) => {
            error!("initial data load failed: {err:#}");
            (DataIndex::default(), Some(format!("{err:#}")))
        }
    };

    let mut state = tui::AppState::new(config, index);
    if let Some(message) = load_error {
        state.set_status("Press 'r' to retry once the data files are in place");
        state.set_error(format!("Failed to load data: {message}"));
    }

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore the terminal even when the loop errored
    tui::restore_terminal(terminal)?;

    result
}

/// Fold command-line flags into the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(dir) = &cli.data_dir {
        config.data.dir = Some(dir.clone());
    }

    if let Some(mode) = &cli.theme {
        config.ui.theme_mode = match mode.to_lowercase().as_str() {
            "auto" => ThemeMode::Auto,
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => bail!("Invalid theme mode '{mode}'. Must be 'auto', 'light', or 'dark'"),
        };
    }

    if let Some(path) = &cli.log_file {
        config.log.file = Some(path.clone());
    }

    Ok(())
}

/// Route tracing output to the configured log file.
///
/// Stdout belongs to the alternate screen while the map runs, so logging
/// stays off unless a file is configured.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log.file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
