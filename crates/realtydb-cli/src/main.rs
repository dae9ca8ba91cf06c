//! realtydb CLI
//!
//! Command-line interface for the realty agency database browser

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod tui;

use config::Settings;

#[derive(Debug, Parser)]
#[command(name = "realtydb")]
#[command(about = "realtydb - Realty agency database browser", long_about = None)]
struct Cli {
    /// SQLite database file (overrides REALTYDB_DB and the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Configuration file (default: ./realtydb.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the agency tables and insert the sample rows
    Setup,
    /// Open the interactive table browser
    Browse,
    /// Write the plain-text report of every table
    Report(commands::report::ReportArgs),
    /// List tables with their columns and row counts
    Tables,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(cli.config.as_deref(), cli.db)?;
    init_logging(&settings, matches!(cli.command, Commands::Browse))?;

    match cli.command {
        Commands::Setup => commands::setup::execute(&settings),
        Commands::Browse => commands::browse::execute(&settings),
        Commands::Report(args) => commands::report::execute(&settings, args),
        Commands::Tables => commands::tables::execute(&settings),
    }
}

/// Install the subscriber chosen by the `[logging]` settings
///
/// The browser owns the terminal, so it only logs when a file is configured.
fn init_logging(settings: &Settings, interactive: bool) -> realtydb_core::Result<()> {
    let Some(profile) = settings.logging.profile.as_profile() else {
        return Ok(());
    };
    match &settings.logging.file {
        Some(path) => realtydb_core::logging_facility::init_to_file(profile, path),
        None if interactive => Ok(()),
        None => {
            realtydb_core::logging_facility::init(profile);
            Ok(())
        }
    }
}
