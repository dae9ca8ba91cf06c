//! Report command
//!
//! Usage: realtydb report <PATH> [--db <PATH>]

use clap::Args;
use realtydb_core::render::write_report;
use realtydb_store::SqliteTabularStore;
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output file, replaced if it exists
    pub path: PathBuf,
}

/// Write the report of every table without opening the browser
pub fn execute(settings: &Settings, args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTabularStore::open(&settings.database)?;
    let summary = write_report(&store, &args.path)?;

    println!(
        "Report written to {} ({} tables, {} rows)",
        args.path.display(),
        summary.tables,
        summary.rows
    );
    Ok(())
}
