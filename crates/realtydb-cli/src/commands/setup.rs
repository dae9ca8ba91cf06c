//! Setup command
//!
//! Usage: realtydb setup [--db <PATH>]

use crate::config::Settings;

/// Printed once every script has committed
pub const SUCCESS_MESSAGE: &str = "Tables created and data inserted successfully.";

/// Create the agency tables and insert the sample rows
///
/// Runs unconditionally: a store that already holds the tables makes the
/// first CREATE fail and nothing is committed.
pub fn execute(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = realtydb_store::db::open(&settings.database)?;
    let summary = realtydb_store::initialize(&mut conn)?;

    tracing::info!(
        path = %settings.database.display(),
        tables = summary.tables.len(),
        "store initialized"
    );
    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
