//! Tables command
//!
//! Usage: realtydb tables [--db <PATH>]

use realtydb_core::TabularStore;
use realtydb_store::SqliteTabularStore;

use crate::config::Settings;

/// Print one line per table: name, columns and row count
pub fn execute(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTabularStore::open(&settings.database)?;

    let tables = store.list_tables()?;
    if tables.is_empty() {
        println!("No tables in {}", settings.database.display());
        return Ok(());
    }

    for table in tables {
        let columns: Vec<String> = store
            .list_columns(&table)?
            .into_iter()
            .map(|c| c.name)
            .collect();
        let count = store.count_rows(&table)?;
        println!("{} ({} rows): {}", table, count, columns.join(", "));
    }
    Ok(())
}
