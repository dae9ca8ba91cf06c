//! Setup runner
//!
//! Applies every embedded script inside one transaction

#![allow(clippy::result_large_err)]

use realtydb_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;

use crate::errors::{from_rusqlite, setup_error, Result};
use crate::schema::embedded::get_scripts;

/// What a successful setup did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSummary {
    /// Script ids in the order they ran
    pub scripts: Vec<&'static str>,
    /// User tables present after commit, in catalog order
    pub tables: Vec<String>,
}

/// Create the schema and insert the seed rows
///
/// All scripts run in one transaction that commits at the end. If any
/// statement fails the transaction is rolled back and the store is unchanged.
pub fn initialize(conn: &mut Connection) -> Result<SetupSummary> {
    log_op_start!("setup");
    let start = std::time::Instant::now();

    let result = initialize_impl(conn).map_err(|e| {
        log_op_error!(
            "setup",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "setup",
        duration_ms = start.elapsed().as_millis() as u64,
        tables = result.tables.len()
    );

    Ok(result)
}

fn initialize_impl(conn: &mut Connection) -> Result<SetupSummary> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut applied = Vec::new();
    for script in get_scripts() {
        tx.execute_batch(script.sql)
            .map_err(|e| setup_error(script.id, e))?;
        tracing::debug!(script = script.id, "setup script applied");
        applied.push(script.id);
    }

    tx.commit().map_err(from_rusqlite)?;

    let tables = user_tables(conn)?;
    Ok(SetupSummary {
        scripts: applied,
        tables,
    })
}

fn user_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
             ORDER BY rowid",
        )
        .map_err(from_rusqlite)?;
    let tables = stmt
        .query_map([], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;
    Ok(tables)
}
