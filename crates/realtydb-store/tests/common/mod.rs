//! Shared fixtures for store integration tests

use realtydb_core::CellValue;
use realtydb_store::{initialize, SqliteTabularStore};
use rusqlite::Connection;
use tempfile::TempDir;

/// Fresh in-memory store with the agency schema and seed rows
pub fn seeded_store() -> SqliteTabularStore {
    let mut conn = Connection::open_in_memory().unwrap();
    initialize(&mut conn).unwrap();
    SqliteTabularStore::from_connection(conn)
}

/// Store over an arbitrary schema script
#[allow(dead_code)]
pub fn store_with(sql: &str) -> SqliteTabularStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(sql).unwrap();
    SqliteTabularStore::from_connection(conn)
}

/// Temp directory holding a seeded `mydb.sqlite3`
#[allow(dead_code)]
pub fn seeded_file() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mydb.sqlite3");
    let mut conn = Connection::open(&path).unwrap();
    initialize(&mut conn).unwrap();
    (dir, path)
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Text cells, as the edit dialog submits changed fields
#[allow(dead_code)]
pub fn texts(values: &[&str]) -> Vec<CellValue> {
    values.iter().map(|v| CellValue::from(*v)).collect()
}
