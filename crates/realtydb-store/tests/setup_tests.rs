// Schema bootstrap against on-disk stores

mod common;

use common::seeded_file;
use realtydb_core::{AppErrorKind, TabularStore};
use realtydb_store::{initialize, SqliteTabularStore};
use rusqlite::Connection;

const TABLES: [&str; 5] = ["Client", "Realtor", "Contract", "Property", "Viewing"];

#[test]
fn test_setup_creates_five_tables_with_two_rows_each() {
    let (_dir, path) = seeded_file();
    let store = SqliteTabularStore::open(&path).unwrap();

    assert_eq!(store.list_tables().unwrap(), TABLES);
    for table in TABLES {
        assert_eq!(store.count_rows(table).unwrap(), 2, "table {}", table);
    }
}

#[test]
fn test_setup_seed_values() {
    let (_dir, path) = seeded_file();
    let store = SqliteTabularStore::open(&path).unwrap();

    let clients = store.list_rows("Client", None).unwrap();
    assert_eq!(
        clients[0].display_values(),
        vec!["1", "Иван Иванов", "1234567890", "ул. Главная, д. 1"]
    );
    let viewings = store.list_rows("Viewing", None).unwrap();
    assert_eq!(viewings[1].joined(), "2, 2, 2, 2022-04-20");
}

#[test]
fn test_second_setup_fails_and_leaves_data_alone() {
    let (_dir, path) = seeded_file();
    let mut conn = Connection::open(&path).unwrap();

    let err = initialize(&mut conn).unwrap_err();
    assert_eq!(err.kind(), AppErrorKind::Persistence);
    assert_eq!(err.op(), Some("setup"));
    assert!(err.message().contains("001_schema"));

    let store = SqliteTabularStore::from_connection(conn);
    assert_eq!(store.count_rows("Client").unwrap(), 2);
}

#[test]
fn test_failed_setup_commits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.sqlite3");
    let mut conn = Connection::open(&path).unwrap();
    // Only the last CREATE collides, so earlier tables would exist without the rollback
    conn.execute_batch("CREATE TABLE Viewing (Note TEXT);")
        .unwrap();

    assert!(initialize(&mut conn).is_err());

    let store = SqliteTabularStore::from_connection(conn);
    assert_eq!(store.list_tables().unwrap(), vec!["Viewing"]);
}

#[test]
fn test_setup_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.sqlite3");
    assert!(!path.exists());

    let mut conn = Connection::open(&path).unwrap();
    let summary = initialize(&mut conn).unwrap();

    assert!(path.exists());
    assert_eq!(summary.tables.len(), 5);
}

#[test]
fn test_open_rejects_non_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not a database\n".repeat(64)).unwrap();

    let err = SqliteTabularStore::open(&path).err().unwrap();
    assert_eq!(err.kind(), AppErrorKind::Persistence);
}
