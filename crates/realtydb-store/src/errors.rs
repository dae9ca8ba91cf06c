//! Error handling for realtydb-store
//!
//! Wraps realtydb-core AppError with store-specific helpers

use realtydb_core::errors::{AppError, AppErrorKind};

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Create a setup script error
pub fn setup_error(script_id: &str, err: rusqlite::Error) -> AppError {
    let base = from_rusqlite(err);
    let message = format!("Setup script {} failed: {}", script_id, base.message());
    base.with_op("setup").with_message(message)
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures (duplicate keys, NOT NULL) map to `ConstraintViolation`,
/// everything else to `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> AppError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppErrorKind::ConstraintViolation
        }
        _ => AppErrorKind::Persistence,
    };
    AppError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_duplicate_key_is_constraint_violation() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INT PRIMARY KEY); INSERT INTO t VALUES (1);")
            .unwrap();
        let err = conn.execute("INSERT INTO t VALUES (1)", []).unwrap_err();

        let app_err = from_rusqlite(err);
        assert_eq!(app_err.kind(), AppErrorKind::ConstraintViolation);
        assert!(app_err.message().contains("UNIQUE"));
    }

    #[test]
    fn test_syntax_error_is_persistence() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("SELEC 1", []).unwrap_err();

        assert_eq!(from_rusqlite(err).kind(), AppErrorKind::Persistence);
    }

    #[test]
    fn test_setup_error_names_script() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute_batch("CREATE TABLE").unwrap_err();

        let app_err = setup_error("001_schema", err);
        assert_eq!(app_err.op(), Some("setup"));
        assert!(app_err.message().starts_with("Setup script 001_schema failed"));
    }
}
