//! realtydb Core - schema-agnostic table editing
//!
//! This crate provides the pieces of the database browser that do not depend
//! on a particular store:
//! - Structured error facility and logging facility
//! - Cell, row and catalog models
//! - The `TabularStore` capability trait
//! - The per-table editor state machine (add, edit, delete, sort, search)
//! - Flat-text report rendering

pub mod editor;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use editor::{Confirmed, Editor, Notice, TabMode, TableTab};
pub use errors::{AppError, AppErrorKind, EditorError, Result};
pub use model::{CellValue, ColumnInfo, MatchMode, Row, RowKey, SortOrder, TableSchema};
pub use store::TabularStore;
