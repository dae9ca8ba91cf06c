//! realtydb Store - SQLite persistence for the table browser
//!
//! Provides:
//! - Connection helpers
//! - The one-shot schema bootstrap with seed rows
//! - `SqliteTabularStore`, the `TabularStore` implementation over SQLite

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteTabularStore;
pub use schema::{initialize, SetupSummary};
