//! Repository layer
//!
//! Provides the SQLite implementation of the editor's `TabularStore`.

mod ident;
mod sqlite_repo;
mod values;

pub use ident::quote_identifier;
pub use sqlite_repo::SqliteTabularStore;
