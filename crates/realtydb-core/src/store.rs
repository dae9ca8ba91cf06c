//! Capability interface over a relational store
//!
//! The editor and the report renderer talk to storage only through
//! [`TabularStore`]. Implementations validate table and column names against
//! their own catalog and bind values as parameters, so callers never build
//! query text.

use crate::errors::Result;
use crate::model::{CellValue, ColumnInfo, Row, RowKey, SortOrder};

/// Generic CRUD surface over a store whose schema is discovered at runtime
pub trait TabularStore {
    /// User tables in catalog order
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Columns of `table` in declaration order
    fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>>;

    /// Every row of `table`
    ///
    /// Without `order` rows come back in the store's natural order; with
    /// `Some((column, direction))` they are ordered by that column.
    fn list_rows(&self, table: &str, order: Option<(&str, SortOrder)>) -> Result<Vec<Row>>;

    /// Insert one row with one text value per column, in column order
    ///
    /// Values are passed through unchanged: empty strings stay empty strings.
    fn insert_row(&mut self, table: &str, values: &[String]) -> Result<usize>;

    /// Set every column to `values` on all rows matching `key`
    ///
    /// Values are typed cells so that columns the user left alone are written
    /// back unchanged. Returns the number of rows changed.
    fn update_row(&mut self, table: &str, key: &RowKey, values: &[CellValue]) -> Result<usize>;

    /// Delete all rows matching `key`, returning how many were removed
    fn delete_row(&mut self, table: &str, key: &RowKey) -> Result<usize>;

    /// Number of rows in `table`
    fn count_rows(&self, table: &str) -> Result<u64>;
}
