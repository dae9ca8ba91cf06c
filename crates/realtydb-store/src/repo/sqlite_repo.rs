//! SQLite repository implementation
//!
//! Implements `TabularStore` over one long-lived connection. Every table and
//! column name is checked against `sqlite_master` / `pragma_table_info`
//! before it is quoted into SQL text; every value is bound as a parameter.

#![allow(clippy::result_large_err)]

use std::path::Path;

use realtydb_core::errors::EditorError;
use realtydb_core::{
    log_op_end, log_op_error, log_op_start, CellValue, ColumnInfo, Row, RowKey, SortOrder,
    TabularStore,
};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::repo::ident::{quote_identifier, quoted_list};
use crate::repo::values::{from_sql, to_sql};

/// `TabularStore` backed by a SQLite connection
pub struct SqliteTabularStore {
    conn: Connection,
}

impl SqliteTabularStore {
    /// Open the store file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        let store = Self { conn };
        // Reading the catalog surfaces files that are not SQLite databases
        store.list_tables()?;
        Ok(store)
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Fail unless `table` is a user table in the catalog
    fn require_table(&self, table: &str) -> Result<()> {
        let found: bool = self
            .conn
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                [table],
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        if !found || is_internal(table) {
            return Err(EditorError::UnknownTable {
                table: table.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn column_names(&self, table: &str) -> Result<Vec<String>> {
        Ok(self
            .list_columns(table)?
            .into_iter()
            .map(|c| c.name)
            .collect())
    }

    fn require_column(table: &str, columns: &[String], column: &str) -> Result<()> {
        if columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(EditorError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            }
            .into())
        }
    }

    fn require_arity(table: &str, columns: &[String], actual: usize) -> Result<()> {
        if columns.len() != actual {
            return Err(EditorError::ArityMismatch {
                table: table.to_string(),
                expected: columns.len(),
                actual,
            }
            .into());
        }
        Ok(())
    }

    /// WHERE clause and its parameters for `key`, placeholders numbered from `first`
    fn where_clause(
        table: &str,
        columns: &[String],
        key: &RowKey,
        first: usize,
    ) -> Result<(String, Vec<Value>)> {
        let pairs: Vec<(&str, Value)> = match key {
            RowKey::WholeRow(values) => {
                Self::require_arity(table, columns, values.len())?;
                columns
                    .iter()
                    .map(String::as_str)
                    .zip(values.iter().map(to_sql))
                    .collect()
            }
            RowKey::PrimaryKey(pairs) => {
                if pairs.is_empty() {
                    return Err(EditorError::NoPrimaryKey {
                        table: table.to_string(),
                    }
                    .into());
                }
                for (column, _) in pairs {
                    Self::require_column(table, columns, column)?;
                }
                pairs
                    .iter()
                    .map(|(c, v)| (c.as_str(), to_sql(v)))
                    .collect()
            }
        };

        // IS rather than = so NULL cells match their own NULL
        let clause = pairs
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{} IS ?{}", quote_identifier(column), first + i))
            .collect::<Vec<_>>()
            .join(" AND ");
        let params = pairs.into_iter().map(|(_, v)| v).collect();
        Ok((clause, params))
    }

    fn insert_impl(&mut self, table: &str, values: &[String]) -> Result<usize> {
        self.require_table(table)?;
        let columns = self.column_names(table)?;
        Self::require_arity(table, &columns, values.len())?;

        let placeholders = (1..=values.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_identifier(table),
            quoted_list(&columns),
            placeholders
        );
        self.conn
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(|e| from_rusqlite(e).with_op("insert_row").with_table(table))
    }

    fn update_impl(&mut self, table: &str, key: &RowKey, values: &[CellValue]) -> Result<usize> {
        self.require_table(table)?;
        let columns = self.column_names(table)?;
        Self::require_arity(table, &columns, values.len())?;

        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ?{}", quote_identifier(c), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let (where_clause, key_params) =
            Self::where_clause(table, &columns, key, values.len() + 1)?;
        let sql = format!(
            "UPDATE {} SET {} WHERE {}",
            quote_identifier(table),
            set_clause,
            where_clause
        );

        let params: Vec<Value> = values.iter().map(to_sql).chain(key_params).collect();
        self.conn
            .execute(&sql, params_from_iter(params.iter()))
            .map_err(|e| from_rusqlite(e).with_op("update_row").with_table(table))
    }

    fn delete_impl(&mut self, table: &str, key: &RowKey) -> Result<usize> {
        self.require_table(table)?;
        let columns = self.column_names(table)?;
        let (where_clause, params) = Self::where_clause(table, &columns, key, 1)?;
        let sql = format!(
            "DELETE FROM {} WHERE {}",
            quote_identifier(table),
            where_clause
        );
        self.conn
            .execute(&sql, params_from_iter(params.iter()))
            .map_err(|e| from_rusqlite(e).with_op("delete_row").with_table(table))
    }
}

fn is_internal(table: &str) -> bool {
    table.starts_with("sqlite_")
}

impl TabularStore for SqliteTabularStore {
    fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
                 ORDER BY rowid",
            )
            .map_err(|e| from_rusqlite(e).with_op("list_tables"))?;
        let tables = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(from_rusqlite)?;
        Ok(tables)
    }

    fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        self.require_table(table)?;
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid",
            )
            .map_err(|e| from_rusqlite(e).with_op("list_columns"))?;
        let columns = stmt
            .query_map([table], |row| {
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    decl_type: row.get(1)?,
                    not_null: row.get(2)?,
                    primary_key: row.get(3)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(e).with_table(table))?;
        Ok(columns)
    }

    fn list_rows(&self, table: &str, order: Option<(&str, SortOrder)>) -> Result<Vec<Row>> {
        self.require_table(table)?;
        let columns = self.column_names(table)?;

        let mut sql = format!(
            "SELECT {} FROM {}",
            quoted_list(&columns),
            quote_identifier(table)
        );
        if let Some((column, direction)) = order {
            Self::require_column(table, &columns, column)?;
            sql.push_str(&format!(
                " ORDER BY {} {}",
                quote_identifier(column),
                direction.keyword()
            ));
        }

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| from_rusqlite(e).with_op("list_rows").with_table(table))?;
        let width = columns.len();
        let rows = stmt
            .query_map([], |row| {
                let mut values = Vec::with_capacity(width);
                for i in 0..width {
                    values.push(from_sql(row.get_ref(i)?));
                }
                Ok(Row::new(values))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(e).with_table(table))?;

        tracing::debug!(table = table, rows = rows.len(), "rows listed");
        Ok(rows)
    }

    fn insert_row(&mut self, table: &str, values: &[String]) -> Result<usize> {
        log_op_start!("insert_row", table = table);
        let start = std::time::Instant::now();

        let inserted = self.insert_impl(table, values).map_err(|e| {
            log_op_error!(
                "insert_row",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table
            );
            e
        })?;

        log_op_end!(
            "insert_row",
            duration_ms = start.elapsed().as_millis() as u64,
            table = table,
            rows_affected = inserted
        );
        Ok(inserted)
    }

    fn update_row(&mut self, table: &str, key: &RowKey, values: &[CellValue]) -> Result<usize> {
        log_op_start!("update_row", table = table);
        let start = std::time::Instant::now();

        let updated = self.update_impl(table, key, values).map_err(|e| {
            log_op_error!(
                "update_row",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table
            );
            e
        })?;

        log_op_end!(
            "update_row",
            duration_ms = start.elapsed().as_millis() as u64,
            table = table,
            rows_affected = updated
        );
        Ok(updated)
    }

    fn delete_row(&mut self, table: &str, key: &RowKey) -> Result<usize> {
        log_op_start!("delete_row", table = table);
        let start = std::time::Instant::now();

        let deleted = self.delete_impl(table, key).map_err(|e| {
            log_op_error!(
                "delete_row",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                table = table
            );
            e
        })?;

        log_op_end!(
            "delete_row",
            duration_ms = start.elapsed().as_millis() as u64,
            table = table,
            rows_affected = deleted
        );
        Ok(deleted)
    }

    fn count_rows(&self, table: &str) -> Result<u64> {
        self.require_table(table)?;
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        let count: i64 = self
            .conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|e| from_rusqlite(e).with_op("count_rows").with_table(table))?;
        Ok(count as u64)
    }
}
