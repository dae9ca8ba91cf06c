//! In-memory `TabularStore` used to drive the editor without SQLite

use realtydb_core::errors::{AppError, AppErrorKind, EditorError, Result};
use realtydb_core::{CellValue, ColumnInfo, Row, RowKey, SortOrder, TabularStore};

struct MemTable {
    name: String,
    columns: Vec<ColumnInfo>,
    rows: Vec<Row>,
}

/// Store keeping tables in insertion order and rows as text cells
#[derive(Default)]
pub struct MemoryStore {
    tables: Vec<MemTable>,
    /// When set, every mutating call fails with a persistence error
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table; columns named in `keys` form the primary key in that order
    pub fn with_table(mut self, name: &str, columns: &[&str], keys: &[&str]) -> Self {
        let columns = columns
            .iter()
            .map(|c| ColumnInfo {
                primary_key: keys
                    .iter()
                    .position(|k| k == c)
                    .map(|p| p as u32 + 1)
                    .unwrap_or(0),
                ..ColumnInfo::new(*c)
            })
            .collect();
        self.tables.push(MemTable {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        });
        self
    }

    pub fn with_row(mut self, table: &str, values: &[&str]) -> Self {
        let row = text_row(values);
        self.tables
            .iter_mut()
            .find(|t| t.name == table)
            .expect("table registered before rows")
            .rows
            .push(row);
        self
    }

    fn table(&self, name: &str) -> Result<&MemTable> {
        self.tables.iter().find(|t| t.name == name).ok_or_else(|| {
            EditorError::UnknownTable {
                table: name.to_string(),
            }
            .into()
        })
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut MemTable> {
        if self.fail_writes {
            return Err(AppError::new(AppErrorKind::Persistence).with_message("writes disabled"));
        }
        self.tables.iter_mut().find(|t| t.name == name).ok_or_else(|| {
            EditorError::UnknownTable {
                table: name.to_string(),
            }
            .into()
        })
    }
}

pub fn text_row(values: &[&str]) -> Row {
    Row::new(values.iter().map(|v| CellValue::from(*v)).collect())
}

fn matches(table: &MemTable, row: &Row, key: &RowKey) -> bool {
    match key {
        RowKey::WholeRow(values) => &row.values == values,
        RowKey::PrimaryKey(pairs) => pairs.iter().all(|(column, value)| {
            table
                .columns
                .iter()
                .position(|c| &c.name == column)
                .map(|i| &row.values[i] == value)
                .unwrap_or(false)
        }),
    }
}

fn check_arity(table: &MemTable, actual: usize) -> Result<()> {
    if actual != table.columns.len() {
        return Err(EditorError::ArityMismatch {
            table: table.name.clone(),
            expected: table.columns.len(),
            actual,
        }
        .into());
    }
    Ok(())
}

impl TabularStore for MemoryStore {
    fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn list_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        Ok(self.table(table)?.columns.clone())
    }

    fn list_rows(&self, table: &str, order: Option<(&str, SortOrder)>) -> Result<Vec<Row>> {
        let t = self.table(table)?;
        let mut rows = t.rows.clone();
        if let Some((column, direction)) = order {
            let index = t.columns.iter().position(|c| c.name == column).ok_or_else(|| {
                AppError::from(EditorError::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                })
            })?;
            rows.sort_by_key(|r| r.values[index].display_text());
            if direction == SortOrder::Descending {
                rows.reverse();
            }
        }
        Ok(rows)
    }

    fn insert_row(&mut self, table: &str, values: &[String]) -> Result<usize> {
        let t = self.table_mut(table)?;
        check_arity(t, values.len())?;
        t.rows
            .push(Row::new(values.iter().cloned().map(CellValue::Text).collect()));
        Ok(1)
    }

    fn update_row(&mut self, table: &str, key: &RowKey, values: &[CellValue]) -> Result<usize> {
        let t = self.table_mut(table)?;
        check_arity(t, values.len())?;
        let replacement = Row::new(values.to_vec());
        let targets: Vec<usize> = (0..t.rows.len())
            .filter(|&i| matches(t, &t.rows[i], key))
            .collect();
        for &i in &targets {
            t.rows[i] = replacement.clone();
        }
        Ok(targets.len())
    }

    fn delete_row(&mut self, table: &str, key: &RowKey) -> Result<usize> {
        let t = self.table_mut(table)?;
        let before = t.rows.len();
        let kept: Vec<Row> = t
            .rows
            .iter()
            .filter(|r| !matches(t, r, key))
            .cloned()
            .collect();
        t.rows = kept;
        Ok(before - t.rows.len())
    }

    fn count_rows(&self, table: &str) -> Result<u64> {
        Ok(self.table(table)?.rows.len() as u64)
    }
}

/// Two-table agency fixture with a duplicated realtor row
#[allow(dead_code)]
pub fn agency_store() -> MemoryStore {
    MemoryStore::new()
        .with_table("Realtor", &["RealtorID", "FullName"], &["RealtorID"])
        .with_row("Realtor", &["1", "Анна Смирнова"])
        .with_row("Realtor", &["2", "Дмитрий Козлов"])
        .with_table("Property", &["PropertyID", "Description", "ConstructionDate"], &["PropertyID"])
        .with_row("Property", &["2", "Просторная квартира", "2018-05-15"])
        .with_row("Property", &["1", "Красивый дом", "2020-01-01"])
}
