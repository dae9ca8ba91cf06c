//! Row identification for update and delete

use serde::Deserialize;

use crate::errors::{EditorError, Result};
use crate::model::{CellValue, Row, TableSchema};

/// How mutating actions locate their target rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Compare every column; identical rows are all affected
    #[default]
    WholeRow,
    /// Compare declared primary-key columns only
    PrimaryKey,
}

/// The values an update or delete matches against
#[derive(Debug, Clone, PartialEq)]
pub enum RowKey {
    /// One value per column, in column order
    WholeRow(Vec<CellValue>),
    /// `(column, value)` pairs for the primary-key columns
    PrimaryKey(Vec<(String, CellValue)>),
}

impl RowKey {
    /// Build the key for `row` under `mode`
    pub fn for_row(schema: &TableSchema, row: &Row, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::WholeRow => Ok(RowKey::WholeRow(row.values.clone())),
            MatchMode::PrimaryKey => {
                let indices = schema.primary_key_indices();
                if indices.is_empty() {
                    return Err(EditorError::NoPrimaryKey {
                        table: schema.name.clone(),
                    }
                    .into());
                }
                let pairs = indices
                    .into_iter()
                    .map(|i| {
                        let value = row.values.get(i).cloned().unwrap_or(CellValue::Null);
                        (schema.columns[i].name.clone(), value)
                    })
                    .collect();
                Ok(RowKey::PrimaryKey(pairs))
            }
        }
    }
}
