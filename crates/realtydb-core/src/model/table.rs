//! Catalog structures discovered from the store

/// One column as reported by the store catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type text, empty when the column has none
    pub decl_type: String,
    pub not_null: bool,
    /// 1-based position in the primary key, 0 when not part of it
    pub primary_key: u32,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decl_type: String::new(),
            not_null: false,
            primary_key: 0,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key > 0
    }
}

/// A table name with its ordered columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Indices of primary-key columns, ordered by key position
    pub fn primary_key_indices(&self) -> Vec<usize> {
        let mut keyed: Vec<(u32, usize)> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_primary_key())
            .map(|(i, c)| (c.primary_key, i))
            .collect();
        keyed.sort();
        keyed.into_iter().map(|(_, i)| i).collect()
    }
}

/// Direction of a column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// SQL keyword for an ORDER BY clause
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(name: &str, pk: u32) -> ColumnInfo {
        ColumnInfo {
            primary_key: pk,
            ..ColumnInfo::new(name)
        }
    }

    #[test]
    fn test_primary_key_indices_follow_key_position() {
        let schema = TableSchema::new(
            "Assignment",
            vec![keyed("Note", 0), keyed("RealtorID", 2), keyed("ClientID", 1)],
        );
        assert_eq!(schema.primary_key_indices(), vec![2, 1]);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled().keyword(), "ASC");
    }
}
