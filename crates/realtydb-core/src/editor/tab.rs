//! Per-table tab state: grid rows, selection, sort and the modal dialog

use std::collections::BTreeSet;

use crate::editor::form::RowForm;
use crate::editor::search::row_matches;
use crate::model::{Row, SortOrder, TableSchema};

/// Modal state of one tab
///
/// `Listing` is the only steady state; the others are entered by a user
/// action and left by confirm or dismiss.
#[derive(Debug, Clone, PartialEq)]
pub enum TabMode {
    Listing,
    AddDialog {
        form: RowForm,
    },
    EditDialog {
        form: RowForm,
        original: Row,
    },
    ConfirmDelete {
        row: Row,
    },
}

/// Column and direction of the sort currently applied to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub order: SortOrder,
}

/// One notebook tab bound to a table
#[derive(Debug, Clone)]
pub struct TableTab {
    schema: TableSchema,
    rows: Vec<Row>,
    selection: BTreeSet<usize>,
    cursor: Option<usize>,
    sort: Option<SortState>,
    pub(crate) mode: TabMode,
}

impl TableTab {
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            selection: BTreeSet::new(),
            cursor: None,
            sort: None,
            mode: TabMode::Listing,
        }
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn mode(&self) -> &TabMode {
        &self.mode
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.iter().copied().collect()
    }

    /// Replace the grid contents; selection is cleared and the cursor clamped
    pub(crate) fn set_rows(&mut self, rows: Vec<Row>, sort: Option<SortState>) {
        self.rows = rows;
        self.sort = sort;
        self.selection.clear();
        self.cursor = match self.cursor {
            _ if self.rows.is_empty() => None,
            Some(c) => Some(c.min(self.rows.len() - 1)),
            None => None,
        };
    }

    /// Move the cursor to `index` and make it the only selected row
    pub fn select_only(&mut self, index: usize) {
        if index < self.rows.len() {
            self.cursor = Some(index);
            self.selection.clear();
            self.selection.insert(index);
        }
    }

    /// Move the cursor by `delta` rows, saturating at both ends
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let target = match self.cursor {
            None if delta < 0 => last,
            None => 0,
            Some(c) => c.saturating_add_signed(delta).min(last),
        };
        self.select_only(target);
    }

    pub fn cursor_home(&mut self) {
        self.select_only(0);
    }

    pub fn cursor_end(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.select_only(last);
        }
    }

    /// The selected row when exactly one is selected, as edit and delete need
    pub(crate) fn single_selection(&self) -> Option<&Row> {
        let mut iter = self.selection.iter();
        match (iter.next(), iter.next()) {
            (Some(&index), None) => self.rows.get(index),
            _ => None,
        }
    }

    /// Select every row containing `term`, deselect the rest
    ///
    /// Returns the number of selected rows. The row set is left untouched.
    pub(crate) fn apply_search(&mut self, term: &str) -> usize {
        self.selection = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row_matches(row, term))
            .map(|(i, _)| i)
            .collect();
        if let Some(&first) = self.selection.iter().next() {
            self.cursor = Some(first);
        }
        self.selection.len()
    }

    /// Direction to use for the next sort request on `column`
    pub(crate) fn next_sort_order(&self, column: usize) -> SortOrder {
        match self.sort {
            Some(state) if state.column == column => state.order.toggled(),
            _ => SortOrder::Ascending,
        }
    }
}
