//! Notebook-style table editor
//!
//! [`Editor`] owns a [`TabularStore`] and one [`TableTab`] per table found in
//! the catalog. Every user action of the browser maps onto one method here,
//! so the terminal front end and headless tests drive the same state machine.
//!
//! Mutating actions follow a two-step protocol: `begin_add`, `begin_edit` or
//! `request_delete` opens a dialog, then `confirm` performs the write and
//! returns the tab to listing, or `dismiss` leaves without writing.

pub mod form;
pub mod search;
pub mod tab;

use std::path::Path;

use crate::errors::{EditorError, Result};
use crate::model::{CellValue, MatchMode, RowKey, SortOrder, TableSchema};
use crate::render::report::{write_report, ReportSummary};
use crate::store::TabularStore;

pub use form::{FormField, RowForm};
pub use tab::{SortState, TabMode, TableTab};

/// Message for the user produced by an action that did not touch the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Info(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Warning(s) | Notice::Info(s) => s,
        }
    }
}

/// What a confirmed dialog did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmed {
    Inserted(usize),
    Updated(usize),
    Deleted(usize),
}

impl Confirmed {
    pub fn rows_affected(self) -> usize {
        match self {
            Confirmed::Inserted(n) | Confirmed::Updated(n) | Confirmed::Deleted(n) => n,
        }
    }
}

/// Write decided by a dialog, with owned inputs
enum Pending {
    Insert(Vec<String>),
    Update(RowKey, Vec<CellValue>),
    Delete(RowKey),
}

pub const DELETE_NEEDS_SELECTION: &str = "Please select a row to delete.";
pub const EDIT_NEEDS_SELECTION: &str = "Please select a row to edit.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this row?";

/// Table editor over any [`TabularStore`]
pub struct Editor<S: TabularStore> {
    store: S,
    tabs: Vec<TableTab>,
    active: usize,
    match_mode: MatchMode,
}

impl<S: TabularStore> Editor<S> {
    /// Discover the schema and populate one tab per table
    pub fn open(store: S, match_mode: MatchMode) -> Result<Self> {
        let mut editor = Self {
            store,
            tabs: Vec::new(),
            active: 0,
            match_mode,
        };
        editor.reload_schema()?;
        Ok(editor)
    }

    /// Re-read the catalog and rebuild every tab
    pub fn reload_schema(&mut self) -> Result<()> {
        let mut tabs = Vec::new();
        for name in self.store.list_tables()? {
            let columns = self.store.list_columns(&name)?;
            let mut tab = TableTab::new(TableSchema::new(name, columns));
            let rows = self.store.list_rows(tab.name(), None)?;
            tab.set_rows(rows, None);
            tabs.push(tab);
        }
        tracing::debug!(tables = tabs.len(), "editor schema loaded");
        self.tabs = tabs;
        self.active = self.active.min(self.tabs.len().saturating_sub(1));
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn tabs(&self) -> &[TableTab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&TableTab> {
        self.tabs.get(self.active)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut TableTab> {
        self.tabs.get_mut(self.active)
    }

    /// Switch to the tab at `index`
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(EditorError::NoSuchTab { index }.into());
        }
        self.active = index;
        Ok(())
    }

    /// Switch to the tab named `table`
    pub fn select_table(&mut self, table: &str) -> Result<()> {
        let index = self
            .tabs
            .iter()
            .position(|t| t.name() == table)
            .ok_or_else(|| EditorError::UnknownTable {
                table: table.to_string(),
            })?;
        self.active = index;
        Ok(())
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    /// Repopulate the active grid in natural order, dropping any sort
    pub fn refresh(&mut self) -> Result<()> {
        let table = self.current_tab()?.name().to_string();
        let rows = self.store.list_rows(&table, None)?;
        self.current_tab_mut()?.set_rows(rows, None);
        Ok(())
    }

    /// Select the row at `index` on the active tab
    pub fn select_row(&mut self, index: usize) {
        if let Some(tab) = self.active_tab_mut() {
            tab.select_only(index);
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if let Some(tab) = self.active_tab_mut() {
            tab.move_cursor(delta);
        }
    }

    /// Open the add dialog with one empty field per column
    pub fn begin_add(&mut self) -> Result<()> {
        let tab = self.current_tab_mut()?;
        let form = RowForm::blank(&tab.schema().column_names());
        tab.mode = TabMode::AddDialog { form };
        Ok(())
    }

    /// Open the edit dialog pre-filled with the selected row
    ///
    /// Returns a warning instead when not exactly one row is selected.
    pub fn begin_edit(&mut self) -> Result<Option<Notice>> {
        let tab = self.current_tab_mut()?;
        let Some(original) = tab.single_selection().cloned() else {
            return Ok(Some(Notice::Warning(EDIT_NEEDS_SELECTION.to_string())));
        };
        let form = RowForm::prefilled(&tab.schema().column_names(), &original.display_values());
        tab.mode = TabMode::EditDialog { form, original };
        Ok(None)
    }

    /// Ask for confirmation before deleting the selected row
    ///
    /// Returns a warning instead when not exactly one row is selected.
    pub fn request_delete(&mut self) -> Result<Option<Notice>> {
        let tab = self.current_tab_mut()?;
        let Some(row) = tab.single_selection().cloned() else {
            return Ok(Some(Notice::Warning(DELETE_NEEDS_SELECTION.to_string())));
        };
        tab.mode = TabMode::ConfirmDelete { row };
        Ok(None)
    }

    /// Form of the open add or edit dialog
    pub fn form_mut(&mut self) -> Option<&mut RowForm> {
        match &mut self.active_tab_mut()?.mode {
            TabMode::AddDialog { form } | TabMode::EditDialog { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Perform the write for the open dialog and return to listing
    ///
    /// On failure the dialog stays open and the grid is left as it was.
    pub fn confirm(&mut self) -> Result<Confirmed> {
        let tab = self.current_tab()?;
        let table = tab.name().to_string();

        let pending = match tab.mode() {
            TabMode::Listing => return Err(EditorError::NotInDialog { table }.into()),
            TabMode::AddDialog { form } => Pending::Insert(form.values()),
            TabMode::EditDialog { form, original } => Pending::Update(
                RowKey::for_row(tab.schema(), original, self.match_mode)?,
                form.edited_values(original),
            ),
            TabMode::ConfirmDelete { row } => {
                Pending::Delete(RowKey::for_row(tab.schema(), row, self.match_mode)?)
            }
        };

        let outcome = match pending {
            Pending::Insert(values) => Confirmed::Inserted(self.store.insert_row(&table, &values)?),
            Pending::Update(key, values) => {
                Confirmed::Updated(self.store.update_row(&table, &key, &values)?)
            }
            Pending::Delete(key) => Confirmed::Deleted(self.store.delete_row(&table, &key)?),
        };

        self.current_tab_mut()?.mode = TabMode::Listing;
        self.refresh()?;
        Ok(outcome)
    }

    /// Close any open dialog without writing
    pub fn dismiss(&mut self) {
        if let Some(tab) = self.active_tab_mut() {
            tab.mode = TabMode::Listing;
        }
    }

    /// Re-query the active grid ordered by column `column`
    ///
    /// The first request on a column sorts ascending; repeating it on the same
    /// column flips the direction.
    pub fn sort_by_column(&mut self, column: usize) -> Result<SortOrder> {
        let tab = self.current_tab()?;
        let table = tab.name().to_string();
        let name = tab
            .schema()
            .columns
            .get(column)
            .map(|c| c.name.clone())
            .ok_or_else(|| EditorError::UnknownColumn {
                table: table.clone(),
                column: format!("#{}", column + 1),
            })?;
        let order = tab.next_sort_order(column);

        let rows = self.store.list_rows(&table, Some((name.as_str(), order)))?;
        self.current_tab_mut()?
            .set_rows(rows, Some(SortState { column, order }));
        Ok(order)
    }

    /// Select rows of the active grid containing `term`, ignoring case
    ///
    /// Returns the number of selected rows; the grid keeps every row.
    pub fn search(&mut self, term: &str) -> usize {
        self.active_tab_mut()
            .map(|tab| tab.apply_search(term))
            .unwrap_or(0)
    }

    /// Write the plain-text report of every table to `path`
    pub fn generate_report(&self, path: &Path) -> Result<ReportSummary> {
        write_report(&self.store, path)
    }

    fn current_tab(&self) -> Result<&TableTab> {
        self.tabs.get(self.active).ok_or_else(|| {
            EditorError::NoSuchTab {
                index: self.active,
            }
            .into()
        })
    }

    fn current_tab_mut(&mut self) -> Result<&mut TableTab> {
        let index = self.active;
        self.tabs
            .get_mut(index)
            .ok_or_else(|| EditorError::NoSuchTab { index }.into())
    }
}
