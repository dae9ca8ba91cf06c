//! Browse command
//!
//! Usage: realtydb browse [--db <PATH>]

use realtydb_core::Editor;
use realtydb_store::SqliteTabularStore;

use crate::config::Settings;

/// Open the store and run the terminal browser until the user quits
///
/// Connection and catalog failures surface before the terminal is taken over.
pub fn execute(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTabularStore::open(&settings.database)?;
    let editor = Editor::open(store, settings.match_mode)?;

    tracing::info!(
        path = %settings.database.display(),
        tables = editor.tabs().len(),
        match_mode = ?settings.match_mode,
        "browser opened"
    );
    crate::tui::run(editor)?;
    Ok(())
}
