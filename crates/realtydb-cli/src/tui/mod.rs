//! Interactive table browser
//!
//! One tab per table, a grid of rows, and modal dialogs for add, edit and
//! delete. All state changes go through [`App::handle_key`].

mod app;
mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use realtydb_core::{Editor, TabularStore};

pub use app::{App, Flow};
use terminal::TerminalGuard;

/// Run the browser until the user quits
pub fn run<S: TabularStore>(editor: Editor<S>) -> std::io::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(editor);

    loop {
        guard.terminal.draw(|frame| ui::draw(frame, &app))?;

        match event::read()? {
            Event::Key(key) => {
                if matches!(key.kind, KeyEventKind::Release) {
                    continue;
                }
                if app.handle_key(key) == Flow::Quit {
                    break;
                }
            }
            // Resize needs nothing beyond the redraw at the top of the loop
            _ => {}
        }
    }

    tracing::info!(status = app.status(), "browser closed");
    Ok(())
}
