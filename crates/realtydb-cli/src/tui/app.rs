//! Key handling for the table browser
//!
//! [`App`] wraps the editor with the state that only the terminal front end
//! needs: prompts, the modal notice and the status line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use realtydb_core::editor::DELETE_PROMPT;
use realtydb_core::{Confirmed, Editor, Notice, SortOrder, TabMode, TabularStore};
use std::path::Path;

/// Rows moved by PgUp and PgDn
const PAGE_ROWS: isize = 10;

/// Report file offered by the path prompt
pub const DEFAULT_REPORT_PATH: &str = "report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Search,
    ReportPath,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Search => "Search",
            PromptKind::ReportPath => "Report file",
        }
    }
}

/// Single-line text input shown over the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// Which key map applies to the next key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyContext {
    Notice,
    Prompt,
    NoTables,
    Listing,
    Form,
    ConfirmDelete,
}

pub struct App<S: TabularStore> {
    editor: Editor<S>,
    prompt: Option<Prompt>,
    notice: Option<Notice>,
    status: String,
}

impl<S: TabularStore> App<S> {
    pub fn new(editor: Editor<S>) -> Self {
        let status = match editor.tabs().len() {
            0 => "No tables found".to_string(),
            n => format!("{} tables loaded", n),
        };
        Self {
            editor,
            prompt: None,
            notice: None,
            status,
        }
    }

    pub fn editor(&self) -> &Editor<S> {
        &self.editor
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn delete_prompt(&self) -> &'static str {
        DELETE_PROMPT
    }

    fn context(&self) -> KeyContext {
        if self.notice.is_some() {
            return KeyContext::Notice;
        }
        if self.prompt.is_some() {
            return KeyContext::Prompt;
        }
        match self.editor.active_tab().map(|t| t.mode()) {
            None => KeyContext::NoTables,
            Some(TabMode::Listing) => KeyContext::Listing,
            Some(TabMode::AddDialog { .. } | TabMode::EditDialog { .. }) => KeyContext::Form,
            Some(TabMode::ConfirmDelete { .. }) => KeyContext::ConfirmDelete,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }

        match self.context() {
            KeyContext::Notice => {
                self.notice = None;
                Flow::Continue
            }
            KeyContext::Prompt => {
                self.handle_prompt_key(key);
                Flow::Continue
            }
            KeyContext::NoTables => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Flow::Quit,
                _ => Flow::Continue,
            },
            KeyContext::Listing => self.handle_listing_key(key),
            KeyContext::Form => {
                self.handle_form_key(key);
                Flow::Continue
            }
            KeyContext::ConfirmDelete => {
                self.handle_confirm_key(key);
                Flow::Continue
            }
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Right | KeyCode::Tab => self.editor.next_tab(),
            KeyCode::Left | KeyCode::BackTab => self.editor.prev_tab(),
            KeyCode::Up => self.editor.move_cursor(-1),
            KeyCode::Down => self.editor.move_cursor(1),
            KeyCode::PageUp => self.editor.move_cursor(-PAGE_ROWS),
            KeyCode::PageDown => self.editor.move_cursor(PAGE_ROWS),
            KeyCode::Home => {
                if let Some(tab) = self.editor.active_tab_mut() {
                    tab.cursor_home();
                }
            }
            KeyCode::End => {
                if let Some(tab) = self.editor.active_tab_mut() {
                    tab.cursor_end();
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                self.sort(column);
            }
            KeyCode::Char('a') => {
                if let Err(e) = self.editor.begin_add() {
                    self.warn(e.to_string());
                }
            }
            KeyCode::Char('e') => match self.editor.begin_edit() {
                Ok(Some(notice)) => self.notice = Some(notice),
                Ok(None) => {}
                Err(e) => self.warn(e.to_string()),
            },
            KeyCode::Char('d') => match self.editor.request_delete() {
                Ok(Some(notice)) => self.notice = Some(notice),
                Ok(None) => {}
                Err(e) => self.warn(e.to_string()),
            },
            KeyCode::Char('r') => match self.editor.refresh() {
                Ok(()) => self.status = "Refreshed".to_string(),
                Err(e) => self.warn(e.to_string()),
            },
            KeyCode::Char('/') => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::Search,
                    input: String::new(),
                });
            }
            KeyCode::Char('p') => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::ReportPath,
                    input: DEFAULT_REPORT_PATH.to_string(),
                });
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editor.dismiss();
                self.status = "Cancelled".to_string();
            }
            KeyCode::Enter => self.confirm(),
            _ => {
                let Some(form) = self.editor.form_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Down | KeyCode::Tab => form.focus_next(),
                    KeyCode::Up | KeyCode::BackTab => form.focus_prev(),
                    KeyCode::Backspace => form.pop_char(),
                    KeyCode::Char(c) => form.push_char(c),
                    _ => {}
                }
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.editor.dismiss();
                self.status = "Delete cancelled".to_string();
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit_prompt(prompt);
                }
            }
            _ => {}
        }
    }

    fn submit_prompt(&mut self, prompt: Prompt) {
        match prompt.kind {
            PromptKind::Search => {
                let found = self.editor.search(&prompt.input);
                self.status = format!("{} matching rows", found);
            }
            PromptKind::ReportPath => {
                let path = prompt.input.trim();
                if path.is_empty() {
                    self.status = "Report cancelled".to_string();
                    return;
                }
                match self.editor.generate_report(Path::new(path)) {
                    Ok(summary) => {
                        self.notice = Some(Notice::Info(format!(
                            "Report written to {} ({} tables, {} rows)",
                            path, summary.tables, summary.rows
                        )));
                    }
                    Err(e) => self.warn(e.to_string()),
                }
            }
        }
    }

    fn confirm(&mut self) {
        match self.editor.confirm() {
            Ok(Confirmed::Inserted(n)) => self.status = format!("Inserted {} row(s)", n),
            Ok(Confirmed::Updated(n)) => self.status = format!("Updated {} row(s)", n),
            Ok(Confirmed::Deleted(n)) => self.status = format!("Deleted {} row(s)", n),
            Err(e) => self.warn(e.to_string()),
        }
    }

    fn sort(&mut self, column: usize) {
        match self.editor.sort_by_column(column) {
            Ok(order) => {
                let name = self
                    .editor
                    .active_tab()
                    .and_then(|t| t.schema().columns.get(column))
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                let direction = match order {
                    SortOrder::Ascending => "ascending",
                    SortOrder::Descending => "descending",
                };
                self.status = format!("Sorted by {} {}", name, direction);
            }
            Err(e) => self.warn(e.to_string()),
        }
    }

    fn warn(&mut self, message: String) {
        tracing::warn!(message = %message, "browser action failed");
        self.status = message.clone();
        self.notice = Some(Notice::Warning(message));
    }
}
