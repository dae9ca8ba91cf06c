//! Drawing the browser: tab bar, grid, key hints, status line and overlays

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize as _};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap};
use ratatui::Frame;
use realtydb_core::editor::RowForm;
use realtydb_core::{Notice, SortOrder, TabMode, TableTab, TabularStore};

use super::app::{App, Prompt};

pub fn draw<S: TabularStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let [tabs_area, grid_area, hint_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let editor = app.editor();
    let titles: Vec<Line> = editor
        .tabs()
        .iter()
        .map(|t| Line::from(t.name().to_string()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::bordered().title(" realtydb "))
        .select(editor.active_index())
        .highlight_style(Style::new().bold().cyan());
    frame.render_widget(tabs, tabs_area);

    match editor.active_tab() {
        Some(tab) => {
            render_grid(frame, grid_area, tab);
            frame.render_widget(hint_line(tab.mode()), hint_area);
        }
        None => {
            frame.render_widget(
                Paragraph::new("No tables found. Run `realtydb setup` first.".italic().dim()),
                grid_area,
            );
            frame.render_widget(Line::from(vec!["q".bold(), " quit".dim()]), hint_area);
        }
    }
    frame.render_widget(Line::from(app.status().to_string()).dim(), status_area);

    if let Some(tab) = editor.active_tab() {
        match tab.mode() {
            TabMode::Listing => {}
            TabMode::AddDialog { form } => render_form(frame, area, " Add row ", form),
            TabMode::EditDialog { form, .. } => render_form(frame, area, " Edit row ", form),
            TabMode::ConfirmDelete { row } => {
                let lines = vec![
                    Line::from(app.delete_prompt()),
                    Line::from(""),
                    Line::from(row.joined()).dim(),
                    Line::from(""),
                    Line::from(vec!["y".bold(), " yes  ".dim(), "n".bold(), " no".dim()]),
                ];
                render_modal(frame, area, " Confirm ", lines);
            }
        }
    }

    if let Some(prompt) = app.prompt() {
        render_prompt(frame, area, prompt);
    }
    if let Some(notice) = app.notice() {
        let title = match notice {
            Notice::Warning(_) => " Warning ",
            Notice::Info(_) => " Info ",
        };
        let lines = vec![
            Line::from(notice.text().to_string()),
            Line::from(""),
            Line::from("Press any key".dim()),
        ];
        render_modal(frame, area, title, lines);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, tab: &TableTab) {
    let sort = tab.sort();
    let header = Row::new(tab.schema().columns.iter().enumerate().map(|(i, c)| {
        let marker = match sort {
            Some(s) if s.column == i && s.order == SortOrder::Ascending => " ▲",
            Some(s) if s.column == i => " ▼",
            _ => "",
        };
        format!("{}{}", c.name, marker)
    }))
    .style(Style::new().bold());

    let rows = tab.rows().iter().enumerate().map(|(i, row)| {
        let cells = row.display_values();
        if tab.is_selected(i) {
            Row::new(cells).style(Style::new().cyan())
        } else {
            Row::new(cells)
        }
    });

    let widths = vec![Constraint::Fill(1); tab.schema().columns.len().max(1)];
    let title = format!(" {} ({} rows) ", tab.name(), tab.rows().len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().title(title))
        .row_highlight_style(Style::new().reversed())
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(tab.cursor());
    frame.render_stateful_widget(table, area, &mut state);
}

fn hint_line(mode: &TabMode) -> Line<'static> {
    let pairs: &[(&str, &str)] = match mode {
        TabMode::Listing => &[
            ("←/→", " tab  "),
            ("1-9", " sort  "),
            ("a", " add  "),
            ("e", " edit  "),
            ("d", " delete  "),
            ("r", " refresh  "),
            ("/", " search  "),
            ("p", " report  "),
            ("q", " quit"),
        ],
        TabMode::AddDialog { .. } | TabMode::EditDialog { .. } => &[
            ("↑/↓", " field  "),
            ("Enter", " save  "),
            ("Esc", " cancel"),
        ],
        TabMode::ConfirmDelete { .. } => &[("y", " delete  "), ("n", " keep")],
    };
    let spans: Vec<Span> = pairs
        .iter()
        .flat_map(|&(key, label)| [key.bold(), label.dim()])
        .collect();
    Line::from(spans)
}

fn render_form(frame: &mut Frame, area: Rect, title: &str, form: &RowForm) {
    let label_width = form
        .fields()
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label = format!("{:>width$}: ", field.label, width = label_width);
            if i == form.focus() {
                Line::from(vec![
                    Span::from(label).bold().cyan(),
                    Span::from(field.value.clone()),
                    "_".slow_blink(),
                ])
            } else {
                Line::from(vec![Span::from(label).dim(), Span::from(field.value.clone())])
            }
        })
        .collect();
    render_modal(frame, area, title, lines);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let lines = vec![Line::from(vec![
        Span::from(prompt.input.clone()),
        "_".slow_blink(),
    ])];
    let title = format!(" {} ", prompt.kind.title());
    render_modal(frame, area, &title, lines);
}

/// Bordered box centered over `area`, sized to its content
fn render_modal(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = content_width
        .max(title.chars().count() as u16)
        .saturating_add(4)
        .max(30);
    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered(area, width, height);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::bordered().title(title.to_string()))
            .wrap(Wrap { trim: false }),
        rect,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
