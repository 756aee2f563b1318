//! Rendering of the search table view.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::columns::COLUMNS;
use crate::view::SearchTableView;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_LABEL: &str = "Loading titles...";
pub const EMPTY_TITLE: &str = "No results found";
pub const EMPTY_HINT: &str = "Try a different search term";

/// Draw the whole view: search box, results area and status line.
pub fn render(frame: &mut Frame, view: &SearchTableView, spinner_frame: usize) {
    let [input_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_input(frame, view, input_area);

    if view.is_loading() {
        render_loading(frame, spinner_frame, body_area);
    } else if view.shows_empty_message() {
        render_empty(frame, body_area);
    } else {
        render_table(frame, view, body_area);
    }

    render_status(frame, view, status_area);
}

fn render_input(frame: &mut Frame, view: &SearchTableView, area: Rect) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(view.search_term()),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::bordered().title(" Search by title "));
    frame.render_widget(input, area);
}

fn render_loading(frame: &mut Frame, spinner_frame: usize, area: Rect) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let loading = Paragraph::new(format!("{glyph} {LOADING_LABEL}"))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(loading, area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new(vec![
        Line::styled(EMPTY_TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Line::styled(EMPTY_HINT, Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered());
    frame.render_widget(empty, area);
}

fn render_table(frame: &mut Frame, view: &SearchTableView, area: Rect) {
    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(c.label)))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view.results().iter().map(|record| {
        Row::new(
            COLUMNS
                .iter()
                .map(|c| Cell::from(record.display_value(c.field))),
        )
    });

    let table = Table::new(rows, COLUMNS.iter().map(|c| c.width))
        .header(header)
        .block(Block::bordered().title(format!(" {} titles ", view.results().len())));
    frame.render_widget(table, area);
}

fn render_status(frame: &mut Frame, view: &SearchTableView, area: Rect) {
    let line = match view.error() {
        Some(err) => Line::from(vec![
            Span::styled(format!("Error: {err}"), Style::default().fg(Color::Red)),
            Span::raw("  Ctrl-R retry  Esc quit"),
        ]),
        None => Line::from(Span::styled(
            "Type to search  Ctrl-U clear  Ctrl-R refresh  Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
