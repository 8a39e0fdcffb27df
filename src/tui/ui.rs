//! Stateless UI rendering.

use super::app::{App, Focus};
use crate::game::{Player, Position};
use crate::view::{CellView, GameView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Draws the full frame: title, board, history, status, help.
pub(super) fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(36)])
        .split(chunks[1]);

    draw_board(frame, panes[0], &view, app);
    draw_history(frame, panes[1], &view, app);

    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help =
        Paragraph::new("Arrows: move | Enter/1-9: place | Tab: history | N: new game | Q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], view, app, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], view, app, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], view, app, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (chunk, offset) in [(cols[0], 0), (cols[2], 1), (cols[4], 2)] {
        let position = Position::from_index(start + offset).expect("index within board");
        draw_cell(frame, chunk, view.cell(position), position, app);
    }
    draw_vertical_separator(frame, cols[1]);
    draw_vertical_separator(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView, position: Position, app: &App) {
    let (symbol, base_style) = match cell.mark() {
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if app.focus() == Focus::Board && position == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if cell.is_winning() {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(format!("\n{symbol}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let text = match entry.caption() {
                Some(caption) => format!("{} ({caption})", entry.label()),
                None => entry.label().to_string(),
            };
            let style = if entry.step() == view.current_step() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected_step()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
