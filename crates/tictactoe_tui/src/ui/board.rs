//! Board rendering.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};
use tictactoe_core::{Board, Player, Position, Square};

/// Renders the board centered in `area`.
///
/// Empty squares show their digit hint. When a cursor is given, the
/// square under it renders inverted.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    theme: Theme,
) {
    let board_area = center_rect(area, 40, 12);
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

    render_row(f, rows[0], board, 0, cursor, theme);
    render_separator(f, rows[1], theme);
    render_row(f, rows[2], board, 3, cursor, theme);
    render_separator(f, rows[3], theme);
    render_row(f, rows[4], board, 6, cursor, theme);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    start: usize,
    cursor: Option<Position>,
    theme: Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], board, start, cursor, theme);
    render_vertical_sep(f, cols[1], theme);
    render_square(f, cols[2], board, start + 1, cursor, theme);
    render_vertical_sep(f, cols[3], theme);
    render_square(f, cols[4], board, start + 2, cursor, theme);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    index: usize,
    cursor: Option<Position>,
    theme: Theme,
) {
    let Some(pos) = Position::from_index(index) else {
        return;
    };
    let (text, style) = match board.get(pos) {
        Square::Empty => (format!("{}", index + 1), theme.hint_style()),
        Square::Occupied(Player::X) => ("X".to_string(), theme.x_style()),
        Square::Occupied(Player::O) => ("O".to_string(), theme.o_style()),
    };
    let style = if cursor == Some(pos) {
        theme.cursor_style()
    } else {
        style
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, theme: Theme) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(theme.border_style());
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, theme: Theme) {
    let sep = Paragraph::new("│")
        .style(theme.border_style())
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Centers a `width` x `height` box inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
