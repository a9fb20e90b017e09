//! Rendering for the home and game screens.

pub mod board;

use crate::app::{App, Screen, MENU_ITEMS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tictactoe_core::{GameMode, GameStatus};

/// Draws the active screen.
pub fn draw(f: &mut Frame, app: &App) {
    let background = Block::default().style(app.theme().base_style());
    f.render_widget(background, f.area());

    match app.screen() {
        Screen::Home => draw_home(f, app),
        Screen::Game => draw_game(f, app),
    }
}

fn draw_home(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(theme.title_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    f.render_widget(title, chunks[0]);

    let menu_area = board::center_rect(chunks[1], 40, MENU_ITEMS.len() as u16);
    let lines: Vec<Line> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.menu_index() {
                theme.cursor_style()
            } else {
                theme.base_style()
            };
            Line::styled(format!("  {}  ", item.label()), style)
        })
        .collect();
    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(menu, menu_area);

    let help = Paragraph::new("Up/Down: select | Enter: start | t: theme | q: quit")
        .style(theme.hint_style())
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}

fn draw_game(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(f.area());

    let config = app.config();
    let title_text = match config.mode() {
        GameMode::PvC => format!(
            "Tic-Tac-Toe - {} ({})",
            config.mode().name(),
            config.difficulty().name()
        ),
        GameMode::PvP => format!("Tic-Tac-Toe - {}", config.mode().name()),
    };
    let title = Paragraph::new(title_text)
        .style(theme.title_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    f.render_widget(title, chunks[0]);

    let state = app.state();
    let cursor = if state.status().is_terminal() || app.computer_pending() {
        None
    } else {
        Some(app.cursor())
    };
    board::render_board(f, chunks[1], state.board(), cursor, theme);

    let status = Paragraph::new(app.status_message())
        .style(theme.status_style())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    f.render_widget(status, chunks[2]);

    if state.status().is_terminal() {
        draw_game_over(f, app);
    }
}

/// Game-over overlay: headline, quote, and the keys that move on.
fn draw_game_over(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let headline = match app.state().status() {
        GameStatus::Won(player) => format!("Player {:?} wins!", player),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => return,
    };

    let mut lines = vec![Line::styled(headline, theme.overlay_style()), Line::default()];
    if let Some(quote) = app.quote() {
        lines.push(Line::styled(quote, theme.quote_style()));
        lines.push(Line::default());
    }
    lines.push(Line::styled(
        "n: new game | h: menu | q: quit",
        theme.hint_style(),
    ));

    let area = board::center_rect(f.area(), 44, 7);
    f.render_widget(Clear, area);
    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .style(theme.base_style()),
        );
    f.render_widget(overlay, area);
}
