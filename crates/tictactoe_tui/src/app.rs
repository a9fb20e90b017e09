//! Application state and logic.

use crate::input;
use crate::quotes;
use crate::settings::Settings;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};
use tictactoe_core::{
    Difficulty, GameConfig, GameEngine, GameMode, GameState, GameStatus, Player, Position,
};
use tracing::{debug, info};

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection menu.
    Home,
    /// The board.
    Game,
}

/// A home-screen menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Two players share the keyboard.
    PvP,
    /// Play the computer on easy.
    PvCEasy,
    /// Play the computer on hard.
    PvCHard,
    /// Leave the program.
    Quit,
}

/// Menu entries in display order.
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::PvP,
    MenuItem::PvCEasy,
    MenuItem::PvCHard,
    MenuItem::Quit,
];

impl MenuItem {
    /// Label shown on the home screen.
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::PvP => "Player vs Player",
            MenuItem::PvCEasy => "Player vs Computer (easy)",
            MenuItem::PvCHard => "Player vs Computer (hard)",
            MenuItem::Quit => "Quit",
        }
    }

    /// The game configuration this entry starts, if any.
    fn config(&self) -> Option<GameConfig> {
        match self {
            MenuItem::PvP => Some(GameConfig::new(GameMode::PvP, Difficulty::Easy)),
            MenuItem::PvCEasy => Some(GameConfig::new(GameMode::PvC, Difficulty::Easy)),
            MenuItem::PvCHard => Some(GameConfig::new(GameMode::PvC, Difficulty::Hard)),
            MenuItem::Quit => None,
        }
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    screen: Screen,
    menu_index: usize,
    cursor: Position,
    theme: Theme,
    ai_delay: Duration,
    computer_due: Option<Instant>,
    status_message: String,
    quote: Option<&'static str>,
    should_quit: bool,
}

impl App {
    /// Creates the application from resolved settings.
    pub fn new(settings: &Settings) -> Self {
        let config = settings.game_config();
        let engine = match settings.seed() {
            Some(seed) => GameEngine::seeded(config, *seed),
            None => GameEngine::new(config),
        };
        Self {
            engine,
            screen: Screen::Home,
            menu_index: 0,
            cursor: Position::Center,
            theme: *settings.theme(),
            ai_delay: settings.ai_delay(),
            computer_due: None,
            status_message: String::new(),
            quote: None,
            should_quit: false,
        }
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The selected home-menu row.
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// The square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The active game configuration.
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// The current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The celebration quote, once the game ends.
    pub fn quote(&self) -> Option<&'static str> {
        self.quote
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the computer's reply is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Routes a key press to the active screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Game => self.handle_game_key(key.code),
        }
    }

    /// Advances time-based work: plays the computer's reply once its
    /// delay expires.
    pub fn tick(&mut self) {
        let due = match self.computer_due {
            Some(due) => due,
            None => return,
        };
        if Instant::now() < due {
            return;
        }
        self.computer_due = None;
        let pos = self.engine.apply_computer_move();
        info!(position = %pos, "Computer played");
        self.refresh_after_move(Some(pos));
    }

    /// Starts a new game under the current configuration.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.start_game();
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.menu_index = self.menu_index.saturating_sub(1),
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1).min(MENU_ITEMS.len() - 1);
            }
            KeyCode::Enter => self.activate_menu_item(),
            KeyCode::Char('t') => self.theme = self.theme.toggle(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if self.engine.state().status().is_terminal() {
            match code {
                KeyCode::Char('n') | KeyCode::Enter => self.restart(),
                KeyCode::Char('h') => self.go_home(),
                KeyCode::Char('t') => self.theme = self.theme.toggle(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => self.theme = self.theme.toggle(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('h') => self.go_home(),
            // Board input waits for the computer's reply.
            _ if self.computer_due.is_some() => {}
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.try_move(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = input::position_for_digit(c) {
                    self.try_move(pos);
                }
            }
            _ => {}
        }
    }

    fn activate_menu_item(&mut self) {
        match MENU_ITEMS[self.menu_index].config() {
            Some(config) => {
                info!(?config, "Starting game");
                self.engine.configure(config);
                self.start_game();
            }
            None => self.should_quit = true,
        }
    }

    fn start_game(&mut self) {
        self.screen = Screen::Game;
        self.cursor = Position::Center;
        self.computer_due = None;
        self.quote = None;
        self.status_message = "Player X's turn. Press 1-9 to make a move.".to_string();
    }

    fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.computer_due = None;
        self.quote = None;
        self.status_message = String::new();
    }

    fn try_move(&mut self, pos: Position) {
        debug!(position = %pos, "Making move");
        if let Err(e) = self.engine.apply_move(pos.to_index()) {
            self.status_message = format!("Invalid move: {}. Try again.", e);
            return;
        }
        self.refresh_after_move(None);
    }

    /// Updates the status line, quote, and computer scheduling after a
    /// state change. `computer_played` names the square the computer
    /// just took, if it moved.
    fn refresh_after_move(&mut self, computer_played: Option<Position>) {
        let status = self.engine.state().status().clone();
        match status {
            GameStatus::Won(player) => self.finish(format!(
                "Player {:?} wins! Press 'n' to play again or 'h' for the menu.",
                player
            )),
            GameStatus::Draw => self.finish(
                "Game ended in a draw! Press 'n' to play again or 'h' for the menu.".to_string(),
            ),
            GameStatus::InProgress => {
                let to_move = self.engine.state().to_move();
                let computer_to_move =
                    self.engine.config().mode() == &GameMode::PvC && to_move == Player::O;
                if computer_to_move {
                    self.computer_due = Some(Instant::now() + self.ai_delay);
                    self.status_message = "Computer is thinking...".to_string();
                } else if let Some(pos) = computer_played {
                    self.status_message =
                        format!("Computer took {}. Player X's turn", pos.label());
                } else {
                    self.status_message = format!("Player {:?}'s turn", to_move);
                }
            }
        }
    }

    fn finish(&mut self, headline: String) {
        self.status_message = headline;
        self.computer_due = None;
        self.quote = Some(quotes::random_quote(&mut rand::rng()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Square;

    fn settings(toml: &str) -> Settings {
        toml::from_str(toml).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_menu_starts_a_pvc_game() {
        let mut app = App::new(&settings("seed = 1\nai_delay_ms = 0"));
        assert_eq!(app.screen(), Screen::Home);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.screen(), Screen::Game);
        assert_eq!(app.config().mode(), &GameMode::PvC);
        assert_eq!(app.config().difficulty(), &Difficulty::Easy);
    }

    #[test]
    fn test_menu_selection_stays_in_bounds() {
        let mut app = App::new(&settings(""));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.menu_index(), 0);

        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.menu_index(), MENU_ITEMS.len() - 1);
    }

    #[test]
    fn test_quit_menu_item_exits() {
        let mut app = App::new(&settings(""));
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_quit());
    }

    #[test]
    fn test_digit_key_plays_a_square() {
        let mut app = App::new(&settings(""));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Char('5')));

        assert_eq!(
            app.state().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.state().to_move(), Player::O);
    }

    #[test]
    fn test_cursor_selects_a_square() {
        let mut app = App::new(&settings(""));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(
            app.state().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_invalid_move_reports_and_keeps_the_turn() {
        let mut app = App::new(&settings(""));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('5')));

        assert!(app.status_message().starts_with("Invalid move"));
        assert_eq!(app.state().to_move(), Player::O);
    }

    #[test]
    fn test_board_input_waits_for_the_computer() {
        let mut app = App::new(&settings("seed = 3\nai_delay_ms = 60000"));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Char('5')));
        assert!(app.computer_pending());

        let before = app.state().clone();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.state(), &before);
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_zero_delay_answers_on_the_next_tick() {
        let mut app = App::new(&settings("seed = 3\nai_delay_ms = 0"));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Char('5')));
        assert!(app.computer_pending());
        assert_eq!(app.status_message(), "Computer is thinking...");

        app.tick();

        assert!(!app.computer_pending());
        assert_eq!(app.state().board().count(Player::O), 1);
        assert_eq!(app.state().to_move(), Player::X);
        assert!(app.status_message().starts_with("Computer took"));
    }

    #[test]
    fn test_finished_game_shows_a_quote_and_restarts() {
        let mut app = App::new(&settings(""));
        app.handle_key(key(KeyCode::Enter));

        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(app.state().status(), &GameStatus::Won(Player::X));
        assert!(app.quote().is_some());
        assert!(app.status_message().contains("wins!"));

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.state().status(), &GameStatus::InProgress);
        assert!(app.quote().is_none());
    }

    #[test]
    fn test_theme_toggle_and_quit_keys() {
        let mut app = App::new(&settings(""));
        assert_eq!(app.theme(), Theme::Dark);

        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme(), Theme::Light);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_home_key_returns_to_the_menu() {
        let mut app = App::new(&settings(""));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Game);

        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.screen(), Screen::Home);
    }
}
