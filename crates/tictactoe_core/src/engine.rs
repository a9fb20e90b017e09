//! The game engine: configuration, authoritative state, and moves.

use crate::ai;
use crate::config::{Difficulty, GameConfig, GameMode};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Index {} is out of bounds (expected 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// The game engine.
///
/// Owns the configuration, the authoritative [`GameState`], and the
/// RNG driving the computer opponent. All mutation goes through
/// [`GameEngine::apply_move`] and the reset operations, which keeps
/// the turn and status bookkeeping consistent; callers read state
/// through [`GameEngine::state`] and render from a clone if they need
/// a snapshot.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with an OS-seeded RNG.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an engine with a fixed seed.
    ///
    /// Games replay identically under the same seed and move
    /// sequence, which pins down the computer opponent in tests.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: GameState::new(),
            rng,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts a fresh game under the current configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }

    /// Installs a new configuration and starts a fresh game.
    ///
    /// Configuration is fixed while a game runs; changing it always
    /// begins a new game.
    #[instrument(skip(self))]
    pub fn configure(&mut self, config: GameConfig) {
        debug!(?config, "Reconfiguring engine");
        self.config = config;
        self.reset();
    }

    /// Applies a move for the player whose turn it is.
    ///
    /// `index` is a row-major board index (0-8). On success the mark
    /// is placed, the status updates (wins are checked before draws,
    /// so a move that wins on the last square wins), and the turn
    /// passes if the game continues. On error the state is left
    /// untouched and the same player remains to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8.
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = ?self.state.to_move()))]
    pub fn apply_move(&mut self, index: usize) -> Result<&GameState, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.to_move();
        self.state.place(pos, player);
        debug!(position = %pos, ?player, "Mark placed");

        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
            debug!(?winner, "Game won");
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            debug!("Game drawn");
        } else {
            self.state.flip_turn();
        }

        invariants::assert_invariants(&self.state);

        Ok(&self.state)
    }

    /// Chooses the computer's move under the configured difficulty.
    ///
    /// The computer always plays O. This only selects the square; use
    /// [`GameEngine::apply_computer_move`] to also apply it. The
    /// returned square is always empty.
    ///
    /// # Panics
    ///
    /// Panics if the engine is not configured for PvC, the game is
    /// over, or it is not O's turn. Driving the computer out of turn
    /// is a caller bug, not a recoverable condition.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Position {
        assert_eq!(
            self.config.mode(),
            &GameMode::PvC,
            "computer_move called in a {} game",
            self.config.mode()
        );
        assert!(
            !self.state.status().is_terminal(),
            "computer_move called after the game ended"
        );
        assert_eq!(
            self.state.to_move(),
            Player::O,
            "computer_move called on X's turn"
        );

        let pos = match self.config.difficulty() {
            Difficulty::Easy => ai::random_move(self.state.board(), &mut self.rng),
            Difficulty::Hard => ai::best_move(self.state.board(), Player::O, &mut self.rng),
        }
        .expect("an in-progress game has at least one empty square");

        debug!(position = %pos, difficulty = %self.config.difficulty(), "Computer chose a square");
        pos
    }

    /// Chooses and applies the computer's move, returning the square
    /// it played.
    ///
    /// # Panics
    ///
    /// Same contract as [`GameEngine::computer_move`].
    #[instrument(skip(self))]
    pub fn apply_computer_move(&mut self) -> Position {
        let pos = self.computer_move();
        self.apply_move(pos.to_index())
            .expect("computer moves target empty squares of a live game");
        pos
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_starts_fresh() {
        let engine = GameEngine::new(GameConfig::default());
        assert_eq!(engine.state().status(), &GameStatus::InProgress);
        assert_eq!(engine.state().to_move(), Player::X);
        assert_eq!(engine.state().board().empty_positions().len(), 9);
    }

    #[test]
    fn test_configure_resets_the_game() {
        let mut engine = GameEngine::seeded(GameConfig::default(), 3);
        engine.apply_move(0).unwrap();
        engine.apply_move(4).unwrap();

        let config = GameConfig::new(GameMode::PvC, Difficulty::Hard);
        engine.configure(config);

        assert_eq!(engine.config(), &config);
        assert_eq!(engine.state(), &GameState::new());
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let config = GameConfig::new(GameMode::PvC, Difficulty::Easy);
        let mut engine = GameEngine::seeded(config, 3);
        engine.apply_move(0).unwrap();
        engine.reset();

        assert_eq!(engine.config(), &config);
        assert_eq!(engine.state(), &GameState::new());
    }
}
