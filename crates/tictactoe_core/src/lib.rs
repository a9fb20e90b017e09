//! Tic-tac-toe game engine with a rule-based computer opponent.
//!
//! The engine is a plain state machine: a [`GameConfig`] chosen up
//! front, a [`GameState`] that only moves through [`GameEngine`]
//! operations, and pure rule functions underneath. No I/O lives here;
//! front-ends render snapshots of the state and feed indices back in.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns config, state, and the RNG
//! - **Rules**: pure win/draw evaluation over the board ([`rules`])
//! - **AI**: random and win/block/center/corner opponents ([`ai`])
//! - **Invariants**: first-class state properties, asserted in debug
//!   builds ([`invariants`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, GameConfig, GameEngine, GameMode, GameStatus};
//!
//! # fn main() -> Result<(), tictactoe_core::MoveError> {
//! let config = GameConfig::new(GameMode::PvC, Difficulty::Hard);
//! let mut engine = GameEngine::seeded(config, 42);
//!
//! // X opens in the center; the computer replies as O.
//! engine.apply_move(4)?;
//! let reply = engine.apply_computer_move();
//!
//! assert_ne!(reply.to_index(), 4);
//! assert_eq!(engine.state().status(), &GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod config;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

// Crate-level exports - configuration
pub use config::{Difficulty, GameConfig, GameMode};

// Crate-level exports - engine
pub use engine::{GameEngine, MoveError};

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
