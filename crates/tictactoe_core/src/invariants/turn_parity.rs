//! Turn parity invariant: the turn matches the mark counts.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: while the game is in progress, the player to move
/// matches mark parity.
///
/// Equal counts mean X is to move; X one ahead means O is to move.
/// Terminal states keep whatever `to_move` held when the game ended,
/// so the check only applies in progress.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status().is_terminal() {
            return true;
        }

        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        match state.to_move() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Turn matches mark parity while the game is in progress"
    }
}
