//! Balanced board invariant: X moves first, turns alternate.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: mark counts stay balanced.
///
/// X moves first and turns alternate, so every reachable board
/// satisfies `count(O) <= count(X) <= count(O) + 1`.
pub struct BalancedBoardInvariant;

impl Invariant<GameState> for BalancedBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        o <= x && x <= o + 1
    }

    fn description() -> &'static str {
        "Mark counts balanced: count(O) <= count(X) <= count(O) + 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_state_holds() {
        assert!(BalancedBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_x_one_ahead_holds() {
        let mut state = GameState::new();
        state.place(Position::TopLeft, Player::X);
        assert!(BalancedBoardInvariant::holds(&state));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut state = GameState::new();
        state.place(Position::TopLeft, Player::O);
        assert!(!BalancedBoardInvariant::holds(&state));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut state = GameState::new();
        state.place(Position::TopLeft, Player::X);
        state.place(Position::Center, Player::X);
        assert!(!BalancedBoardInvariant::holds(&state));
    }
}
