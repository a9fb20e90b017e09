//! Sole winner invariant: both players cannot complete lines.

use super::Invariant;
use crate::rules::WIN_LINES;
use crate::types::{GameState, Player, Square};

/// Invariant: completed lines never belong to both players.
///
/// One player may complete several lines at once (a double win), but
/// the loser stops moving the instant the game ends, so an X line and
/// an O line on the same board is unreachable.
pub struct SoleWinnerInvariant;

impl Invariant<GameState> for SoleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let mut x_line = false;
        let mut o_line = false;

        for [a, b, c] in WIN_LINES {
            let sq = state.board().get(a);
            if sq != Square::Empty && sq == state.board().get(b) && sq == state.board().get(c) {
                match sq {
                    Square::Occupied(Player::X) => x_line = true,
                    Square::Occupied(Player::O) => o_line = true,
                    Square::Empty => {}
                }
            }
        }

        !(x_line && o_line)
    }

    fn description() -> &'static str {
        "Completed lines belong to at most one player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn place_all(state: &mut GameState, positions: &[Position], player: Player) {
        for pos in positions {
            state.place(*pos, player);
        }
    }

    #[test]
    fn test_single_winner_holds() {
        let mut state = GameState::new();
        place_all(
            &mut state,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        place_all(&mut state, &[Position::Center, Position::MiddleLeft], Player::O);
        assert!(SoleWinnerInvariant::holds(&state));
    }

    #[test]
    fn test_double_line_same_player_holds() {
        // X owns the left column and the top row at once
        let mut state = GameState::new();
        place_all(
            &mut state,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Player::X,
        );
        assert!(SoleWinnerInvariant::holds(&state));
    }

    #[test]
    fn test_both_players_winning_violates() {
        let mut state = GameState::new();
        place_all(
            &mut state,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        place_all(
            &mut state,
            &[
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Player::O,
        );
        assert!(!SoleWinnerInvariant::holds(&state));
    }
}
