//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines, scanned in a fixed order: rows top to
/// bottom, then columns left to right, then both diagonals.
///
/// The order is part of the engine's observable behavior - the
/// computer opponent takes the first line that matches its rule, so
/// reordering this table changes which move it picks.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first fully-owned line in
/// [`WIN_LINES`] order, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, positions: &[Position], player: Player) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_every_line_both_players() {
        for line in WIN_LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                occupy(&mut board, &line, player);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter],
            Player::X,
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter],
            Player::X,
        );
        occupy(&mut board, &[Position::TopRight], Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_full_board() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        occupy(
            &mut board,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
            Player::X,
        );
        occupy(
            &mut board,
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
            Player::O,
        );
        assert_eq!(check_winner(&board), None);
    }
}
