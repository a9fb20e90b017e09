//! Computer opponent move selection.
//!
//! Two strengths, both pure functions over the board with an injected
//! RNG so games replay identically under a fixed seed:
//!
//! - [`random_move`] picks uniformly among empty squares (easy).
//! - [`best_move`] runs a fixed rule cascade (hard): win now, block
//!   the opponent, take the center, take a random empty corner, then
//!   fall back to a random empty square. It looks ahead one move
//!   only, so a fork still beats it.

use crate::position::Position;
use crate::rules::WIN_LINES;
use crate::types::{Board, Player, Square};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::instrument;

/// Corners in the order the cascade samples them.
const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Picks a uniformly random empty square.
///
/// Returns `None` only when the board is full.
#[instrument(skip(rng))]
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// Finds the square that completes a line for `player`, if any.
///
/// Scans [`WIN_LINES`] in table order and returns the empty square of
/// the first line where `player` already owns the other two.
#[instrument]
pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
    WIN_LINES
        .iter()
        .find_map(|line| winning_move_in_line(board, player, line))
}

/// The empty square of a two-owned-one-empty line, `None` otherwise.
fn winning_move_in_line(board: &Board, player: Player, line: &[Position; 3]) -> Option<Position> {
    let mut empty = None;
    let mut owned = 0;

    for pos in line {
        match board.get(*pos) {
            Square::Empty => empty = Some(*pos),
            Square::Occupied(p) if p == player => owned += 1,
            Square::Occupied(_) => return None,
        }
    }

    if owned == 2 { empty } else { None }
}

/// Picks a move for `player` using the fixed rule cascade.
///
/// Rule order: win now, block the opponent's win, take the center,
/// take a random empty corner, random fallback. The first matching
/// rule decides. Returns `None` only when the board is full.
#[instrument(skip(rng))]
pub fn best_move<R: Rng>(board: &Board, player: Player, rng: &mut R) -> Option<Position> {
    if let Some(pos) = winning_move(board, player) {
        return Some(pos);
    }

    if let Some(pos) = winning_move(board, player.opponent()) {
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = corners.choose(rng) {
        return Some(*pos);
    }

    random_move(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_winning_move_completes_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        assert_eq!(winning_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_winning_move_needs_two_owned() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert_eq!(winning_move(&board, Player::O), None);
    }

    #[test]
    fn test_winning_move_ignores_spoiled_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_move(&board, Player::O), None);
    }

    #[test]
    fn test_random_move_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng), None);
    }
}
