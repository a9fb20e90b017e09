//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of what the engine guarantees.

use crate::types::GameState;
use tracing::instrument;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_board;
pub mod sole_winner;
pub mod turn_parity;

pub use balanced_board::BalancedBoardInvariant;
pub use sole_winner::SoleWinnerInvariant;
pub use turn_parity::TurnParityInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    BalancedBoardInvariant,
    TurnParityInvariant,
    SoleWinnerInvariant,
);

/// Asserts that all game invariants hold (panic on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        BalancedBoardInvariant::holds(state),
        "{}",
        BalancedBoardInvariant::description()
    );
    debug_assert!(
        TurnParityInvariant::holds(state),
        "{}",
        TurnParityInvariant::description()
    );
    debug_assert!(
        SoleWinnerInvariant::holds(state),
        "{}",
        SoleWinnerInvariant::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_invariant_set_holds_for_fresh_state() {
        let state = GameState::new();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_alternating_moves() {
        let mut state = GameState::new();
        state.place(Position::TopLeft, Player::X);
        state.flip_turn();
        state.place(Position::Center, Player::O);
        state.flip_turn();
        state.place(Position::TopRight, Player::X);
        state.flip_turn();

        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // Two O marks and no X is unreachable through the engine
        let mut state = GameState::new();
        state.place(Position::TopLeft, Player::O);
        state.place(Position::Center, Player::O);

        let result = GameInvariants::check_all(&state);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = GameState::new();

        type TwoInvariants = (BalancedBoardInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
