//! Domain events: moves and inbound UI actions.
//!
//! Moves are first-class domain events, not side effects. They can be
//! validated, logged, and replayed independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.player, self.position)
    }
}

/// Inbound UI events the engine reacts to.
///
/// The presentation layer translates raw input into these and dispatches
/// them through [`GameState::reduce`](super::GameState::reduce).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A history entry was selected for time-travel.
    HistoryStepSelected(usize),
    /// A fresh game was requested.
    NewGameRequested,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error that can occur when jumping to a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step is outside the history bounds.
    #[display("Step {step} is out of range (history has {len} entries)")]
    OutOfRange {
        /// The requested step.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_coordinates() {
        let mov = Move::new(Player::X, Position::Center);
        assert_eq!(mov.to_string(), "X on B2");
        let mov = Move::new(Player::O, Position::TopLeft);
        assert_eq!(mov.to_string(), "O on A1");
    }

    #[test]
    fn test_error_display() {
        let err = MoveError::SquareOccupied(Position::BottomRight);
        assert_eq!(err.to_string(), "Square C3 is already occupied");
        let err = HistoryError::OutOfRange { step: 7, len: 3 };
        assert_eq!(err.to_string(), "Step 7 is out of range (history has 3 entries)");
    }
}
