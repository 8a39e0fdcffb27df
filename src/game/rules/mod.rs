//! Outcome evaluation: win and draw detection over a board.

mod draw;
mod win;

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// Every cell belonging to a completed line.
        fields: Vec<Position>,
    },
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Whether the game is over (won or drawn).
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The cells of the winning line(s), empty unless the game is won.
    pub fn winning_fields(&self) -> &[Position] {
        match self {
            Outcome::Won { fields, .. } => fields,
            _ => &[],
        }
    }
}

/// Evaluates a board into an outcome.
///
/// A completed line wins; a full board with no completed line is a
/// draw; anything else is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, fields)) = win::check_winner(board) {
        Outcome::Won { winner, fields }
    } else if draw::is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
