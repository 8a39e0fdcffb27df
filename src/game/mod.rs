//! Game engine: immutable values, pure transitions, outcome rules.

mod action;
mod history;
mod position;
mod rules;
mod types;

pub use action::{Action, HistoryError, Move, MoveError};
pub use history::{GameState, HistoryEntry};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use types::{Board, Player, Square};
