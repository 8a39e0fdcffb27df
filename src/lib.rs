//! Tic-tac-toe with move history and time-travel.
//!
//! The engine is a set of immutable values and pure transitions: every
//! user input becomes an [`Action`], and [`GameState::reduce`] maps the
//! current state plus an action to the next state. Earlier history
//! entries are never altered, so any prior step can be revisited, and a
//! move made from a past step branches off by discarding the abandoned
//! future.
//!
//! The terminal adapter in [`tui`] holds the single [`GameState`],
//! renders the [`GameView`] projection, and forwards input events.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod tui;
mod view;

pub use game::{
    Action, Board, GameState, HistoryEntry, HistoryError, Move, MoveError, Outcome, Player,
    Position, Square, evaluate,
};
pub use view::{CellView, GameView, HistoryLabel};
