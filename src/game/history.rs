//! Game state as an append-only history with a movable step pointer.

use super::rules::{self, Outcome};
use super::{Action, Board, HistoryError, Move, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the game's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
    outcome: Outcome,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
            outcome: Outcome::InProgress,
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this step, `None` for the initial entry.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The outcome of the board at this step.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Complete game state: every snapshot plus the active step.
///
/// Values are immutable: transitions return a new `GameState` and never
/// alter entries at or before the prior step, so earlier snapshots stay
/// valid for time-travel. The next player is not stored; it is derived
/// from the active step's parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

impl GameState {
    /// Creates the initial state: one empty-board entry, X to move.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
        }
    }

    /// Every snapshot from the start of the game, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the active step into the history.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The snapshot at the active step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// The player to move, derived from step parity: X on even steps.
    pub fn next_player(&self) -> Player {
        if self.current_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places the next player's mark at `position`.
    ///
    /// Entries beyond the active step are discarded first: making a move
    /// after time-travel branches off and abandons the old future. The
    /// new snapshot is appended and becomes the active step.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the active board is already decided,
    /// [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, position: Position) -> Result<GameState, MoveError> {
        let current = self.current();
        if current.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.next_player();
        let mut board = current.board().clone();
        board.set(position, Square::Occupied(player));
        let outcome = rules::evaluate(&board);

        let mut history = self.history[..=self.current_step].to_vec();
        history.push(HistoryEntry {
            board,
            last_move: Some(Move::new(player, position)),
            outcome,
        });
        let current_step = history.len() - 1;
        debug!(step = current_step, %player, %position, "move applied");

        Ok(GameState {
            history,
            current_step,
        })
    }

    /// Moves the active step without touching the history.
    ///
    /// The history is not truncated here; it only shrinks if a move is
    /// made from the earlier step. Jumping works from any state, so a
    /// finished game becomes playable again by selecting a prior step.
    ///
    /// # Errors
    ///
    /// [`HistoryError::OutOfRange`] if `step` is past the last entry.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(GameState {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Pure reducer: maps an inbound action to the next state.
    ///
    /// Rejected transitions (occupied cell, finished board, out-of-range
    /// step) recover as no-ops: the unchanged state comes back and the
    /// rejection is logged at debug level.
    pub fn reduce(&self, action: Action) -> GameState {
        match action {
            Action::CellClicked(position) => match self.apply_move(position) {
                Ok(next) => next,
                Err(err) => {
                    debug!(%err, %position, "move rejected");
                    self.clone()
                }
            },
            Action::HistoryStepSelected(step) => match self.jump_to(step) {
                Ok(next) => next,
                Err(err) => {
                    debug!(%err, "jump rejected");
                    self.clone()
                }
            },
            Action::NewGameRequested => GameState::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
