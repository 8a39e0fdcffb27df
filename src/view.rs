//! Read-only projection of the game state for presentation layers.
//!
//! A [`GameView`] carries everything a renderer needs: the marks, which
//! cells completed a line, the status text, and the time-travel labels.
//! Projecting it is free of terminal concerns, so the strings the user
//! sees are testable without a rendering environment.

use crate::game::{GameState, Outcome, Player, Position, Square};
use strum::IntoEnumIterator;

/// One renderable cell: its mark and whether it completed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    mark: Option<Player>,
    winning: bool,
}

impl CellView {
    /// The mark occupying this cell, if any.
    pub fn mark(&self) -> Option<Player> {
        self.mark
    }

    /// Whether this cell is part of the winning line.
    pub fn is_winning(&self) -> bool {
        self.winning
    }
}

/// Label for one history entry in the time-travel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLabel {
    step: usize,
    label: String,
    caption: Option<String>,
}

impl HistoryLabel {
    /// The step this label jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The jump label, e.g. `Go to move no. 3`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The move caption, e.g. `X on B2`; `None` for the initial entry.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}

/// Everything a presentation layer needs to render a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    cells: [CellView; 9],
    status: String,
    moves: Vec<HistoryLabel>,
    current_step: usize,
}

impl GameView {
    /// Projects a game state into renderable form.
    pub fn project(state: &GameState) -> Self {
        let entry = state.current();
        let outcome = entry.outcome();

        let mut cells = [CellView {
            mark: None,
            winning: false,
        }; 9];
        for position in Position::iter() {
            let mark = match entry.board().get(position) {
                Square::Empty => None,
                Square::Occupied(player) => Some(player),
            };
            cells[position.to_index()] = CellView {
                mark,
                winning: outcome.winning_fields().contains(&position),
            };
        }

        let status = match outcome {
            Outcome::Draw => "It's a tie!".to_string(),
            Outcome::Won { winner, .. } => format!("The winner is: {winner}"),
            Outcome::InProgress => format!("Next player: {}", state.next_player()),
        };

        let moves = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| HistoryLabel {
                step,
                label: if step == 0 {
                    "Go to the beginning".to_string()
                } else {
                    format!("Go to move no. {step}")
                },
                caption: entry.last_move().map(|mov| mov.to_string()),
            })
            .collect();

        Self {
            cells,
            status,
            moves,
            current_step: state.current_step(),
        }
    }

    /// The 9 cells in row-major order.
    pub fn cells(&self) -> &[CellView; 9] {
        &self.cells
    }

    /// The cell for a given position.
    pub fn cell(&self, position: Position) -> CellView {
        self.cells[position.to_index()]
    }

    /// The status line: next player, winner, or tie.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// One label per history entry, oldest first.
    pub fn moves(&self) -> &[HistoryLabel] {
        &self.moves
    }

    /// The active step, for marking the current entry in the list.
    pub fn current_step(&self) -> usize {
        self.current_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action;
    use Position::*;

    fn play(positions: &[Position]) -> GameState {
        positions.iter().fold(GameState::new(), |state, &position| {
            state.reduce(Action::CellClicked(position))
        })
    }

    #[test]
    fn test_status_next_player() {
        let view = GameView::project(&GameState::new());
        assert_eq!(view.status(), "Next player: X");
        let view = GameView::project(&play(&[Center]));
        assert_eq!(view.status(), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let state = play(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
        let view = GameView::project(&state);
        assert_eq!(view.status(), "The winner is: X");
    }

    #[test]
    fn test_status_tie() {
        // X O X
        // X O O
        // O X X
        let state = play(&[
            TopLeft,
            TopCenter,
            TopRight,
            Center,
            MiddleLeft,
            MiddleRight,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ]);
        let view = GameView::project(&state);
        assert_eq!(view.status(), "It's a tie!");
    }

    #[test]
    fn test_winning_cells_flagged() {
        let state = play(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
        let view = GameView::project(&state);
        for position in Position::ALL {
            let expected = matches!(position, TopLeft | TopCenter | TopRight);
            assert_eq!(view.cell(position).is_winning(), expected, "{position}");
        }
    }

    #[test]
    fn test_no_winning_cells_while_in_progress() {
        let view = GameView::project(&play(&[Center, TopLeft]));
        assert!(view.cells().iter().all(|cell| !cell.is_winning()));
    }

    #[test]
    fn test_history_labels() {
        let state = play(&[Center, TopLeft]);
        let view = GameView::project(&state);
        let moves = view.moves();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].label(), "Go to the beginning");
        assert_eq!(moves[0].caption(), None);
        assert_eq!(moves[1].label(), "Go to move no. 1");
        assert_eq!(moves[1].caption(), Some("X on B2"));
        assert_eq!(moves[2].label(), "Go to move no. 2");
        assert_eq!(moves[2].caption(), Some("O on A1"));
    }

    #[test]
    fn test_view_follows_active_step() {
        let state = play(&[Center, TopLeft]).reduce(Action::HistoryStepSelected(0));
        let view = GameView::project(&state);
        assert_eq!(view.current_step(), 0);
        assert!(view.cells().iter().all(|cell| cell.mark().is_none()));
        // The full history stays listed while time-traveling.
        assert_eq!(view.moves().len(), 3);
    }
}
