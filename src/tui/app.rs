//! Application state and input-to-action mapping.

use super::input;
use crate::game::{Action, GameState, Position};
use crate::view::GameView;
use crossterm::event::KeyCode;
use tracing::debug;

/// Which pane keyboard input acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// The 3x3 board.
    Board,
    /// The time-travel history list.
    History,
}

/// Main application state: the engine value plus UI-local cursors.
pub(super) struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub(super) fn new() -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
        }
    }

    /// Projects the current state for rendering.
    pub(super) fn view(&self) -> GameView {
        GameView::project(&self.state)
    }

    pub(super) fn cursor(&self) -> Position {
        self.cursor
    }

    pub(super) fn focus(&self) -> Focus {
        self.focus
    }

    pub(super) fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Handles a key press, dispatching an engine action where one applies.
    pub(super) fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n') | KeyCode::Char('N') => self.dispatch(Action::NewGameRequested),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(position) = Position::from_index(c as usize - '1' as usize) {
                    self.dispatch(Action::CellClicked(position));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.dispatch(Action::CellClicked(self.cursor)),
                Focus::History => self.dispatch(Action::HistoryStepSelected(self.selected_step)),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, code),
                Focus::History => self.move_selection(code),
            },
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.state.current_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last = self.state.history().len() - 1;
        self.selected_step = match code {
            KeyCode::Up => self.selected_step.saturating_sub(1),
            KeyCode::Down => (self.selected_step + 1).min(last),
            _ => self.selected_step,
        };
    }

    fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatching");
        self.state = self.state.reduce(action);
        // Branching can shrink the history; keep the selection in range.
        self.selected_step = self.selected_step.min(self.state.history().len() - 1);
    }
}
