//! Scenario tests driving the engine through its public reducer API.

use tictactoe_rewind::{
    Action, GameState, GameView, Outcome, Player, Position, Square, evaluate,
};
use Position::*;

fn play(state: GameState, positions: &[Position]) -> GameState {
    positions.iter().fold(state, |state, &position| {
        state.reduce(Action::CellClicked(position))
    })
}

#[test]
fn test_center_opening() {
    let state = play(GameState::new(), &[Center]);
    assert_eq!(
        state.current().board().get(Center),
        Square::Occupied(Player::X)
    );
    assert_eq!(state.current().outcome(), &Outcome::InProgress);
    assert_eq!(state.next_player(), Player::O);
}

#[test]
fn test_top_row_win_with_fields() {
    // X fills the top row while O replies on the middle row.
    let state = play(
        GameState::new(),
        &[TopLeft, MiddleLeft, TopCenter, Center, TopRight],
    );
    assert_eq!(
        state.current().outcome(),
        &Outcome::Won {
            winner: Player::X,
            fields: vec![TopLeft, TopCenter, TopRight],
        }
    );
    assert_eq!(GameView::project(&state).status(), "The winner is: X");
}

#[test]
fn test_finished_board_ignores_clicks() {
    let won = play(
        GameState::new(),
        &[TopLeft, MiddleLeft, TopCenter, Center, TopRight],
    );
    let after = won.reduce(Action::CellClicked(BottomRight));
    assert_eq!(after, won);
}

#[test]
fn test_full_game_to_tie() {
    // Ends at X O X / X O O / O X X with no line completed on the way.
    let state = play(
        GameState::new(),
        &[
            TopLeft,
            TopCenter,
            TopRight,
            Center,
            MiddleLeft,
            MiddleRight,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ],
    );
    assert_eq!(state.current().outcome(), &Outcome::Draw);
    assert_eq!(state.history().len(), 10);
    assert_eq!(GameView::project(&state).status(), "It's a tie!");
}

#[test]
fn test_jump_to_beginning_then_branch() {
    let state = play(GameState::new(), &[Center, TopLeft, BottomRight]);
    assert_eq!(state.history().len(), 4);

    let rewound = state.reduce(Action::HistoryStepSelected(0));
    assert_eq!(rewound.history().len(), 4, "jumping must not truncate");
    assert_eq!(rewound.next_player(), Player::X);
    let view = GameView::project(&rewound);
    assert!(view.cells().iter().all(|cell| cell.mark().is_none()));

    // A new move from the beginning discards entries 1-3.
    let branched = rewound.reduce(Action::CellClicked(TopRight));
    assert_eq!(branched.history().len(), 2);
    assert_eq!(branched.current_step(), 1);
    assert_eq!(
        branched.current().board().get(TopRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_new_game_after_moves() {
    let state = play(GameState::new(), &[Center, TopLeft, BottomRight]);
    let fresh = state.reduce(Action::NewGameRequested);
    assert_eq!(fresh.history().len(), 1);
    assert_eq!(fresh.current_step(), 0);
    assert_eq!(fresh.next_player(), Player::X);
    assert!(fresh.current().board().squares().iter().all(|square| *square == Square::Empty));
}

#[test]
fn test_out_of_range_jump_is_noop() {
    let state = play(GameState::new(), &[Center]);
    let after = state.reduce(Action::HistoryStepSelected(10));
    assert_eq!(after, state);
}

#[test]
fn test_evaluate_is_usable_standalone() {
    let state = play(
        GameState::new(),
        &[TopLeft, MiddleLeft, TopCenter, Center, TopRight],
    );
    let board = state.current().board();
    assert_eq!(evaluate(board), *state.current().outcome());
}
