//! Win detection logic.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks the board for completed lines.
///
/// Returns the winning player together with every cell of every
/// completed line. Scanning continues past the first hit: a board with
/// two simultaneous lines (unreachable under alternating play, but
/// constructible directly) reports the union of both lines' cells.
#[instrument]
pub(super) fn check_winner(board: &Board) -> Option<(Player, Vec<Position>)> {
    let mut winner = None;
    let mut fields = Vec::new();

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            winner = Some(player);
            fields.extend([a, b, c]);
        }
    }

    fields.sort();
    fields.dedup();
    winner.map(|player| (player, fields))
}
