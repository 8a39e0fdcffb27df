//! Cursor movement for keyboard navigation.

use crate::game::Position;
use crossterm::event::KeyCode;

/// Moves the board cursor based on arrow keys, clamped at the edges.
pub(super) fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(Center, KeyCode::Up), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(Center, KeyCode::Left), MiddleLeft);
        assert_eq!(move_cursor(Center, KeyCode::Right), MiddleRight);
    }

    #[test]
    fn test_clamped_at_edges() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Left), TopLeft);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
        assert_eq!(move_cursor(BottomRight, KeyCode::Right), BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Center, KeyCode::Esc), Center);
    }
}
