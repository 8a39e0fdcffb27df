//! Board positions and their coordinate labels.

use serde::{Deserialize, Serialize};

/// A position on the board, row-major indices 0-8.
///
/// Positions display as board coordinates: rows A/B/C from the top,
/// columns 1/2/3 from the left, so index 0 is `A1` and index 8 is `C3`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0, `A1`).
    TopLeft,
    /// Top-center (index 1, `A2`).
    TopCenter,
    /// Top-right (index 2, `A3`).
    TopRight,
    /// Middle-left (index 3, `B1`).
    MiddleLeft,
    /// Center (index 4, `B2`).
    Center,
    /// Middle-right (index 5, `B3`).
    MiddleRight,
    /// Bottom-left (index 6, `C1`).
    BottomLeft,
    /// Bottom-center (index 7, `C2`).
    BottomCenter,
    /// Bottom-right (index 8, `C3`).
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts the position to its row-major board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The board coordinate label (`A1` through `C3`).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = ["A1", "A2", "A3", "B1", "B2", "B3", "C1", "C2", "C3"];
        LABELS[self.to_index()]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
