//! Moves on the board as `(row, col)` coordinates.
//!
//! An action is only meaningful relative to a board: it is legal when both
//! coordinates lie in `0..3` and name an empty cell.

use serde::{Deserialize, Serialize};

/// A move: the coordinates of the cell the side to move marks.
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
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Action {
    /// Creates a new action. Coordinates are not checked here.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates are on the 3x3 grid.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Get label for this action (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }

    /// All 9 on-board actions in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
