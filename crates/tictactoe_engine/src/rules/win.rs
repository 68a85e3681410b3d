//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in [`LINES`] order,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let rows = board.rows();
    for [a, b, c] in LINES {
        let sq = rows[a.0][a.1];
        if sq != Cell::Empty && sq == rows[b.0][b.1] && sq == rows[c.0][c.1] {
            return sq.player();
        }
    }

    None
}
