//! Validation of boards arriving from outside the type system.
//!
//! A [`Board`] is a fixed 3x3 array of [`Cell`], so once constructed it is
//! always well-formed. Boards from text, JSON or nested rows are checked
//! here first; every external conversion into `Board` goes through
//! [`validate_board`].

use crate::{Board, Cell, GameError, GameResult};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Unvalidated board: rows of optional cell symbols, `None` for empty.
///
/// This is also the JSON encoding of [`Board`]
/// (`[["X", null, "O"], [null, "X", null], [null, null, "O"]]`).
pub type Grid = Vec<Vec<Option<String>>>;

/// Returns true iff `grid` has 3 rows of 3 cells, each a legal cell value.
pub fn is_valid_board(grid: &[Vec<Option<String>>]) -> bool {
    find_defect(grid).is_none()
}

/// Fails with [`GameError::InvalidBoard`] unless `grid` is a valid board.
#[instrument(level = "debug", skip(grid))]
pub fn validate_board(grid: &[Vec<Option<String>>]) -> GameResult<()> {
    match find_defect(grid) {
        Some(reason) => {
            warn!(%reason, "Rejected malformed board");
            Err(GameError::invalid_board(reason))
        }
        None => Ok(()),
    }
}

/// First problem found in `grid`, if any.
fn find_defect(grid: &[Vec<Option<String>>]) -> Option<String> {
    if grid.len() != 3 {
        return Some(format!("expected 3 rows, found {}", grid.len()));
    }
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != 3 {
            return Some(format!("row {} has {} cells, expected 3", row, cells.len()));
        }
        for (col, cell) in cells.iter().enumerate() {
            if let Some(symbol) = cell
                && Cell::from_symbol(symbol).is_none()
            {
                return Some(format!("illegal cell value {:?} at ({}, {})", symbol, row, col));
            }
        }
    }
    None
}

impl TryFrom<Grid> for Board {
    type Error = GameError;

    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        Board::try_from(grid.as_slice())
    }
}

impl TryFrom<&[Vec<Option<String>>]> for Board {
    type Error = GameError;

    fn try_from(grid: &[Vec<Option<String>>]) -> Result<Self, Self::Error> {
        validate_board(grid)?;

        let mut cells = [[Cell::Empty; 3]; 3];
        for (target, source) in cells.iter_mut().zip(grid) {
            for (cell, symbol) in target.iter_mut().zip(source) {
                *cell = match symbol {
                    None => Cell::Empty,
                    Some(symbol) => Cell::from_symbol(symbol).ok_or_else(|| {
                        GameError::invalid_board(format!("illegal cell value {:?}", symbol))
                    })?,
                };
            }
        }
        Ok(Board::from_rows(cells))
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.player().map(|player| player.to_string()))
                    .collect()
            })
            .collect()
    }
}

/// Splits board text into a grid.
///
/// Rows are separated by `/` or newlines; text without separators is read
/// as consecutive rows of three symbols.
fn parse_grid(text: &str) -> Grid {
    let text = text.trim();
    let rows: Vec<Vec<char>> = if text.contains(['/', '\n']) {
        text.split(['/', '\n'])
            .map(|row| row.trim().chars().collect())
            .collect()
    } else {
        text.chars()
            .collect::<Vec<_>>()
            .chunks(3)
            .map(<[char]>::to_vec)
            .collect()
    };

    rows.into_iter()
        .map(|row| row.into_iter().map(|ch| Some(ch.to_string())).collect())
        .collect()
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses `X.O/.X./..O`, `X.O.X...O`, or the same rows on separate lines.
    #[instrument(level = "debug")]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Board::try_from(parse_grid(text))
    }
}
