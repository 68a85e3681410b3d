//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Parses a single cell symbol.
    ///
    /// `X` and `O` (either case) are marks; `.`, `-`, `_` and the empty
    /// string denote an empty cell. Anything else is not a cell value.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "X" | "x" => Some(Cell::Occupied(Player::X)),
            "O" | "o" => Some(Cell::Occupied(Player::O)),
            "" | "." | "-" | "_" => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Text symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: nothing in the public API mutates one in place.
/// Successor boards come from [`result`](crate::result), and boards from
/// outside the crate enter through the validated conversions in
/// [`validate`](crate::validate_board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::Grid", into = "crate::Grid")]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from typed rows.
    pub const fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if the cell at `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(player))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|cell| *cell != Cell::Empty).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| cell != Cell::Empty)
    }

    /// Returns a copy of the board with `player`'s mark at `(row, col)`.
    ///
    /// Callers guarantee the coordinates are on the board.
    pub(crate) fn with_mark(mut self, row: usize, col: usize, player: Player) -> Self {
        self.cells[row][col] = Cell::Occupied(player);
        self
    }

    /// Formats the board as a human-readable string.
    #[instrument(level = "trace")]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                result.push(cell.symbol());
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact single-line form, rows separated by `/` (e.g. `X.O/.X./..O`).
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Terminal outcome scored from X's perspective.
///
/// Variants are declared in score order, so the derived ordering matches
/// [`Utility::score`].
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
pub enum Utility {
    /// O has three in a row.
    OWins = -1,
    /// Draw, or a board that is not finished yet.
    Draw = 0,
    /// X has three in a row.
    XWins = 1,
}

impl Utility {
    /// Integer score: 1, 0 or -1.
    pub fn score(self) -> i32 {
        self as i32
    }

    /// Maps a search score back onto an outcome by its sign.
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Utility::XWins,
            -1 => Utility::OWins,
            _ => Utility::Draw,
        }
    }

    /// Utility of a win by `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Utility::XWins,
            Player::O => Utility::OWins,
        }
    }
}

impl std::fmt::Display for Utility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Utility::XWins => write!(f, "X wins"),
            Utility::OWins => write!(f, "O wins"),
            Utility::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(!board.is_full());
        assert!(board.cells().all(|cell| cell == Cell::Empty));
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert!(!board.is_empty(5, 5));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(1, 1, Player::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(1, 1), Some(Cell::Occupied(Player::X)));
        assert_eq!(next.count(Player::X), 1);
    }

    #[test]
    fn test_display_layout() {
        let board = Board::new()
            .with_mark(0, 0, Player::X)
            .with_mark(2, 2, Player::O);
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|O");
        assert_eq!(board.to_compact(), "X../.../..O");
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::from_symbol("x"), Some(Cell::Occupied(Player::X)));
        assert_eq!(Cell::from_symbol("O"), Some(Cell::Occupied(Player::O)));
        assert_eq!(Cell::from_symbol("."), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol("Z"), None);
        assert_eq!(Cell::from_symbol("XO"), None);
    }

    #[test]
    fn test_utility_ordering_matches_score() {
        let utilities: Vec<_> = Utility::iter().collect();
        for pair in utilities.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].score() < pair[1].score());
        }
        for utility in Utility::iter() {
            assert_eq!(Utility::from_score(utility.score()), utility);
        }
    }

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }
}
