//! End-of-game detection and scoring.

use super::win::winner;
use crate::{Board, GameStatus, Utility};
use tracing::instrument;

/// Returns true if the game is over: someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores the board from X's perspective.
///
/// Only meaningful on terminal boards; an unfinished board scores
/// [`Utility::Draw`].
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    winner(board).map_or(Utility::Draw, Utility::win_for)
}

/// Summarizes the board as a game status.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
