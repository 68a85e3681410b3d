//! The transition function: applying an action to a board.

use crate::rules::{initial_state, player, terminal};
use crate::{Action, Board, Cell, GameError, GameResult};
use tracing::{instrument, warn};

/// Returns the board that results from the side to move playing `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] if `action` is off the board or
/// names an occupied cell.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, action: Action) -> GameResult<Board> {
    match board.get(action.row, action.col) {
        None => {
            warn!(%action, "Action is off the board");
            Err(GameError::invalid_action(action, "coordinates out of range"))
        }
        Some(Cell::Occupied(owner)) => {
            warn!(%action, %owner, "Action targets an occupied cell");
            Err(GameError::invalid_action(
                action,
                format!("cell is already occupied by {}", owner),
            ))
        }
        Some(Cell::Empty) => Ok(successor(board, action)),
    }
}

/// Applies an action already known to be legal.
pub(crate) fn successor(board: &Board, action: Action) -> Board {
    board.with_mark(action.row, action.col, player(board))
}

/// Replays actions from the initial state and returns the final board.
///
/// # Errors
///
/// Fails on the first illegal action, including any action played after
/// the game has already ended.
#[instrument]
pub fn replay(actions: &[Action]) -> GameResult<Board> {
    actions
        .iter()
        .try_fold(initial_state(), |board, &action| {
            if terminal(&board) {
                warn!(%action, "Action played after the game ended");
                return Err(GameError::invalid_action(action, "game is already over"));
            }
            result(&board, action)
        })
}
