//! Error types for the engine.

use crate::Action;
use derive_more::{Display, Error};

/// Error that can occur when reading a board or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The board is not a 3x3 grid of `X`, `O` and empty cells.
    #[display("Invalid board: {reason}")]
    InvalidBoard {
        /// What is wrong with the board.
        reason: String,
    },

    /// The action is not legal on the board it was applied to.
    #[display("Invalid action {action}: {reason}")]
    InvalidAction {
        /// The rejected action.
        action: Action,
        /// Why the action was rejected.
        reason: String,
    },
}

impl GameError {
    /// Creates an invalid-board error.
    pub fn invalid_board(reason: impl Into<String>) -> Self {
        Self::InvalidBoard {
            reason: reason.into(),
        }
    }

    /// Creates an invalid-action error.
    pub fn invalid_action(action: Action, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            action,
            reason: reason.into(),
        }
    }
}

/// Convenience result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
