//! Tic-tac-toe engine - pure game logic and optimal play
//!
//! # Architecture
//!
//! - **Validation**: boards from text or JSON are checked before they become a [`Board`]
//! - **Rules**: turn order, legal actions, winner and terminal detection, utility
//! - **Transition**: [`result`] derives the successor board without touching the input
//! - **Search**: [`minimax`] runs an exhaustive alpha-beta search for the side to move
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Utility, initial_state, minimax, minimax_value, result};
//!
//! # fn example() -> Result<(), tictactoe_engine::GameError> {
//! let board: Board = "XX./OO./...".parse()?;
//! let action = minimax(&board).expect("game is not over");
//! let next = result(&board, action)?;
//! assert_eq!(minimax_value(&next), Utility::XWins);
//!
//! assert_eq!(minimax_value(&initial_state()), Utility::Draw);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod rules;
mod search;
mod transition;
mod types;
mod validate;

// Crate-level exports - Domain types
pub use action::Action;
pub use types::{Board, Cell, GameStatus, Player, Utility};

// Crate-level exports - Errors
pub use error::{GameError, GameResult};

// Crate-level exports - Validation
pub use validate::{Grid, is_valid_board, validate_board};

// Crate-level exports - Rules
pub use rules::win::LINES;
pub use rules::{actions, initial_state, player, status, terminal, utility, winner};

// Crate-level exports - Transition
pub use transition::{replay, result};

// Crate-level exports - Search
pub use search::{SearchReport, analyze, minimax, minimax_value, self_play};
