//! Game rules for tic-tac-toe.
//!
//! Pure queries over a [`Board`](crate::Board): whose turn it is, which
//! moves are legal, who has won and whether the game is over.

pub mod terminal;
pub mod turn;
pub mod win;

pub use terminal::{status, terminal, utility};
pub use turn::{actions, initial_state, player};
pub use win::winner;
