//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - optimal play via exhaustive minimax search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Optimal tic-tac-toe moves via alpha-beta minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file (ignored if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are written row by row, e.g. `X.O/.X./..O`, or as a JSON
/// array of rows such as `[["X",null,"O"],[null,"X",null],[null,null,"O"]]`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    BestMove {
        /// Board to search
        board: String,
    },

    /// Print the side to move, status, value and best move of a board
    Analyze {
        /// Board to analyze
        board: String,
    },

    /// Play optimal moves for both sides until the game ends
    SelfPlay {
        /// Starting board
        #[arg(default_value = ".../.../...")]
        board: String,
    },
}
