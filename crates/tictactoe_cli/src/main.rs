//! Tic-tac-toe - command-line driver
//!
//! Reads a board, runs the minimax engine and prints the result.

#![warn(missing_docs)]

mod cli;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::CliConfig;
use output::{Analysis, BestMove, Render, SelfPlay};
use tictactoe_engine::Board;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)?;

    initialize_tracing(config.log_filter());
    debug!(?config, "Configuration loaded");

    let json = cli.json || *config.json();
    let out = run(&cli.command, json, *config.show_nodes())?;
    println!("{}", out);

    Ok(())
}

/// Runs one command and returns what should be printed.
#[instrument]
fn run(command: &Command, json: bool, show_nodes: bool) -> Result<String> {
    match command {
        Command::BestMove { board } => {
            let board = parse_board(board)?;
            emit(&BestMove::new(board), json, show_nodes)
        }
        Command::Analyze { board } => {
            let board = parse_board(board)?;
            emit(&Analysis::new(board), json, show_nodes)
        }
        Command::SelfPlay { board } => {
            let board = parse_board(board)?;
            info!(start = %board.to_compact(), "Starting self-play");
            emit(&SelfPlay::new(board), json, show_nodes)
        }
    }
}

/// Parses a board given as row text or as a JSON array of rows.
#[instrument]
fn parse_board(raw: &str) -> Result<Board> {
    let board = if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Board>(raw)
            .with_context(|| format!("Failed to read JSON board {:?}", raw))?
    } else {
        raw.parse::<Board>()
            .with_context(|| format!("Failed to read board {:?}", raw))?
    };
    debug!(board = %board.to_compact(), "Board parsed");
    Ok(board)
}

fn emit<T: Render + serde::Serialize>(value: &T, json: bool, show_nodes: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(value.text(show_nodes))
    }
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
