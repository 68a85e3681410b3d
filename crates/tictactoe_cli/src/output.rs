//! Command results and their text rendering.
//!
//! Each command produces a serializable value; `--json` prints it with
//! serde, otherwise [`Render::text`] formats it for a terminal.

use serde::Serialize;
use tictactoe_engine::{
    Action, Board, GameStatus, Player, SearchReport, Utility, analyze, player, self_play, status,
    utility,
};

/// Plain-text rendering of a command result.
pub trait Render {
    /// Formats the result; `show_nodes` toggles search statistics.
    fn text(&self, show_nodes: bool) -> String;
}

fn describe(action: Option<Action>) -> String {
    match action {
        Some(action) => format!("{} {}", action, action.label()),
        None => "none".to_string(),
    }
}

/// Result of `best-move`.
#[derive(Debug, Clone, Serialize)]
pub struct BestMove {
    board: Board,
    to_move: Player,
    action: Option<Action>,
    nodes: u64,
}

impl BestMove {
    /// Searches `board` for the side to move.
    pub fn new(board: Board) -> Self {
        let report = analyze(&board);
        Self {
            board,
            to_move: report.to_move(),
            action: report.best_action(),
            nodes: report.nodes(),
        }
    }
}

impl Render for BestMove {
    fn text(&self, show_nodes: bool) -> String {
        let mut out = describe(self.action);
        if show_nodes && self.action.is_some() {
            out.push_str(&format!("\n{} to move, {} nodes searched", self.to_move, self.nodes));
        }
        out
    }
}

/// Result of `analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    board: Board,
    status: GameStatus,
    report: SearchReport,
}

impl Analysis {
    /// Analyzes `board`.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            status: status(&board),
            report: analyze(&board),
        }
    }
}

impl Render for Analysis {
    fn text(&self, show_nodes: bool) -> String {
        let mut lines = vec![
            self.board.display(),
            String::new(),
            format!("To move:   {}", self.report.to_move()),
            format!("Status:    {}", self.status),
            format!("Value:     {}", self.report.value()),
            format!("Best move: {}", describe(self.report.best_action())),
        ];
        if show_nodes {
            lines.push(format!("Nodes:     {}", self.report.nodes()));
        }
        lines.join("\n")
    }
}

/// One ply of a self-play game.
#[derive(Debug, Clone, Serialize)]
pub struct Ply {
    player: Player,
    action: Action,
    board: Board,
}

/// Result of `self-play`.
#[derive(Debug, Clone, Serialize)]
pub struct SelfPlay {
    start: Board,
    plies: Vec<Ply>,
    outcome: Utility,
}

impl SelfPlay {
    /// Plays `start` out with optimal moves for both sides.
    pub fn new(start: Board) -> Self {
        let mut mover = player(&start);
        let mut plies = Vec::new();
        for (action, board) in self_play(&start) {
            plies.push(Ply {
                player: mover,
                action,
                board,
            });
            mover = mover.opponent();
        }
        let last = plies.last().map_or(start, |ply| ply.board);
        Self {
            start,
            plies,
            outcome: utility(&last),
        }
    }
}

impl Render for SelfPlay {
    fn text(&self, _show_nodes: bool) -> String {
        let mut blocks = vec![self.start.display()];
        for (number, ply) in self.plies.iter().enumerate() {
            blocks.push(format!(
                "{}. {} plays {}\n{}",
                number + 1,
                ply.player,
                describe(Some(ply.action)),
                ply.board.display()
            ));
        }
        blocks.push(format!("Result: {}", self.outcome));
        blocks.join("\n\n")
    }
}
