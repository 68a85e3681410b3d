//! Exhaustive minimax search with alpha-beta pruning.
//!
//! X maximizes and O minimizes the [`Utility`] score. The tree is small
//! enough to search to the end from any position, so there is no depth
//! limit and no heuristic evaluation.

use crate::rules::{actions, player, terminal, utility};
use crate::transition::successor;
use crate::{Action, Board, Player, Utility};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Lower bound sentinel (-infinity).
const NEG_INF: i32 = i32::MIN;
/// Upper bound sentinel (+infinity).
const POS_INF: i32 = i32::MAX;

/// Outcome of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    to_move: Player,
    best_action: Option<Action>,
    value: Utility,
    nodes: u64,
}

impl SearchReport {
    /// Side to move in the searched position.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Chosen action, or `None` if the game is already over.
    pub fn best_action(&self) -> Option<Action> {
        self.best_action
    }

    /// Value of the position under optimal play by both sides.
    pub fn value(&self) -> Utility {
        self.value
    }

    /// Number of positions visited, including the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Returns the optimal action for the side to move, or `None` if the game
/// is over.
///
/// When several actions are equally good the first in row-major order is
/// returned; callers should only rely on its optimality.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Action> {
    analyze(board).best_action()
}

/// Returns the value of `board` under optimal play by both sides.
#[instrument(skip(board))]
pub fn minimax_value(board: &Board) -> Utility {
    analyze(board).value()
}

/// Searches `board` and reports the chosen action, its value and the
/// number of positions visited.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn analyze(board: &Board) -> SearchReport {
    let to_move = player(board);
    let mut nodes = 1;

    if terminal(board) {
        debug!("Position is terminal, nothing to search");
        return SearchReport {
            to_move,
            best_action: None,
            value: utility(board),
            nodes,
        };
    }

    let mut alpha = NEG_INF;
    let mut beta = POS_INF;
    let mut best: Option<(Action, i32)> = None;

    for action in actions(board) {
        let child = successor(board, action);
        let score = match to_move {
            Player::X => min_value(&child, alpha, beta, &mut nodes),
            Player::O => max_value(&child, alpha, beta, &mut nodes),
        };
        trace!(%action, score, "Root action evaluated");

        match to_move {
            Player::X => {
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((action, score));
                }
                alpha = alpha.max(score);
            }
            Player::O => {
                if best.is_none_or(|(_, best_score)| score < best_score) {
                    best = Some((action, score));
                }
                beta = beta.min(score);
            }
        }
    }

    // A non-terminal board always has at least one empty cell.
    let (best_action, value) = match best {
        Some((action, score)) => (Some(action), Utility::from_score(score)),
        None => (None, utility(board)),
    };

    debug!(?best_action, %value, nodes, "Search complete");
    SearchReport {
        to_move,
        best_action,
        value,
        nodes,
    }
}

/// Best score X can force from `state`, within the `(alpha, beta)` window.
fn max_value(state: &Board, mut alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if terminal(state) {
        return utility(state).score();
    }

    let mut best = NEG_INF;
    for action in actions(state) {
        best = best.max(min_value(&successor(state, action), alpha, beta, nodes));
        if best >= beta {
            return best;
        }
        alpha = alpha.max(best);
    }
    best
}

/// Best score O can force from `state`, within the `(alpha, beta)` window.
fn min_value(state: &Board, alpha: i32, mut beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if terminal(state) {
        return utility(state).score();
    }

    let mut best = POS_INF;
    for action in actions(state) {
        best = best.min(max_value(&successor(state, action), alpha, beta, nodes));
        if best <= alpha {
            return best;
        }
        beta = beta.min(best);
    }
    best
}

/// Plays optimal moves for both sides from `board` until the game ends.
///
/// Returns each action together with the board it produced.
#[instrument(skip(board))]
pub fn self_play(board: &Board) -> Vec<(Action, Board)> {
    let mut plies = Vec::new();
    let mut current = *board;

    while let Some(action) = minimax(&current) {
        current = successor(&current, action);
        debug!(%action, board = %current.to_compact(), "Ply played");
        plies.push((action, current));
    }

    plies
}
