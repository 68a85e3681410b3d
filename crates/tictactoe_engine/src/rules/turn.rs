//! Turn order and legal moves.

use crate::{Action, Board, Player};
use tracing::instrument;

/// Returns the starting board: all nine cells empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// X moves first, so X is to move whenever the mark counts are equal.
/// O is to move when X has strictly more marks.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty cell as an action, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(action.row, action.col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&initial_state()), Player::X);
    }

    #[test]
    fn test_turns_alternate() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(player(&board), Player::O);

        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_actions_on_empty_board() {
        let actions = actions(&initial_state());
        assert_eq!(actions, Action::ALL.to_vec());
    }

    #[test]
    fn test_actions_skip_occupied() {
        let board: Board = "X../.O./...".parse().unwrap();
        let actions = actions(&board);
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Action::new(0, 0)));
        assert!(!actions.contains(&Action::new(1, 1)));
        assert!(actions.contains(&Action::new(2, 2)));
    }

    #[test]
    fn test_full_board_has_no_actions() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(actions(&board).is_empty());
    }
}
