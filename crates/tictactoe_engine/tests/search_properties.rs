//! Whole-game-tree properties of the search.

use std::collections::{HashMap, HashSet};
use tictactoe_engine::{
    Board, Player, Utility, actions, analyze, initial_state, minimax, player, result, self_play,
    terminal, utility,
};

/// Every board reachable from the initial state by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).expect("legal action"));
        }
    }

    boards
}

/// Plain minimax without pruning, memoized per board.
fn exhaustive_value(board: &Board, memo: &mut HashMap<Board, i32>) -> i32 {
    if let Some(value) = memo.get(board) {
        return *value;
    }
    let value = if terminal(board) {
        utility(board).score()
    } else {
        let scores = actions(board).into_iter().map(|action| {
            let child = result(board, action).expect("legal action");
            exhaustive_value(&child, memo)
        });
        match player(board) {
            Player::X => scores.max().expect("non-terminal board has moves"),
            Player::O => scores.min().expect("non-terminal board has moves"),
        }
    };
    memo.insert(*board, value);
    value
}

/// Node count of a full minimax tree without pruning.
fn unpruned_nodes(board: &Board) -> u64 {
    if terminal(board) {
        return 1;
    }
    1 + actions(board)
        .into_iter()
        .map(|action| unpruned_nodes(&result(board, action).expect("legal action")))
        .sum::<u64>()
}

#[test]
fn test_reachable_state_count() {
    // Distinct legal positions of tic-tac-toe, including the empty board.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_pruning_preserves_value_on_every_reachable_board() {
    let mut memo = HashMap::new();

    for board in reachable_boards() {
        let expected = exhaustive_value(&board, &mut memo);
        let report = analyze(&board);
        assert_eq!(
            report.value().score(),
            expected,
            "value mismatch on {}",
            board.to_compact()
        );

        match report.best_action() {
            None => assert!(terminal(&board)),
            Some(action) => {
                assert!(actions(&board).contains(&action));
                let child = result(&board, action).expect("chosen action is legal");
                assert_eq!(
                    exhaustive_value(&child, &mut memo),
                    expected,
                    "suboptimal action {} on {}",
                    action,
                    board.to_compact()
                );
            }
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let board = initial_state();
    let report = analyze(&board);
    assert!(report.nodes() < unpruned_nodes(&board));
}

#[test]
fn test_player_alternates_along_optimal_game() {
    let mut board = initial_state();
    let mut expected = Player::X;

    while let Some(action) = minimax(&board) {
        assert_eq!(player(&board), expected);
        board = result(&board, action).expect("engine plays legal moves");
        expected = expected.opponent();
    }

    assert_eq!(utility(&board), Utility::Draw);
}

#[test]
fn test_self_play_from_every_opening_is_a_draw() {
    let start = initial_state();
    for action in actions(&start) {
        let opened = result(&start, action).expect("legal opening");
        let plies = self_play(&opened);
        let last = plies.last().map_or(opened, |(_, board)| *board);
        assert!(terminal(&last));
        assert_eq!(utility(&last), Utility::Draw, "opening {}", action);
    }
}

#[test]
fn test_action_count_matches_empty_cells() {
    for board in reachable_boards() {
        let count = actions(&board).len();
        assert_eq!(count, 9 - board.occupied());
        assert_eq!(count == 0, board.is_full());
    }
}
