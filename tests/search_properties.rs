use connect_four_search::ai::{
    alphabeta, evaluate, expectimax, minimax, successors, Algorithm, Heuristic, LineHeuristic,
};
use connect_four_search::game::{Board, Cell, GameState, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Non-terminal positions reached by random play, with the player to move.
fn random_positions(seed: u64, count: usize) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();
    while positions.len() < count {
        let mut state = GameState::initial();
        let plies = rng.random_range(0..20);
        for _ in 0..plies {
            let legal = state.legal_actions();
            if legal.is_empty() {
                break;
            }
            let col = legal[rng.random_range(0..legal.len())];
            state.apply_move_mut(col).unwrap();
        }
        if !state.is_terminal() {
            positions.push((state.board().clone(), state.current_player()));
        }
    }
    positions
}

fn completing_position() -> Board {
    // Player 1 needs column 4 on the bottom row; O discs cap both ends so the
    // line cannot grow past four
    Board::from_rows(&[
        ".......", ".......", ".......", ".......", ".O.....", "OXXX.O.",
    ])
    .unwrap()
}

#[test]
fn evaluation_is_zero_sum() {
    for (board, _) in random_positions(1, 50) {
        assert_eq!(
            evaluate(Player::One, &board),
            -evaluate(Player::Two, &board),
            "\n{board}"
        );
    }
}

#[test]
fn alphabeta_agrees_with_minimax() {
    let h = LineHeuristic::default();
    for (board, player) in random_positions(2, 12) {
        for depth in 1..=3 {
            let full = Algorithm::Minimax.search(&h, player, &board, depth);
            let pruned = Algorithm::AlphaBeta.search(&h, player, &board, depth);
            assert_eq!(full.column, pruned.column, "depth {depth}\n{board}");
            assert_eq!(full.value, pruned.value, "depth {depth}\n{board}");
            assert!(pruned.nodes <= full.nodes);
            assert_eq!(
                minimax(player, &board, depth),
                alphabeta(player, &board, depth)
            );
        }
    }
}

#[test]
fn successors_are_complete_and_ordered() {
    for (board, player) in random_positions(3, 30) {
        let placeable: Vec<usize> = (0..board.cols()).filter(|&c| board.placeable(c)).collect();
        let children = successors(player, &board);
        let cols: Vec<usize> = children.iter().map(|(c, _)| *c).collect();
        assert_eq!(cols, placeable);

        for (col, child) in &children {
            assert_eq!(child.disc_count(), board.disc_count() + 1);
            for c in 0..board.cols() {
                if c == *col {
                    let added = board
                        .col(c)
                        .iter()
                        .zip(child.col(c))
                        .filter(|(before, after)| **before != *after)
                        .count();
                    assert_eq!(added, 1);
                    assert!(child.col(c).contains(&player.to_cell()));
                } else {
                    assert_eq!(child.col(c), board.col(c));
                }
            }
        }
    }
}

#[test]
fn searching_never_mutates_the_board() {
    for (board, player) in random_positions(4, 5) {
        let rows: Vec<Vec<Cell>> = (0..board.rows()).map(|r| board.row(r)).collect();
        let cols: Vec<Vec<Cell>> = (0..board.cols()).map(|c| board.col(c)).collect();

        successors(player, &board);
        for algorithm in Algorithm::ALL {
            algorithm.search(&LineHeuristic::default(), player, &board, 2);
        }

        assert_eq!(rows, (0..board.rows()).map(|r| board.row(r)).collect::<Vec<_>>());
        assert_eq!(cols, (0..board.cols()).map(|c| board.col(c)).collect::<Vec<_>>());
    }
}

#[test]
fn empty_board_opens_in_the_center() {
    let board = Board::standard();
    let scores: Vec<f64> = successors(Player::One, &board)
        .iter()
        .map(|(_, b)| evaluate(Player::One, b))
        .collect();
    assert!(scores[3] >= scores[0]);
    assert!(scores[3] >= scores[6]);

    assert_eq!(minimax(Player::One, &board, 1), Some(3));
    assert_eq!(alphabeta(Player::One, &board, 1), Some(3));
    assert_eq!(expectimax(Player::One, &board, 1), Some(3));
}

#[test]
fn all_searches_complete_four_in_a_row() {
    let board = completing_position();
    for depth in 1..=4 {
        assert_eq!(minimax(Player::One, &board, depth), Some(4), "depth {depth}");
        assert_eq!(alphabeta(Player::One, &board, depth), Some(4), "depth {depth}");
        assert_eq!(expectimax(Player::One, &board, depth), Some(4), "depth {depth}");
    }
}

#[test]
fn expectimax_may_delay_a_win_that_grows_into_five() {
    // Winning at column 3 now scores one four-window; playing column 4 first
    // and completing later against a random reply scores two
    let board = Board::from_rows(&[
        ".......", ".......", ".......", ".......", "OO.....", "XXX...O",
    ])
    .unwrap();
    assert_eq!(minimax(Player::One, &board, 3), Some(3));
    assert_eq!(alphabeta(Player::One, &board, 3), Some(3));
    assert_eq!(expectimax(Player::One, &board, 3), Some(4));
}

#[test]
fn expectimax_equals_minimax_with_single_replies() {
    // Only the last column is open, so every node has one child
    let board = Board::from_rows(&[
        "XXOOXX.", "OOXXOO.", "XXOOXX.", "OOXXOOX", "XXOOXXO", "OOXXOOX",
    ])
    .unwrap();
    let h = LineHeuristic::default();
    for depth in 1..=3 {
        let e = Algorithm::Expectimax.search(&h, Player::Two, &board, depth);
        let m = Algorithm::Minimax.search(&h, Player::Two, &board, depth);
        assert_eq!(e.column, Some(6));
        assert_eq!(e.column, m.column);
        assert_eq!(e.value, m.value);
    }
}

#[test]
fn no_legal_move_yields_none() {
    let board = Board::from_rows(&["XO", "OX"]).unwrap();
    for algorithm in Algorithm::ALL {
        let report = algorithm.search(&LineHeuristic::default(), Player::One, &board, 2);
        assert_eq!(report.column, None);
        assert_eq!(report.value, evaluate(Player::One, &board));
    }
}

#[test]
fn custom_heuristics_plug_in() {
    struct PreferColumn(usize);

    impl Heuristic for PreferColumn {
        fn evaluate(&self, player: Player, board: &Board) -> f64 {
            let own = board.col(self.0).iter().filter(|c| **c == player.to_cell()).count();
            own as f64
        }
    }

    let h: &dyn Heuristic = &PreferColumn(5);
    for algorithm in Algorithm::ALL {
        let report = algorithm.search(h, Player::One, &Board::standard(), 1);
        assert_eq!(report.column, Some(5), "{algorithm}");
    }
}
