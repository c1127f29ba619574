//! Minimax with alpha-beta cutoffs. Children are still visited left to right,
//! so the chosen column always matches plain minimax.

use super::heuristic::Heuristic;
use super::search::{Context, SearchReport};
use super::successors::successors;
use crate::game::{Board, Player};

pub(crate) struct AlphaBeta<'a, H: ?Sized> {
    ctx: Context<'a, H>,
    nodes: u64,
}

impl<'a, H: Heuristic + ?Sized> AlphaBeta<'a, H> {
    pub fn new(max_player: Player, heuristic: &'a H) -> Self {
        AlphaBeta {
            ctx: Context::new(max_player, heuristic),
            nodes: 0,
        }
    }

    /// Value of `board` inside the (alpha, beta) window. Outside the window
    /// the result is only a bound.
    pub fn value(
        &mut self,
        player: Player,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;
        if depth == 0 || board.terminal() {
            return self.ctx.leaf(board);
        }

        let children = successors(player, board);
        if children.is_empty() {
            return self.ctx.leaf(board);
        }

        let next = player.other();
        if player == self.ctx.max_player {
            let mut v = f64::NEG_INFINITY;
            for (_, child) in &children {
                v = v.max(self.value(next, child, depth - 1, alpha, beta));
                alpha = alpha.max(v);
                if beta <= alpha {
                    break;
                }
            }
            v
        } else {
            let mut v = f64::INFINITY;
            for (_, child) in &children {
                v = v.min(self.value(next, child, depth - 1, alpha, beta));
                beta = beta.min(v);
                if beta <= alpha {
                    break;
                }
            }
            v
        }
    }
}

/// Search the root moves left to right, tightening alpha as better moves
/// are found.
pub fn search<H: Heuristic + ?Sized>(
    heuristic: &H,
    player: Player,
    board: &Board,
    depth_limit: usize,
) -> SearchReport {
    let mut ab = AlphaBeta::new(player, heuristic);
    let depth = depth_limit.saturating_sub(1);
    let mut report = SearchReport::empty();
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    for (col, child) in successors(player, board) {
        let value = ab.value(player.other(), &child, depth, alpha, beta);
        report.offer(col, value);
        alpha = alpha.max(report.value);
        if beta <= alpha {
            break;
        }
    }

    report.finish(&ab.ctx, board, ab.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristic::{evaluate, LineHeuristic};
    use crate::ai::minimax;

    fn position() -> Board {
        Board::from_rows(&[
            ".......", ".......", ".......", "...O...", "..XX...", ".OXO...",
        ])
        .unwrap()
    }

    #[test]
    fn depth_zero_is_static_value() {
        let h = LineHeuristic::default();
        let board = position();
        let mut ab = AlphaBeta::new(Player::Two, &h);
        let v = ab.value(Player::One, &board, 0, f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(v, evaluate(Player::Two, &board));
    }

    #[test]
    fn matches_minimax_and_visits_fewer_nodes() {
        let h = LineHeuristic::default();
        let board = position();
        for depth in 1..=4 {
            let full = minimax::search(&h, Player::One, &board, depth);
            let pruned = search(&h, Player::One, &board, depth);
            assert_eq!(pruned.column, full.column, "depth {depth}");
            assert_eq!(pruned.value, full.value, "depth {depth}");
            assert!(pruned.nodes <= full.nodes, "depth {depth}");
        }
        let full = minimax::search(&h, Player::One, &board, 4);
        let pruned = search(&h, Player::One, &board, 4);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn closed_window_cuts_off_after_first_child() {
        let h = LineHeuristic::default();
        let board = Board::standard();
        let mut ab = AlphaBeta::new(Player::One, &h);
        // beta <= alpha from the start: the max node stops after one child
        ab.value(Player::One, &board, 1, 10.0, 10.0);
        assert_eq!(ab.nodes, 2);
    }

    #[test]
    fn depth_zero_root_still_picks_a_column() {
        let h = LineHeuristic::default();
        let board = Board::standard();
        let shallow = search(&h, Player::Two, &board, 0);
        assert_eq!(shallow.column, Some(3));
        // Children are scored statically, exactly as with depth 1
        assert_eq!(shallow, search(&h, Player::Two, &board, 1));
    }
}
