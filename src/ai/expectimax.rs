//! Expectimax: the opponent is modelled as picking uniformly among its legal
//! columns instead of playing adversarially.

use super::heuristic::Heuristic;
use super::search::{Context, SearchReport};
use super::successors::successors;
use crate::game::{Board, Player};

pub(crate) struct Expectimax<'a, H: ?Sized> {
    ctx: Context<'a, H>,
    nodes: u64,
}

impl<'a, H: Heuristic + ?Sized> Expectimax<'a, H> {
    pub fn new(max_player: Player, heuristic: &'a H) -> Self {
        Expectimax {
            ctx: Context::new(max_player, heuristic),
            nodes: 0,
        }
    }

    /// Max over children on our turn, the mean over children on theirs.
    pub fn value(&mut self, player: Player, board: &Board, depth: usize) -> f64 {
        self.nodes += 1;
        if depth == 0 || board.terminal() {
            return self.ctx.leaf(board);
        }

        let children = successors(player, board);
        if children.is_empty() {
            return self.ctx.leaf(board);
        }

        let maximizing = player == self.ctx.max_player;
        let next = player.other();
        let probability = 1.0 / children.len() as f64;
        let values = children
            .iter()
            .map(|(_, child)| self.value(next, child, depth - 1));

        if maximizing {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.map(|v| probability * v).sum()
        }
    }
}

/// Pick the root move with the highest expected value.
pub fn search<H: Heuristic + ?Sized>(
    heuristic: &H,
    player: Player,
    board: &Board,
    depth_limit: usize,
) -> SearchReport {
    let mut expectimax = Expectimax::new(player, heuristic);
    let depth = depth_limit.saturating_sub(1);
    let mut report = SearchReport::empty();

    for (col, child) in successors(player, board) {
        let value = expectimax.value(player.other(), &child, depth);
        report.offer(col, value);
    }

    report.finish(&expectimax.ctx, board, expectimax.nodes)
}
