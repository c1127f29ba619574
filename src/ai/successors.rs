use crate::game::{Board, Player};

/// Boards reachable by one disc from `player`, as `(column, board)` pairs in
/// increasing column order. Empty when no column is placeable.
pub fn successors(player: Player, board: &Board) -> Vec<(usize, Board)> {
    (0..board.cols())
        .filter(|&col| board.placeable(col))
        .filter_map(|col| {
            let mut next = board.clone();
            next.place(player, col).ok().map(|_| (col, next))
        })
        .collect()
}
