use crate::game::{Board, Cell, Player, CONNECT};

/// Weights for lines holding 0, 1, 2, 3 and 4 discs of a single player.
/// A completed line outweighs every achievable sum of the lower buckets.
pub const DEFAULT_WEIGHTS: [f64; CONNECT + 1] = [0.0, 1.0, 4.0, 16.0, 1000.0];

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, player: Player, board: &Board) -> f64;
}

/// Scores every 4-cell line that only one player can still complete.
#[derive(Debug, Clone, PartialEq)]
pub struct LineHeuristic {
    pub weights: [f64; CONNECT + 1],
}

impl LineHeuristic {
    pub fn new(weights: [f64; CONNECT + 1]) -> Self {
        LineHeuristic { weights }
    }

    /// Per-bucket line counts for `player` and for the opponent.
    pub fn bucket_counts(player: Player, board: &Board) -> ([u32; CONNECT + 1], [u32; CONNECT + 1]) {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut own_buckets = [0; CONNECT + 1];
        let mut opp_buckets = [0; CONNECT + 1];

        for line in lines(board) {
            // Partial diagonals near the corners
            if line.contains(&None) {
                continue;
            }
            let own = line.iter().filter(|&&c| c == Some(own_cell)).count();
            let opp = line.iter().filter(|&&c| c == Some(opp_cell)).count();
            if opp == 0 {
                own_buckets[own] += 1;
            }
            if own == 0 {
                opp_buckets[opp] += 1;
            }
        }

        (own_buckets, opp_buckets)
    }

    fn weighted(&self, buckets: &[u32; CONNECT + 1]) -> f64 {
        buckets
            .iter()
            .zip(self.weights.iter())
            .map(|(&n, &w)| n as f64 * w)
            .sum()
    }
}

impl Default for LineHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHTS)
    }
}

impl Heuristic for LineHeuristic {
    fn evaluate(&self, player: Player, board: &Board) -> f64 {
        let (own, opp) = Self::bucket_counts(player, board);
        self.weighted(&own) - self.weighted(&opp)
    }
}

/// Evaluate `board` for `player` with the default weight table.
pub fn evaluate(player: Player, board: &Board) -> f64 {
    LineHeuristic::default().evaluate(player, board)
}

/// Every length-4 window along rows, columns and both diagonal families.
///
/// Diagonals come from shifting row `r` right by `r` slots (or left, for the
/// other family) with `None` padding, then reading the columns of the padded
/// grid. Windows that run into the padding are returned as well and hold at
/// least one `None`.
pub fn lines(board: &Board) -> Vec<Vec<Option<Cell>>> {
    let rows = board.rows();
    let cols = board.cols();
    let mut lines = Vec::new();

    // Horizontal
    for r in 0..rows {
        let row: Vec<Option<Cell>> = board.row(r).into_iter().map(Some).collect();
        lines.extend(row.windows(CONNECT).map(<[_]>::to_vec));
    }

    // Vertical
    for c in 0..cols {
        let col: Vec<Option<Cell>> = board.col(c).into_iter().map(Some).collect();
        lines.extend(col.windows(CONNECT).map(<[_]>::to_vec));
    }

    let shifted = |lead: usize, r: usize| -> Vec<Option<Cell>> {
        let mut padded = vec![None; lead];
        padded.extend(board.row(r).into_iter().map(Some));
        padded.resize(cols + rows - 1, None);
        padded
    };
    // Slash and backslash
    let left: Vec<_> = (0..rows).map(|r| shifted(r, r)).collect();
    let right: Vec<_> = (0..rows).map(|r| shifted(rows - 1 - r, r)).collect();

    for padded in [&left, &right] {
        for j in 0..cols + rows - 1 {
            let diagonal: Vec<Option<Cell>> = padded.iter().map(|row| row[j]).collect();
            lines.extend(diagonal.windows(CONNECT).map(<[_]>::to_vec));
        }
    }

    lines
}
