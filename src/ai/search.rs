use std::fmt;
use std::str::FromStr;

use super::heuristic::{Heuristic, LineHeuristic};
use crate::game::{Board, Player};

/// Read-only state shared by every node of one search.
pub(crate) struct Context<'a, H: ?Sized> {
    pub max_player: Player,
    pub heuristic: &'a H,
}

impl<'a, H: Heuristic + ?Sized> Context<'a, H> {
    pub fn new(max_player: Player, heuristic: &'a H) -> Self {
        Context {
            max_player,
            heuristic,
        }
    }

    /// Static value of `board`, always from the searching player's side.
    pub fn leaf(&self, board: &Board) -> f64 {
        self.heuristic.evaluate(self.max_player, board)
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    /// Chosen column, `None` when the root has no legal move.
    pub column: Option<usize>,
    /// Value of the chosen move, or the static value of the root without one.
    pub value: f64,
    /// Boards visited below the root.
    pub nodes: u64,
}

impl SearchReport {
    pub(crate) fn empty() -> Self {
        SearchReport {
            column: None,
            value: f64::NEG_INFINITY,
            nodes: 0,
        }
    }

    /// Fold one root child in. Only a strictly greater value replaces the
    /// current pick, so ties keep the leftmost column.
    pub(crate) fn offer(&mut self, column: usize, value: f64) {
        log::debug!("root column {column}: {value}");
        if value > self.value {
            self.value = value;
            self.column = Some(column);
        }
    }

    pub(crate) fn finish<H: Heuristic + ?Sized>(
        mut self,
        ctx: &Context<'_, H>,
        board: &Board,
        nodes: u64,
    ) -> Self {
        if self.column.is_none() {
            self.value = ctx.leaf(board);
        }
        self.nodes = nodes;
        log::trace!(
            "selected {:?} (value {}, {} nodes)",
            self.column,
            self.value,
            self.nodes
        );
        self
    }
}

/// The three interchangeable search procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Expectimax];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-beta pruning",
            Algorithm::Expectimax => "Expectimax",
        }
    }

    /// Next algorithm in display order, wrapping around.
    pub fn next(self) -> Algorithm {
        match self {
            Algorithm::Minimax => Algorithm::AlphaBeta,
            Algorithm::AlphaBeta => Algorithm::Expectimax,
            Algorithm::Expectimax => Algorithm::Minimax,
        }
    }

    /// Run this procedure for `player` on `board`.
    pub fn search<H: Heuristic + ?Sized>(
        self,
        heuristic: &H,
        player: Player,
        board: &Board,
        depth_limit: usize,
    ) -> SearchReport {
        match self {
            Algorithm::Minimax => super::minimax::search(heuristic, player, board, depth_limit),
            Algorithm::AlphaBeta => super::alphabeta::search(heuristic, player, board, depth_limit),
            Algorithm::Expectimax => super::expectimax::search(heuristic, player, board, depth_limit),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected 'minimax', 'alphabeta', or 'expectimax')")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Algorithm::AlphaBeta),
            "expectimax" => Ok(Algorithm::Expectimax),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Column chosen by depth-limited minimax with the default heuristic.
pub fn minimax(player: Player, board: &Board, depth_limit: usize) -> Option<usize> {
    Algorithm::Minimax
        .search(&LineHeuristic::default(), player, board, depth_limit)
        .column
}

/// Column chosen by alpha-beta search with the default heuristic.
pub fn alphabeta(player: Player, board: &Board, depth_limit: usize) -> Option<usize> {
    Algorithm::AlphaBeta
        .search(&LineHeuristic::default(), player, board, depth_limit)
        .column
}

/// Column chosen by expectimax against a uniformly random opponent.
pub fn expectimax(player: Player, board: &Board, depth_limit: usize) -> Option<usize> {
    Algorithm::Expectimax
        .search(&LineHeuristic::default(), player, board, depth_limit)
        .column
}
