use crate::game::GameState;

use super::heuristic::LineHeuristic;
use super::search::Algorithm;

/// Anything that can choose a column for the player to move.
pub trait Agent {
    /// Select a column for the current player, or `None` when there is no
    /// legal move.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by one of the depth-limited search procedures.
pub struct SearchAgent {
    algorithm: Algorithm,
    depth: usize,
    heuristic: LineHeuristic,
    name: String,
}

impl SearchAgent {
    pub fn new(algorithm: Algorithm, depth: usize) -> Self {
        Self::with_heuristic(algorithm, depth, LineHeuristic::default())
    }

    pub fn with_heuristic(algorithm: Algorithm, depth: usize, heuristic: LineHeuristic) -> Self {
        SearchAgent {
            algorithm,
            depth,
            heuristic,
            name: format!("{} (depth {})", algorithm.name(), depth),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let report = self.algorithm.search(
            &self.heuristic,
            state.current_player(),
            state.board(),
            self.depth,
        );
        log::debug!(
            "{} chose {:?} for {} (value {}, {} nodes)",
            self.name,
            report.column,
            state.current_player().name(),
            report.value,
            report.nodes
        );
        report.column
    }

    fn name(&self) -> &str {
        &self.name
    }
}
