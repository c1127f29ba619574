//! Game-tree search: successor generation, the line-pattern evaluator, and
//! the minimax, alpha-beta and expectimax procedures, plus agents wrapping
//! them.

mod agent;
pub mod alphabeta;
pub mod expectimax;
pub mod heuristic;
pub mod minimax;
mod random;
mod search;
mod successors;

pub use agent::{Agent, SearchAgent};
pub use heuristic::{evaluate, lines, Heuristic, LineHeuristic, DEFAULT_WEIGHTS};
pub use random::RandomAgent;
pub use search::{alphabeta, expectimax, minimax, Algorithm, SearchReport, UnknownAlgorithm};
pub use successors::successors;
