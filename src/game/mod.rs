//! Connect Four rules: a rectangular board with gravity, the two players, and
//! a game state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
