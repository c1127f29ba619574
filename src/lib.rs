//! # Connect Four Search
//!
//! Depth-limited adversarial search for Connect Four: plain minimax,
//! minimax with alpha-beta pruning, and expectimax against a uniformly
//! random opponent, all driven by a line-pattern static evaluator.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and game state machine
//! - [`ai`] — Successor generation, evaluator, the three searches, agents
//! - [`arena`] — Headless games and match statistics
//! - [`ui`] — Terminal UI for playing against the search
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
