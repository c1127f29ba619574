//! Terminal UI: play Connect Four against one of the search algorithms.

mod app;
mod game_view;

pub use app::App;
