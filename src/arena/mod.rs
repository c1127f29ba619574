//! Headless games between agents, and match statistics.

mod game;
mod stats;

pub use game::{play_game, GameRecord};
pub use stats::{MatchStats, Seat};

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::Board;

/// Play `games` games between `a` and `b` on copies of `board`, alternating
/// which agent moves first. Agent A opens the first game.
pub fn run_match(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    games: usize,
    board: &Board,
) -> Result<MatchStats, ArenaError> {
    let mut stats = MatchStats::new(a.name(), b.name());

    for i in 0..games {
        let (record, first) = if i % 2 == 0 {
            (play_game(a, b, board.clone())?, Seat::A)
        } else {
            (play_game(b, a, board.clone())?, Seat::B)
        };
        stats.record(&record, first);
        log::info!(
            "game {}/{}: {} wins {} | {} wins {} | draws {}",
            i + 1,
            games,
            stats.agent_a,
            stats.a_wins,
            stats.agent_b,
            stats.b_wins,
            stats.draws
        );
    }

    Ok(stats)
}
