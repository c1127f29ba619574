use serde::Serialize;

use crate::game::Player;

use super::game::GameRecord;

/// Which of the two competing agents a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    A,
    B,
}

/// Aggregate results of a match between agent A and agent B.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchStats {
    pub agent_a: String,
    pub agent_b: String,
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchStats {
    pub fn new(agent_a: &str, agent_b: &str) -> Self {
        MatchStats {
            agent_a: agent_a.to_string(),
            agent_b: agent_b.to_string(),
            ..Default::default()
        }
    }

    /// Record a game in which `first` held [`Player::One`].
    pub fn record(&mut self, record: &GameRecord, first: Seat) {
        self.games += 1;
        self.total_moves += record.moves.len();
        let winner = record.winner().map(|p| match (p, first) {
            (Player::One, seat) => seat,
            (Player::Two, Seat::A) => Seat::B,
            (Player::Two, Seat::B) => Seat::A,
        });
        match winner {
            Some(Seat::A) => self.a_wins += 1,
            Some(Seat::B) => self.b_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Fraction of games won by agent A.
    pub fn a_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.a_wins as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}
