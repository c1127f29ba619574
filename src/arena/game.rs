use serde::Serialize;

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Moves and result of one finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play one game on `board`. `first` moves as [`Player::One`].
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    board: Board,
) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::new(board, Player::One);
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        let legal = state.legal_actions();
        let column = agent.select_action(&state).ok_or_else(|| ArenaError::NoMove {
            agent: agent.name().to_string(),
            player,
        })?;
        if !legal.contains(&column) {
            return Err(ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                legal,
            });
        }

        state.apply_move_mut(column)?;
        moves.push(column);
    }

    let outcome = state.outcome().unwrap_or(GameOutcome::Draw);
    log::info!("game over after {} moves: {:?}", moves.len(), outcome);

    Ok(GameRecord { moves, outcome })
}
