use crate::ai::{Algorithm, Heuristic, LineHeuristic};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

const MAX_DEPTH: usize = 8;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    algorithm: Algorithm,
    depth: usize,
    heuristic: LineHeuristic,
    human: Player,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game_state = GameState::new(config.board.empty_board(), Player::One);
        App {
            selected_column: game_state.board().cols() / 2,
            game_state,
            should_quit: false,
            message: None,
            algorithm: config.search.algorithm,
            depth: config.search.depth,
            heuristic: config.search.heuristic(),
            human: Player::One,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.board().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('a') => {
                self.algorithm = self.algorithm.next();
                self.message = Some(format!("Opponent: {}", self.algorithm.name()));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.depth = (self.depth + 1).min(MAX_DEPTH);
                self.message = Some(format!("Search depth: {}", self.depth));
            }
            KeyCode::Char('-') => {
                self.depth = self.depth.saturating_sub(1).max(1);
                self.message = Some(format!("Search depth: {}", self.depth));
            }
            KeyCode::Char('s') => {
                // Swap sides and restart
                self.human = self.human.other();
                self.restart();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::new(self.config.board.empty_board(), Player::One);
        self.selected_column = self.game_state.board().cols() / 2;
        self.message = Some(format!("New game started! You are {}.", self.human.name()));
        if self.human != Player::One {
            self.ai_move();
        }
    }

    /// Drop the human's disc in the selected column, then let the AI reply
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                if !self.announce_outcome() {
                    self.ai_move();
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn ai_move(&mut self) {
        let player = self.game_state.current_player();
        let report = self.algorithm.search(
            &self.heuristic,
            player,
            self.game_state.board(),
            self.depth,
        );
        let Some(column) = report.column else {
            self.message = Some("AI has no move.".to_string());
            return;
        };

        log::debug!(
            "{} plays column {} (value {}, {} nodes)",
            self.algorithm.name(),
            column,
            report.value,
            report.nodes
        );
        if let Err(err) = self.game_state.apply_move_mut(column) {
            self.message = Some(format!("AI move rejected: {err}"));
            return;
        }
        if !self.announce_outcome() {
            let score = self.heuristic.evaluate(self.human, self.game_state.board());
            self.message = Some(format!("AI played column {} (your score: {score})", column + 1));
        }
    }

    /// Set the end-of-game message. Returns true if the game is over.
    fn announce_outcome(&mut self) -> bool {
        match self.game_state.outcome() {
            Some(GameOutcome::Winner(player)) if player == self.human => {
                self.message = Some("You win!".to_string());
                true
            }
            Some(GameOutcome::Winner(player)) => {
                self.message = Some(format!("{} ({}) wins!", player.name(), self.algorithm.name()));
                true
            }
            Some(GameOutcome::Draw) => {
                self.message = Some("It's a draw!".to_string());
                true
            }
            None => false,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = format!("{} | depth {}", self.algorithm.name(), self.depth);
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &mode,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
