use std::path::PathBuf;

use crate::game::Player;

/// Errors raised when a disc cannot be dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("game is over")]
    GameOver,
}

/// Errors raised when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph '{glyph}' at row {row}, column {col}")]
    UnknownGlyph { row: usize, col: usize, glyph: char },

    #[error("disc at row {row}, column {col} is not supported")]
    FloatingDisc { row: usize, col: usize },
}

/// Errors that can occur while playing arena games.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("{agent} found no move for {player:?} although columns remain")]
    NoMove { agent: String, player: Player },

    #[error("{agent} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
