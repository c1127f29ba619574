use std::path::Path;

use crate::ai::{Algorithm, LineHeuristic, DEFAULT_WEIGHTS};
use crate::error::ConfigError;
use crate::game::{Board, COLS, CONNECT, ROWS};

/// Search settings shared by the terminal app and the arena.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub depth: usize,
    /// Line weights for 0..=4 discs of one player.
    pub weights: [f64; CONNECT + 1],
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::AlphaBeta,
            depth: 4,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl SearchConfig {
    pub fn heuristic(&self) -> LineHeuristic {
        LineHeuristic::new(self.weights)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl BoardConfig {
    pub fn empty_board(&self) -> Board {
        Board::new(self.rows, self.cols)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Seed for the random opponent; drawn from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub board: BoardConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation(
                "search.depth must be >= 1".into(),
            ));
        }
        if self.search.weights.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::Validation(
                "search.weights must be finite".into(),
            ));
        }
        if self.board.rows == 0 {
            return Err(ConfigError::Validation(
                "board.rows must be >= 1".into(),
            ));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation(
                "board.cols must be >= 1".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be >= 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
