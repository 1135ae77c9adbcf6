use std::path::PathBuf;

use crate::board::Pos;

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

/// Reasons a requested move is rejected by the game manager.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.max_depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.max_depth must be >= 1"
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfBounds { row: 15, col: -1, size: 15 };
        assert_eq!(err.to_string(), "(15, -1) is outside the 15x15 board");

        let err = MoveError::Occupied(Pos::new(7, 7));
        assert_eq!(err.to_string(), "cell (7, 7) is already occupied");
    }
}
