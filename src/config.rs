//! Engine and front-end configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Stone, DEFAULT_BOARD_SIZE};
use crate::error::ConfigError;
use crate::eval::PatternWeights;

/// Smallest and largest supported board sizes
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 25;

/// Immutable search parameters, fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub board_size: usize,
    pub win_length: usize,
    /// Stone the engine plays for (scores are from its point of view)
    pub max_stone: Stone,
    pub min_stone: Stone,
    /// Plies searched, counting the root move
    pub max_depth: u8,
    /// Chebyshev radius around existing stones for candidate moves
    pub neighbor_radius: usize,
    /// Apply alpha-beta cutoffs; disabling them only changes the node count
    pub pruning: bool,
    pub weights: PatternWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: 5,
            max_stone: Stone::White,
            min_stone: Stone::Black,
            max_depth: 2,
            neighbor_radius: 2,
            pruning: true,
            weights: PatternWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Same parameters, searching on behalf of `stone`.
    #[must_use]
    pub fn for_stone(&self, stone: Stone) -> Self {
        Self {
            max_stone: stone,
            min_stone: stone.opponent(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "search.board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.win_length == 0 || self.win_length > self.board_size {
            return Err(ConfigError::Validation(format!(
                "search.win_length must be in 1..={}, got {}",
                self.board_size, self.win_length
            )));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Validation(
                "search.max_depth must be >= 1".into(),
            ));
        }
        if self.max_stone == Stone::Empty || self.min_stone == Stone::Empty {
            return Err(ConfigError::Validation(
                "search.max_stone and search.min_stone must be Black or White".into(),
            ));
        }
        if self.max_stone == self.min_stone {
            return Err(ConfigError::Validation(
                "search.max_stone and search.min_stone must differ".into(),
            ));
        }
        Ok(())
    }
}

/// Desktop front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub show_debug: bool,
    /// Pause between moves when the AI plays itself
    pub ai_vs_ai_delay_ms: u64,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            show_debug: true,
            ai_vs_ai_delay_ms: 300,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub gui: GuiConfig,
}

impl AppConfig {
    /// Environment variable overriding the config file location
    pub const PATH_ENV: &'static str = "GOMOKU_CONFIG";
    pub const DEFAULT_PATH: &'static str = "gomoku.toml";

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from `$GOMOKU_CONFIG`, or `gomoku.toml` in the working directory.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(Self::PATH_ENV)
            .map_or_else(|| Self::DEFAULT_PATH.into(), std::path::PathBuf::from);
        Self::load_or_default(&path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 15);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.neighbor_radius, 2);
        assert!(config.pruning);
    }

    #[test]
    fn test_for_stone_swaps_roles() {
        let config = SearchConfig::default().for_stone(Stone::Black);
        assert_eq!(config.max_stone, Stone::Black);
        assert_eq!(config.min_stone, Stone::White);
        assert_eq!(config.board_size, 15);
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = SearchConfig::default().with_depth(0);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_same_stones() {
        let config = SearchConfig {
            min_stone: Stone::White,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            max_stone: Stone::Empty,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let config = SearchConfig {
            board_size: 3,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            win_length: 16,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [search]
            max_depth = 3
            pruning = false

            [search.weights]
            open_three = 700
            "#,
        )
        .unwrap();

        assert_eq!(config.search.max_depth, 3);
        assert!(!config.search.pruning);
        assert_eq!(config.search.weights.open_three, 700);
        assert_eq!(config.search.weights.five, 100_000);
        assert_eq!(config.search.board_size, 15);
        assert!(config.gui.show_debug);
    }

    #[test]
    fn test_parse_stones_by_name() {
        let config = AppConfig::from_toml_str(
            r#"
            [search]
            max_stone = "Black"
            min_stone = "White"
            "#,
        )
        .unwrap();
        assert_eq!(config.search.max_stone, Stone::Black);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = AppConfig::from_toml_str("[search]\nmax_depth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = AppConfig::from_toml_str("[search]\nmax_depth = \"deep\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/gomoku.toml");
        let config = AppConfig::load_or_default(path).unwrap();
        assert_eq!(config, AppConfig::default());

        assert!(matches!(AppConfig::load(path), Err(ConfigError::FileRead { .. })));
    }
}
