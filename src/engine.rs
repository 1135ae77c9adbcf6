//! Main AI engine wrapping the minimax searcher
//!
//! The engine owns a validated [`SearchConfig`] and answers one question:
//! which cell should the maximizing stone play on this board. The caller's
//! board is never modified; the search runs on a private copy.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, SearchConfig, Stone};
//!
//! let config = SearchConfig::default().for_stone(Stone::White);
//! let mut engine = AIEngine::new(config).unwrap();
//!
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::eval::Score;
use crate::search::{SearchResult, SearchType, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the move, from the engine's point of view
    pub score: Score,
    /// How the move was chosen
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: result.search_type,
            time_ms,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, SearchConfig};
///
/// let mut engine = AIEngine::new(SearchConfig::default()).unwrap();
/// let board = Board::new(15);
/// assert_eq!(engine.get_move(&board), Some(board.center()));
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine, rejecting invalid configurations.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(config),
        })
    }

    /// Engine playing `stone` with otherwise default settings
    pub fn for_stone(stone: Stone) -> Result<Self, ConfigError> {
        Self::new(SearchConfig::default().for_stone(stone))
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Stone this engine plays
    #[inline]
    pub fn stone(&self) -> Stone {
        self.config().max_stone
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` only when no empty cell is left.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        debug_assert_eq!(board.size(), self.config().board_size);
        let start = Instant::now();

        let mut work_board = board.clone();
        let result = self.searcher.select_move(&mut work_board);
        let time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::debug!(
            stone = self.stone().name(),
            best_move = ?result.best_move,
            score = %result.score,
            search_type = ?result.search_type,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "engine move"
        );

        MoveResult::from_search(result, time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = SearchConfig::default().with_depth(0);
        assert!(AIEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_empty_board() {
        let board = Board::new(15);
        let mut engine = AIEngine::new(SearchConfig::default().with_depth(2)).unwrap();
        let result = engine.get_move_with_stats(&board);

        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(15);
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        board.place_stone(Pos::new(10, 6), Stone::White);

        let mut engine = AIEngine::for_stone(Stone::Black).unwrap();
        let result = engine.get_move_with_stats(&board);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.score, Score::INFINITY);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new(15);
        // White has 4 in a row against the edge
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::White);
        }
        board.place_stone(Pos::new(10, 5), Stone::Black);

        let mut engine = AIEngine::for_stone(Stone::Black).unwrap();
        assert_eq!(engine.get_move(&board), Some(Pos::new(9, 4)));
    }

    #[test]
    fn test_engine_leaves_board_untouched() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        let before = board.clone();

        let mut engine = AIEngine::for_stone(Stone::Black).unwrap();
        let _ = engine.get_move(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_multiple_searches_agree() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let mut engine = AIEngine::for_stone(Stone::White).unwrap();
        let first = engine.get_move_with_stats(&board);
        let second = engine.get_move_with_stats(&board);

        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);

        let mov = first.best_move.unwrap();
        assert!(mov.distance(Pos::new(7, 7)) <= 2);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let mut white = AIEngine::for_stone(Stone::White).unwrap();
        let reply = white.get_move(&board).unwrap();
        board.place_stone(reply, Stone::White);

        let mut black = AIEngine::for_stone(Stone::Black).unwrap();
        let next = black.get_move(&board).unwrap();
        assert!(board.is_empty(next));
        assert_ne!(next, reply);
    }

    #[test]
    fn test_stone_accessor() {
        let engine = AIEngine::for_stone(Stone::Black).unwrap();
        assert_eq!(engine.stone(), Stone::Black);
        assert_eq!(engine.config().min_stone, Stone::White);
    }
}
