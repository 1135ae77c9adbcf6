//! Gomoku engine driven by depth-limited minimax
//!
//! Two players alternate placing stones on a square board; the first to
//! line up `win_length` stones in a row, column or diagonal wins. The
//! engine picks moves with minimax over proximity-filtered candidates and
//! a pattern heuristic, with alpha-beta pruning as a switch that never
//! changes the chosen move.
//!
//! # Architecture
//!
//! - [`board`]: Board representation and coordinates
//! - [`rules`]: Win detection
//! - [`eval`]: Pattern scoring and the static evaluator
//! - [`search`]: Candidate generation and minimax
//! - [`engine`]: Engine façade with timing and statistics
//! - [`game`]: Turn order, move validation and game end
//! - [`config`]: Search and front-end settings, loadable from TOML
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, SearchConfig, Stone};
//!
//! let mut board = Board::new(15);
//! let mut engine = AIEngine::new(SearchConfig::default().for_stone(Stone::White)).unwrap();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! if let Some(pos) = engine.get_move(&board) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::{AppConfig, SearchConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, MoveError};
pub use eval::Score;
pub use game::{Game, GameMode, GameOutcome};
pub use search::SearchType;
