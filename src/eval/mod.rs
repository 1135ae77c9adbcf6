//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers:
//! - Decided positions (a winning run for either side)
//! - Line patterns (twos, threes, fours, fives) by open ends

pub mod heuristic;
pub mod patterns;
pub mod score;

pub use heuristic::Evaluator;
pub use patterns::{Pattern, PatternWeights};
pub use score::Score;
