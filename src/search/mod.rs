//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation restricted to the neighbourhood of stones
//! - Depth-limited minimax with optional alpha-beta cutoffs

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, SearchType, Searcher};
pub use movegen::generate_moves;
