//! Game rules for free-style Gomoku
//!
//! Only the win condition is modelled: no captures, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, has_winning_run, winning_line_at, DIRECTIONS};
