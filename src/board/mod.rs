//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Symbol used by the text grid
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => '●',
            Stone::White => '○',
            Stone::Empty => '.',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance between two cells
    #[inline]
    pub fn distance(self, other: Pos) -> usize {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        usize::from(dr.max(dc))
    }

    /// Step `k` cells along `(dr, dc)`, returning signed coordinates
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32) -> (i32, i32) {
        (i32::from(self.row) + dr * k, i32::from(self.col) + dc * k)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
