//! Board structure with scoped move application

use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};

/// Square game board.
///
/// Cells are stored row-major. The board keeps a running stone count so
/// that emptiness and fullness checks do not rescan the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    stones: usize,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0 && size <= usize::from(u8::MAX));
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {0}x{0} board", self.size);
        usize::from(pos.row) * self.size + usize::from(pos.col)
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        usize::from(pos.row) < self.size && usize::from(pos.col) < self.size
    }

    /// Convert signed coordinates to a position, `None` when off the board
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        let size = self.size as i32;
        if row >= 0 && row < size && col >= 0 && col < size {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos_at(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone, replacing whatever occupied the cell
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        let previous = std::mem::replace(&mut self.cells[idx], stone);
        match (previous == Stone::Empty, stone == Stone::Empty) {
            (true, false) => self.stones += 1,
            (false, true) => self.stones -= 1,
            _ => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Place `stone` at `pos`, run `f`, then restore the cell to empty.
    ///
    /// This is the only way the search touches the board, so every
    /// speculative placement is undone before the caller sees the board
    /// again.
    #[inline]
    pub fn with_stone<R>(&mut self, pos: Pos, stone: Stone, f: impl FnOnce(&mut Board) -> R) -> R {
        debug_assert!(self.is_empty(pos));
        self.place_stone(pos, stone);
        let result = f(self);
        self.remove_stone(pos);
        result
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Center cell `(N/2, N/2)`
    #[inline]
    pub fn center(&self) -> Pos {
        #[allow(clippy::cast_possible_truncation)]
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        #[allow(clippy::cast_possible_truncation)]
        (0..size * size).map(move |idx| Pos::new((idx / size) as u8, (idx % size) as u8))
    }

    /// Positions holding `stone`, row-major
    pub fn positions_of(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.get(pos) == stone)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:2}")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row:2} ")?;
            for col in 0..self.size {
                #[allow(clippy::cast_possible_truncation)]
                let stone = self.get(Pos::new(row as u8, col as u8));
                write!(f, " {}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
