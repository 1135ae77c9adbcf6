//! Win condition checking
//!
//! A player wins with a run of at least `win_length` stones along a row,
//! a column or either diagonal. Overlines count.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// Check whether `stone` holds `win_length` in a row anywhere on the board.
///
/// Scans every window start in each of the four directions and requires
/// every cell of the window to hold `stone`. The whole board is scanned,
/// not just the neighbourhood of the last move.
pub fn has_winning_run(board: &Board, stone: Stone, win_length: usize) -> bool {
    if stone == Stone::Empty || win_length == 0 || board.stone_count() < win_length {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        board
            .positions()
            .any(|start| window_matches(board, start, dr, dc, stone, win_length))
    })
}

/// All `win_length` cells starting at `start` along `(dr, dc)` hold `stone`.
/// Windows running off the board never match.
fn window_matches(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone, win_length: usize) -> bool {
    (0..win_length as i32).all(|k| {
        let (r, c) = start.offset(dr, dc, k);
        board.stone_at(r, c) == Some(stone)
    })
}

/// Find the run through `pos` that reaches `win_length`, if any.
///
/// Walks both ways along each axis from the last placed stone. The
/// returned positions are ordered along the line.
pub fn winning_line_at(board: &Board, pos: Pos, stone: Stone, win_length: usize) -> Option<Vec<Pos>> {
    if stone == Stone::Empty || board.get(pos) != stone {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let mut line = Vec::with_capacity(win_length);
        line.extend(walk(board, pos, -dr, -dc, stone).into_iter().rev());
        line.push(pos);
        line.extend(walk(board, pos, dr, dc, stone));

        if line.len() >= win_length {
            return Some(line);
        }
    }
    None
}

/// Consecutive `stone` cells after `pos` along `(dr, dc)`, nearest first
fn walk(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> Vec<Pos> {
    let mut cells = Vec::new();
    let mut k = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, k);
        match board.pos_at(r, c) {
            Some(next) if board.get(next) == stone => cells.push(next),
            _ => return cells,
        }
        k += 1;
    }
}

/// Check for a winner.
///
/// Returns `Some(Stone)` if either color holds a winning run, `None`
/// otherwise. Black is checked first.
pub fn check_winner(board: &Board, win_length: usize) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_winning_run(board, stone, win_length))
}
