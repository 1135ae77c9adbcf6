//! Candidate move generation with proximity filtering
//!
//! Only empty cells near existing stones are searched. The order is
//! row-major and stable, since the search breaks ties by it.

use crate::board::{Board, Pos, Stone};

/// Candidate moves for `board`, in row-major order.
///
/// - Empty board: the centre cell only.
/// - Otherwise every empty cell with a stone within Chebyshev distance
///   `radius`.
/// - If that leaves nothing (only possible for `radius == 0` or a full
///   board), every empty cell.
pub fn generate_moves(board: &Board, radius: usize) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let moves: Vec<Pos> = board
        .positions()
        .filter(|&pos| board.is_empty(pos) && has_neighbor(board, pos, radius))
        .collect();

    if !moves.is_empty() {
        return moves;
    }

    board.positions().filter(|&pos| board.is_empty(pos)).collect()
}

/// Any stone within the `radius` square around `pos`
#[inline]
pub fn has_neighbor(board: &Board, pos: Pos, radius: usize) -> bool {
    let radius = radius as i32;
    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    (row - radius..=row + radius).any(|r| {
        (col - radius..=col + radius)
            .any(|c| matches!(board.stone_at(r, c), Some(s) if s != Stone::Empty))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_yields_center_only() {
        let board = Board::new(15);
        assert_eq!(generate_moves(&board, 2), vec![Pos::new(7, 7)]);

        let board = Board::new(10);
        assert_eq!(generate_moves(&board, 2), vec![Pos::new(5, 5)]);
    }

    #[test]
    fn test_generate_moves_radius() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves = generate_moves(&board, 2);
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Pos::new(7, 7)));

        let moves = generate_moves(&board, 1);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_generate_moves_clipped_at_corner() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(0, 0), Stone::White);

        let moves = generate_moves(&board, 2);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.first(), Some(&Pos::new(0, 1)));
        assert_eq!(moves.last(), Some(&Pos::new(2, 2)));
    }

    #[test]
    fn test_generate_moves_row_major_order() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(3, 12), Stone::White);

        let moves = generate_moves(&board, 2);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_candidates_are_empty_and_near_stones() {
        let mut board = Board::new(15);
        let stones = [
            (Pos::new(7, 7), Stone::Black),
            (Pos::new(7, 8), Stone::White),
            (Pos::new(8, 6), Stone::Black),
            (Pos::new(12, 2), Stone::White),
        ];
        for (pos, stone) in stones {
            board.place_stone(pos, stone);
        }

        let moves = generate_moves(&board, 2);
        assert!(!moves.is_empty());
        for mov in moves {
            assert!(board.is_empty(mov));
            assert!(stones.iter().any(|(pos, _)| pos.distance(mov) <= 2));
        }
    }

    #[test]
    fn test_fallback_to_all_empty_cells() {
        // With radius 0 no empty cell can see a stone, so the generator
        // falls back to every empty cell
        let mut board = Board::new(5);
        board.place_stone(Pos::new(2, 2), Stone::Black);
        board.place_stone(Pos::new(0, 4), Stone::White);

        let moves = generate_moves(&board, 0);
        assert_eq!(moves.len(), 23);
        assert_eq!(moves[0], Pos::new(0, 0));
        assert!(!moves.contains(&Pos::new(2, 2)));
        assert!(!moves.contains(&Pos::new(0, 4)));
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let mut board = Board::new(5);
        for pos in board.positions().collect::<Vec<_>>() {
            board.place_stone(pos, Stone::Black);
        }
        assert!(generate_moves(&board, 2).is_empty());
    }

    #[test]
    fn test_has_neighbor() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(5, 5), Stone::Black);
        assert!(has_neighbor(&board, Pos::new(7, 7), 2));
        assert!(!has_neighbor(&board, Pos::new(8, 7), 2));
        assert!(has_neighbor(&board, Pos::new(5, 5), 0));
    }
}
