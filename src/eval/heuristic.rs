//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a board from the maximizer's point of view:
//! - Decided positions map to the `Score` sentinels
//! - Otherwise the maximizer's pattern total minus the minimizer's
//!
//! # Per-cell accumulation
//!
//! Every stone scores the run that starts at it and extends forward, whether
//! or not it is the first stone of that run. A run of three with open ends
//! therefore scores an open three from its first stone and a closed two from
//! its second one (the cell before the second stone is occupied). Move
//! selection is tuned against this counting, so runs are not deduplicated.

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::rules::has_winning_run;

use super::patterns::PatternWeights;
use super::score::Score;

/// Forward directions scanned from each stone: E, S, SE, SW
const FORWARD: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Static evaluator bound to a maximizer/minimizer pair.
#[derive(Debug, Clone)]
pub struct Evaluator {
    max_stone: Stone,
    min_stone: Stone,
    win_length: usize,
    weights: PatternWeights,
}

impl Evaluator {
    pub fn new(max_stone: Stone, min_stone: Stone, win_length: usize, weights: PatternWeights) -> Self {
        Self {
            max_stone,
            min_stone,
            win_length,
            weights,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.max_stone, config.min_stone, config.win_length, config.weights)
    }

    #[inline]
    pub fn max_stone(&self) -> Stone {
        self.max_stone
    }

    #[inline]
    pub fn min_stone(&self) -> Stone {
        self.min_stone
    }

    /// The sentinel for a board where either side already has a winning run.
    ///
    /// The maximizer is checked first; the minimizer's scan is skipped when
    /// the maximizer has won.
    pub fn decisive(&self, board: &Board) -> Option<Score> {
        if has_winning_run(board, self.max_stone, self.win_length) {
            Some(Score::INFINITY)
        } else if has_winning_run(board, self.min_stone, self.win_length) {
            Some(Score::NEG_INFINITY)
        } else {
            None
        }
    }

    /// Evaluate the board for the maximizer.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> Score {
        if let Some(score) = self.decisive(board) {
            return score;
        }
        Score::Value(self.pattern_score(board, self.max_stone) - self.pattern_score(board, self.min_stone))
    }

    /// Sum of run contributions over every stone of `stone` and every
    /// forward direction.
    pub fn pattern_score(&self, board: &Board, stone: Stone) -> i64 {
        board
            .positions_of(stone)
            .map(|pos| {
                FORWARD
                    .iter()
                    .map(|&(dr, dc)| self.run_contribution(board, pos, dr, dc, stone))
                    .sum::<i64>()
            })
            .sum()
    }

    /// Score of the run starting exactly at `pos` and walking along `(dr, dc)`.
    ///
    /// `count` includes `pos`. The start is open when the cell behind `pos`
    /// is on the board and empty; the end is open when the cell after the
    /// last counted stone is on the board and empty.
    fn run_contribution(&self, board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> i64 {
        let along = |k: i32| {
            let (r, c) = pos.offset(dr, dc, k);
            board.stone_at(r, c)
        };

        let mut count = 1usize;
        while along(count as i32) == Some(stone) {
            count += 1;
        }

        let open_start = along(-1) == Some(Stone::Empty);
        let open_end = along(count as i32) == Some(Stone::Empty);

        self.weights.score_run(count, open_start, open_end)
    }
}
