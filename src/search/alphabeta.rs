//! Depth-limited minimax with alpha-beta pruning
//!
//! The searcher plays for the configured maximizing stone. Each ply places a
//! candidate stone through [`Board::with_stone`], recurses and restores the
//! cell before the next candidate, so the board is unchanged when a search
//! returns.
//!
//! Pruning is a configuration switch. With cutoffs disabled the same
//! routine visits the full tree; both settings pick the same move with the
//! same score because the root only replaces its best move on a strictly
//! better score.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::config::SearchConfig;
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new(SearchConfig::default());
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = searcher.select_move(&mut board);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Pos};
use crate::config::SearchConfig;
use crate::eval::{Evaluator, Score};

use super::movegen::generate_moves;

/// How the root move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board: centre cell, no search
    Opening,
    /// Only one candidate: played without search
    SingleCandidate,
    /// Regular minimax result
    Minimax,
    /// Every candidate loses within the horizon; best static reply kept
    ForcedLoss,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered by `minimax` (root children included)
    pub nodes: u64,
    /// Static evaluations at leaves
    pub evaluations: u64,
    /// Cutoffs taken (always 0 with pruning disabled)
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: Score,
    pub search_type: SearchType,
    pub stats: SearchStats,
}

impl SearchResult {
    fn immediate(pos: Pos, search_type: SearchType) -> Self {
        Self {
            best_move: Some(pos),
            score: Score::default(),
            search_type,
            stats: SearchStats::default(),
        }
    }
}

/// Minimax searcher bound to one configuration.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    evaluator: Evaluator,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = Evaluator::from_config(&config);
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Choose a move for the maximizing stone.
    ///
    /// The board is used as scratch space and is restored before
    /// returning. Calling this on a finished game is a caller error.
    pub fn select_move(&mut self, board: &mut Board) -> SearchResult {
        self.stats = SearchStats::default();

        if board.is_board_empty() {
            return SearchResult::immediate(board.center(), SearchType::Opening);
        }

        let candidates = generate_moves(board, self.config.neighbor_radius);
        tracing::trace!(candidates = candidates.len(), "root candidates");
        if let [only] = candidates.as_slice() {
            return SearchResult::immediate(*only, SearchType::SingleCandidate);
        }

        let max_stone = self.config.max_stone;
        let child_depth = self.config.max_depth.saturating_sub(1);
        let mut best_score = Score::NEG_INFINITY;
        let mut best_move = None;
        let mut alpha = Score::NEG_INFINITY;
        let beta = Score::INFINITY;

        for &mov in &candidates {
            let score = board.with_stone(mov, max_stone, |b| {
                self.minimax(b, child_depth, false, alpha, beta)
            });

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
        }

        if best_move.is_some() {
            return SearchResult {
                best_move,
                score: best_score,
                search_type: SearchType::Minimax,
                stats: self.stats,
            };
        }

        // Every reply loses: keep the move that looks best right now
        SearchResult {
            best_move: self.best_static_move(board, &candidates),
            score: best_score,
            search_type: SearchType::ForcedLoss,
            stats: self.stats,
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` selects whose stone is placed at this node. `alpha` is
    /// the best score the maximizer can already guarantee, `beta` the best
    /// the minimizer can.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(board);
        }
        if let Some(decided) = self.evaluator.decisive(board) {
            self.stats.evaluations += 1;
            return decided;
        }
        if board.is_full() {
            return self.leaf(board);
        }

        let candidates = generate_moves(board, self.config.neighbor_radius);
        let prune = self.config.pruning;

        if maximizing {
            let stone = self.config.max_stone;
            let mut value = Score::NEG_INFINITY;
            for mov in candidates {
                let child = board.with_stone(mov, stone, |b| self.minimax(b, depth - 1, false, alpha, beta));
                value = value.max(child);
                alpha = alpha.max(value);
                if prune && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let stone = self.config.min_stone;
            let mut value = Score::INFINITY;
            for mov in candidates {
                let child = board.with_stone(mov, stone, |b| self.minimax(b, depth - 1, true, alpha, beta));
                value = value.min(child);
                beta = beta.min(value);
                if prune && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board) -> Score {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(board)
    }

    /// Candidate with the highest evaluation after placing the maximizer's
    /// stone, earliest on ties.
    fn best_static_move(&mut self, board: &mut Board, candidates: &[Pos]) -> Option<Pos> {
        let stone = self.config.max_stone;
        let mut best: Option<(Pos, Score)> = None;
        for &mov in candidates {
            let score = board.with_stone(mov, stone, |b| self.leaf(b));
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mov, score));
            }
        }
        best.map(|(mov, _)| mov)
    }
}
