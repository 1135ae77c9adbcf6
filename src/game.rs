//! Turn orchestration around the engine
//!
//! Tracks whose turn it is, validates moves, detects the end of the game
//! and keeps the move history for undo. Black moves first.

use crate::board::{Board, Pos, Stone};
use crate::error::MoveError;
use crate::rules::winning_line_at;

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human plays `human`, the engine plays the other color
    HumanVsAi { human: Stone },
    /// The engine plays both colors
    AiVsAi,
    /// Hotseat
    HumanVsHuman,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi { human: Stone::Black }
    }
}

impl GameMode {
    /// Whether `stone` is played by the engine in this mode
    pub fn is_ai(self, stone: Stone) -> bool {
        match self {
            GameMode::HumanVsAi { human } => stone != human,
            GameMode::AiVsAi => true,
            GameMode::HumanVsHuman => false,
        }
    }

    pub fn label(self) -> String {
        match self {
            GameMode::HumanVsAi { human } => format!("Human vs AI - You: {}", human.name()),
            GameMode::AiVsAi => "AI vs AI".to_string(),
            GameMode::HumanVsHuman => "Human vs Human".to_string(),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// `line` holds the winning run in board order
    Win { winner: Stone, line: Vec<Pos> },
    /// Board full with no winner
    Draw,
}

/// A single game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    win_length: usize,
    current_turn: Stone,
    history: Vec<(Pos, Stone)>,
    outcome: Option<GameOutcome>,
}

impl Game {
    pub fn new(board_size: usize, win_length: usize) -> Self {
        Self {
            board: Board::new(board_size),
            win_length,
            current_turn: Stone::Black,
            history: Vec::new(),
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Validate user-supplied coordinates against this board
    pub fn checked_pos(&self, row: i32, col: i32) -> Result<Pos, MoveError> {
        self.board.pos_at(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.board.size(),
        })
    }

    /// Play the current player's stone at `pos`.
    ///
    /// Returns the outcome when this move ends the game.
    pub fn play(&mut self, pos: Pos) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.history.push((pos, color));

        if let Some(line) = winning_line_at(&self.board, pos, color, self.win_length) {
            tracing::info!(winner = color.name(), moves = self.history.len(), "game won");
            self.outcome = Some(GameOutcome::Win { winner: color, line });
        } else if self.board.is_full() {
            tracing::info!(moves = self.history.len(), "game drawn");
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_turn = color.opponent();
        }

        Ok(self.outcome.clone())
    }

    /// Take back the last `count` moves.
    pub fn undo(&mut self, count: usize) {
        let keep = self.history.len().saturating_sub(count);
        let moves: Vec<_> = self.history.drain(..keep).collect();
        let size = self.board.size();

        self.board = Board::new(size);
        self.history.clear();
        self.current_turn = Stone::Black;
        self.outcome = None;

        for (pos, color) in moves {
            self.board.place_stone(pos, color);
            self.history.push((pos, color));
            self.current_turn = color.opponent();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(crate::board::DEFAULT_BOARD_SIZE, 5)
    }
}
