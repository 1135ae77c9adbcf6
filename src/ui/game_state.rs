//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{AppConfig, GuiConfig, SearchConfig};
use crate::error::MoveError;
use crate::game::{Game, GameMode, GameOutcome};
use crate::{AIEngine, MoveResult, Pos, Stone};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    search: SearchConfig,
    gui: GuiConfig,
    /// AI vs AI: earliest time the next engine move may start
    ai_ready_at: Option<Instant>,
}

impl GameState {
    pub fn new(mode: GameMode, config: &AppConfig) -> Self {
        Self {
            game: Game::new(config.search.board_size, config.search.win_length),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            search: config.search.clone(),
            gui: config.gui.clone(),
            ai_ready_at: None,
        }
    }

    /// Start over in `mode`, keeping the search settings
    pub fn restart(&mut self, mode: GameMode) {
        self.game = Game::new(self.search.board_size, self.search.win_length);
        self.mode = mode;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
        self.ai_ready_at = None;
    }

    pub fn reset(&mut self) {
        self.restart(self.mode);
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Applies to the next engine move
    pub fn set_depth(&mut self, depth: u8) {
        self.search.max_depth = depth.max(1);
        tracing::info!(depth = self.search.max_depth, "search depth changed");
    }

    pub fn set_pruning(&mut self, pruning: bool) {
        self.search.pruning = pruning;
        tracing::info!(pruning, "pruning toggled");
    }

    pub fn current_turn(&self) -> Stone {
        self.game.current_turn()
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        match self.game.outcome() {
            Some(GameOutcome::Win { line, .. }) => Some(line.as_slice()),
            _ => None,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        !self.mode.is_ai(self.current_turn())
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode.is_ai(self.current_turn())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.execute_move(pos)
    }

    /// Play a move for whoever is on turn
    fn execute_move(&mut self, pos: Pos) -> Result<(), MoveError> {
        let color = self.current_turn();
        self.game.play(pos)?;
        tracing::debug!(player = color.name(), %pos, "move played");

        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();

        if self.mode == GameMode::AiVsAi {
            self.ai_ready_at =
                Some(Instant::now() + Duration::from_millis(self.gui.ai_vs_ai_delay_ms));
        }
        Ok(())
    }

    /// Engine for the side on turn, using the current search settings
    fn engine_for_turn(&self) -> Result<AIEngine, String> {
        AIEngine::new(self.search.for_stone(self.current_turn())).map_err(|e| e.to_string())
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_over() {
            return;
        }
        if self.ai_ready_at.is_some_and(|at| Instant::now() < at) {
            return;
        }

        let mut engine = match self.engine_for_turn() {
            Ok(engine) => engine,
            Err(msg) => {
                tracing::warn!(error = %msg, "cannot start engine");
                self.message = Some(msg);
                return;
            }
        };
        let board = self.game.board().clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let AiState::Thinking { receiver, start_time } = &self.ai_state else {
            return;
        };

        let (move_result, elapsed) = match receiver.try_recv() {
            Ok(result) => (result, start_time.elapsed()),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.ai_state = AiState::Idle;
                self.message = Some("AI error".to_string());
                return;
            }
        };

        self.ai_state = AiState::Idle;
        self.move_timer.ai_thinking_time = Some(elapsed);
        self.last_ai_result = Some(move_result.clone());

        match move_result.best_move {
            Some(pos) => {
                if let Err(e) = self.execute_move(pos) {
                    tracing::warn!(error = %e, "engine produced an illegal move");
                    self.message = Some(e.to_string());
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a move for the side on turn (human vs human only)
    pub fn request_suggestion(&mut self) {
        if self.mode != GameMode::HumanVsHuman || self.is_over() || self.is_ai_thinking() {
            return;
        }

        match self.engine_for_turn() {
            Ok(mut engine) => {
                let result = engine.get_move_with_stats(self.game.board());
                self.suggested_move = result.best_move;
                self.last_ai_result = Some(result);
            }
            Err(msg) => self.message = Some(msg),
        }
    }

    /// Undo the last move, or the last exchange against the AI
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        let count = match self.mode {
            GameMode::HumanVsAi { .. } if self.game.history().len() >= 2 => 2,
            _ => 1,
        };
        self.game.undo(count);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: GameMode) -> GameState {
        let mut config = AppConfig::default();
        config.gui.ai_vs_ai_delay_ms = 0;
        GameState::new(mode, &config)
    }

    fn wait_for_ai(state: &mut GameState) {
        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("AI did not answer in time");
    }

    #[test]
    fn test_human_cannot_move_on_ai_turn() {
        let mut state = state(GameMode::HumanVsAi { human: Stone::White });
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(Pos::new(7, 7)), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_ai_opens_in_center() {
        let mut state = state(GameMode::HumanVsAi { human: Stone::White });
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err(MoveError::AiThinking));

        wait_for_ai(&mut state);
        assert_eq!(state.game.last_move(), Some(Pos::new(7, 7)));
        assert_eq!(state.current_turn(), Stone::White);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_undo_against_ai_removes_exchange() {
        let mut state = state(GameMode::HumanVsAi { human: Stone::Black });
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.game.history().len(), 2);

        state.undo();
        assert!(state.game.board().is_board_empty());
        assert_eq!(state.current_turn(), Stone::Black);
    }

    #[test]
    fn test_hint_only_between_humans() {
        let mut state = state(GameMode::HumanVsHuman);
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.request_suggestion();
        let hint = state.suggested_move.unwrap();
        assert!(state.game.board().is_empty(hint));

        let mut state = self::state(GameMode::HumanVsAi { human: Stone::Black });
        state.request_suggestion();
        assert_eq!(state.suggested_move, None);
    }

    #[test]
    fn test_search_settings_apply_to_next_move() {
        let mut state = state(GameMode::HumanVsHuman);
        state.set_depth(0);
        assert_eq!(state.search_config().max_depth, 1);
        state.set_pruning(false);
        assert!(!state.search_config().pruning);
    }
}
