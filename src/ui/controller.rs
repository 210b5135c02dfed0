//! Input routing between the GUI and the game session
//!
//! The controller owns the [`Session`], turns clicks and button presses into
//! session calls, and runs the computer player on a worker thread so the
//! frame loop never blocks on a search.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;
use thiserror::Error;

use crate::{Board, Difficulty, GameMode, MoveError, MoveResult, PlayerKind, Pos, Session};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    #[error("not your turn")]
    NotYourTurn,
    #[error("computer is thinking")]
    ComputerThinking,
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Computer move computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        /// Board the search was started on; a result for any other board is stale
        board: Board,
        start_time: Instant,
    },
}

/// Settings a session is started with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOptions {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_first: bool,
    pub seed: Option<u64>,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::PvC,
            difficulty: Difficulty::Hard,
            computer_first: false,
            seed: None,
        }
    }
}

impl StartOptions {
    fn players(&self) -> (PlayerKind, PlayerKind) {
        match (self.mode, self.computer_first) {
            (GameMode::PvC, true) => (PlayerKind::Computer, PlayerKind::Human),
            (mode, _) => mode.default_players(),
        }
    }
}

pub struct GameController {
    pub session: Session,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub last_ai_time: Option<Duration>,
    pub message: Option<String>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(StartOptions::default())
    }
}

impl GameController {
    pub fn new(options: StartOptions) -> Self {
        let (p1, p2) = options.players();
        let session = match options.seed {
            Some(seed) => Session::with_seed(options.mode, p1, p2, options.difficulty, seed),
            None => Session::new(options.mode, p1, p2, options.difficulty),
        };
        Self {
            session,
            ai_state: AiState::Idle,
            last_ai_result: None,
            last_ai_time: None,
            message: None,
        }
    }

    /// Drop any running search and clear per-game UI state
    fn clear_transient(&mut self) {
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.message = None;
    }

    /// New game with the current configuration
    pub fn reset(&mut self) {
        self.clear_transient();
        self.session.restart();
    }

    pub fn toggle_mode(&mut self) {
        self.clear_transient();
        self.session.toggle_mode();
    }

    pub fn cycle_difficulty(&mut self) {
        self.clear_transient();
        self.session.cycle_difficulty();
    }

    /// Check if a human controls the side to move
    pub fn is_human_turn(&self) -> bool {
        self.session.player_kind(self.session.current_player()) == PlayerKind::Human
    }

    /// Check if the computer controls the side to move and the game is open
    pub fn is_ai_turn(&self) -> bool {
        self.session.is_computer_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Human click on a cell
    pub fn try_place(&mut self, pos: Pos) -> Result<(), PlayError> {
        if self.is_ai_thinking() {
            return Err(PlayError::ComputerThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }

        self.session.apply_move(pos.row as usize, pos.col as usize)?;
        self.message = None;
        Ok(())
    }

    /// Start the computer's search on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.session.board();
        let player = self.session.current_player();
        let mut engine = self.session.fork_engine();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            board,
            start_time: Instant::now(),
        };
    }

    /// Apply the computer's move once the worker has delivered it
    pub fn check_ai_result(&mut self) {
        let (result, board, elapsed) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                board,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => (result, *board, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("computer worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("Computer error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        if &board != self.session.board() {
            return;
        }

        self.last_ai_time = Some(elapsed);
        self.last_ai_result = Some(result.clone());

        match result.best_move {
            Some(pos) => {
                if let Err(err) = self.session.apply_move(pos.row as usize, pos.col as usize) {
                    self.message = Some(err.to_string());
                }
            }
            None => self.message = Some("Computer could not find a move".to_string()),
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo back to the most recent human turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if !self.session.undo() {
            return;
        }
        while self.session.player_kind(self.session.current_player()) == PlayerKind::Computer
            && self.session.undo()
        {}
        self.message = None;
    }

    /// Redo forward to the next human turn
    pub fn redo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if !self.session.redo() {
            return;
        }
        while self.is_ai_turn() && self.session.redo() {}
        self.message = None;
    }
}
