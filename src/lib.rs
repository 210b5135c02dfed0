//! Tic-Tac-Toe engine with a computer opponent
//!
//! A 3x3 Tic-Tac-Toe core for human-vs-human and human-vs-computer play:
//! - Board of two bitboards, one per player
//! - Win detection over the eight lines in a fixed scan order
//! - Undo/redo history and a session scoreboard
//! - Computer player with three difficulty tiers
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality, win and draw detection
//! - [`eval`]: Depth-biased scoring of finished positions
//! - [`search`]: Minimax search and one-ply tactics
//! - [`engine`]: Move selector for the three difficulty tiers
//! - [`game`]: Game state, undo/redo and the session facade
//! - [`ui`]: egui front-end that routes input into a session
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Difficulty, GameMode, PlayerKind, Session};
//!
//! let mut session = Session::new(
//!     GameMode::PvC,
//!     PlayerKind::Human,
//!     PlayerKind::Computer,
//!     Difficulty::Hard,
//! );
//!
//! // Human plays the center
//! session.apply_move(1, 1).unwrap();
//!
//! // Computer responds as O
//! if let Some(pos) = session.select_computer_move() {
//!     session.apply_move(pos.row as usize, pos.col as usize).unwrap();
//!     println!("Computer plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Difficulty tiers
//!
//! 1. Easy: random empty cell
//! 2. Medium: immediate win, else block, else random
//! 3. Hard: exhaustive minimax, never loses

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, BOARD_SIZE};
pub use engine::{AIEngine, Difficulty, MoveResult, SearchType};
pub use game::{GameMode, GameRecord, GameState, MoveError, MoveRecord, PlayerKind, Scoreboard, Session};
pub use rules::GameOutcome;
