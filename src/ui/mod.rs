//! GUI module for the Tic-Tac-Toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod controller;
mod theme;

pub use app::TicTacToeApp;
pub use board_view::{BoardView, MoveAnimation};
pub use controller::{AiState, GameController, PlayError, StartOptions};
