//! Game rules for Tic-Tac-Toe
//!
//! This module implements the rule set:
//! - Move legality (in bounds, empty cell)
//! - Win conditions (three in a row, column or diagonal)
//! - Draw detection (full board without a line)

pub mod win;

use crate::board::{Board, Pos};

// Re-exports for convenient access
pub use win::{
    check_winner, evaluate_outcome, find_winning_line, has_three_in_row, is_winning_move,
    GameOutcome, WinningLine, LINES,
};

/// A move is legal when the cell is empty and the game is still open
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos) && !evaluate_outcome(board).is_terminal()
}
