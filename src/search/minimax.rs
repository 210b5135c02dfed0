//! Exhaustive minimax search
//!
//! Plain minimax over the full game tree, no pruning and no transposition
//! table. The tree is at most nine plies deep with a branching factor of at
//! most nine, so the whole thing fits comfortably in a single call.
//!
//! The searcher copies the board it is given into a private scratch board,
//! places and clears marks on that copy while recursing, and always restores
//! each cell before moving to the next candidate. The caller's board is never
//! touched, so a search can run on a worker thread with its own copy.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::from_rows(["XX.", "OO.", "..."]);
//!
//! let result = searcher.search(&board, Player::One);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use log::trace;

use crate::board::{Board, Player, Pos};
use crate::eval::{terminal_score, INF};
use crate::rules::evaluate_outcome;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher. Holds only statistics; every search starts from a fresh
/// copy of the caller's board.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the best move for `player`.
    ///
    /// Candidates are tried in row-major order and only a strictly better
    /// score replaces the current best, so ties go to the first cell found.
    /// Returns `best_move: None` when the board has no empty cell.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        self.nodes = 0;
        let mut scratch = *board;

        let mut best_move = None;
        let mut best_score = -INF;

        for pos in board.empty_cells() {
            scratch.place(pos, player);
            let score = self.minimax(&mut scratch, player, 0, false);
            scratch.clear(pos);

            trace!("root candidate {} scored {}", pos, score);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        debug_assert_eq!(&scratch, board, "scratch board must be restored");

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        }
    }

    /// Score the position on `board` for `me`.
    ///
    /// `maximizing` says whose mark goes down next: `me` when true, the
    /// opponent when false.
    fn minimax(&mut self, board: &mut Board, me: Player, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(score) = terminal_score(evaluate_outcome(board), me, depth) {
            return score;
        }

        let mover = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { -INF } else { INF };

        for pos in board.empty_cells() {
            board.place(pos, mover);
            let score = self.minimax(board, me, depth + 1, !maximizing);
            board.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
