//! Computer player: picks a move according to the configured difficulty
//!
//! Three tiers are available:
//!
//! 1. **Easy**: a uniformly random empty cell
//! 2. **Medium**: take an immediate win, otherwise block an immediate loss,
//!    otherwise random
//! 3. **Hard**: exhaustive minimax; never loses
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Difficulty, Player, Pos};
//!
//! let mut engine = AIEngine::new(Difficulty::Hard);
//! let board = Board::from_rows(["OO.", ".X.", "..."]);
//!
//! let result = engine.get_move_with_stats(&board, Player::One);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Player, Pos};
use crate::search::{find_block, find_immediate_win, random_empty_cell, Searcher};

/// Strength of the computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    /// Next tier, wrapping from hard back to easy
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which rule produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform random choice
    Random,
    /// Completes a line this turn
    ImmediateWin,
    /// Stops the opponent from completing a line next turn
    Block,
    /// Full minimax search
    Minimax,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score (0 for the non-searching tiers)
    pub score: i32,
    /// Rule that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn tactical(pos: Pos, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn random(pos: Option<Pos>, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
        }
    }
}

/// Move selector for the computer player.
///
/// Owns its own random number generator so games can be replayed with a
/// fixed seed. The board passed in is never modified; the minimax tier works
/// on a private copy.
pub struct AIEngine {
    difficulty: Difficulty,
    searcher: Searcher,
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            searcher: Searcher::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a deterministic random number generator.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Independent engine with the same difficulty, seeded from this one.
    /// Used to search on a worker thread while this engine stays with the session.
    pub fn fork(&mut self) -> AIEngine {
        AIEngine::with_seed(self.difficulty, self.rng.gen())
    }

    /// Get the move for `player`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the move for `player` along with how it was found.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();

        let result = match self.difficulty {
            Difficulty::Easy => {
                MoveResult::random(self.random_move(board), elapsed_ms(start))
            }
            Difficulty::Medium => self.medium_move(board, player, start),
            Difficulty::Hard => {
                let search = self.searcher.search(board, player);
                MoveResult {
                    best_move: search.best_move,
                    score: search.score,
                    search_type: SearchType::Minimax,
                    time_ms: elapsed_ms(start),
                    nodes: search.nodes,
                }
            }
        };

        debug!(
            "{} ({}) picked {:?} via {:?}: score {}, {} nodes, {}ms",
            player, self.difficulty, result.best_move, result.search_type, result.score,
            result.nodes, result.time_ms
        );

        result
    }

    /// Win if possible, else block, else random.
    fn medium_move(&mut self, board: &Board, player: Player, start: Instant) -> MoveResult {
        if let Some(pos) = find_immediate_win(board, player) {
            return MoveResult::tactical(pos, SearchType::ImmediateWin, elapsed_ms(start));
        }

        if let Some(pos) = find_block(board, player) {
            return MoveResult::tactical(pos, SearchType::Block, elapsed_ms(start));
        }

        MoveResult::random(self.random_move(board), elapsed_ms(start))
    }

    fn random_move(&mut self, board: &Board) -> Option<Pos> {
        random_empty_cell(board, &mut self.rng)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
