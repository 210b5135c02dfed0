//! Search module for the computer player
//!
//! Contains:
//! - Exhaustive minimax search (hard tier)
//! - One-ply tactics: immediate win, forced block, random fallback

pub mod minimax;
pub mod tactics;

pub use minimax::{SearchResult, Searcher};
pub use tactics::{find_block, find_immediate_win, random_empty_cell};
