//! Evaluation of terminal positions for the minimax search
//!
//! Only finished positions are scored. Wins are worth more the sooner they
//! happen and losses cost less the later they happen:
//! - win for the searching side: `WIN_SCORE - depth`
//! - win for the other side: `depth - WIN_SCORE`
//! - draw: `0`

use crate::board::Player;
use crate::rules::GameOutcome;

/// Base score of a win at depth zero
pub const WIN_SCORE: i32 = 10;

/// Bound larger than any reachable score
pub const INF: i32 = WIN_SCORE + 1;

/// Score a position from `perspective`'s point of view.
///
/// Returns `None` while the game is still in progress.
#[inline]
pub fn terminal_score(outcome: GameOutcome, perspective: Player, depth: i32) -> Option<i32> {
    match outcome {
        GameOutcome::Win(winner) if winner == perspective => Some(WIN_SCORE - depth),
        GameOutcome::Win(_) => Some(depth - WIN_SCORE),
        GameOutcome::Draw => Some(0),
        GameOutcome::InProgress => None,
    }
}
