//! One-ply tactics: immediate wins, forced blocks and random fallback
//!
//! These are the building blocks of the lower difficulty tiers. None of them
//! look past the next move, so a double threat goes unnoticed until it is
//! too late.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::{Board, Player, Pos};
use crate::rules::is_winning_move;

/// First empty cell, in row-major order, where `player` completes a line.
pub fn find_immediate_win(board: &Board, player: Player) -> Option<Pos> {
    board
        .empty_cells()
        .find(|&pos| is_winning_move(board, pos, player))
}

/// First empty cell where the opponent of `player` would complete a line,
/// i.e. the cell `player` has to take to block.
#[inline]
pub fn find_block(board: &Board, player: Player) -> Option<Pos> {
    find_immediate_win(board, player.opponent())
}

/// Uniformly random empty cell, `None` on a full board.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    board.empty_cells().choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_finds_win() {
        let board = Board::from_rows(["X.X", "OO.", "..."]);
        assert_eq!(find_immediate_win(&board, Player::One), Some(Pos::new(0, 1)));
        assert_eq!(find_immediate_win(&board, Player::Two), Some(Pos::new(1, 2)));
    }

    #[test]
    fn test_first_win_in_scan_order() {
        // X can win at (0,2) and at (2,0); (0,2) comes first.
        let board = Board::from_rows(["XX.", "XO.", ".OO"]);
        assert_eq!(find_immediate_win(&board, Player::One), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_finds_block() {
        let board = Board::from_rows(["OO.", ".X.", "..."]);
        assert_eq!(find_immediate_win(&board, Player::One), None);
        assert_eq!(find_block(&board, Player::One), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_no_tactics_on_quiet_board() {
        let board = Board::from_rows(["X..", "...", "..O"]);
        assert_eq!(find_immediate_win(&board, Player::One), None);
        assert_eq!(find_block(&board, Player::One), None);
    }

    #[test]
    fn test_random_picks_empty_cell() {
        let board = Board::from_rows(["XOX", "O.X", "XXO"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(random_empty_cell(&board, &mut rng), Some(Pos::new(1, 1)));
        }
    }

    #[test]
    fn test_random_covers_all_cells() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let pos = random_empty_cell(&board, &mut rng).unwrap();
            seen[pos.to_index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_on_full_board() {
        let board = Board::from_rows(["XOX", "OOX", "XXO"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_empty_cell(&board, &mut rng), None);
    }
}
