//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board: one bitboard per player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Player one (X) marks
    pub x: Bitboard,
    /// Player two (O) marks
    pub o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        if self.x.get(pos) {
            Some(Player::One)
        } else if self.o.get(pos) {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a mark. Overwrites whatever was there.
    /// Use `GameState::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.clear(pos);
        self.marks_mut(player).set(pos);
    }

    /// Remove a mark
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// Get bitboard for a player
    #[inline]
    pub fn marks(&self, player: Player) -> &Bitboard {
        match player {
            Player::One => &self.x,
            Player::Two => &self.o,
        }
    }

    /// Get mutable bitboard for a player
    #[inline]
    pub fn marks_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::One => &mut self.x,
            Player::Two => &mut self.o,
        }
    }

    /// Bitboard of empty cells
    #[inline]
    pub fn empty(&self) -> Bitboard {
        Bitboard::vacant(self.x, self.o)
    }

    /// Empty cells in row-major order.
    /// The iterator holds its own copy, so the board may be mutated while iterating.
    #[inline]
    pub fn empty_cells(&self) -> super::bitboard::BitboardIter {
        self.empty().iter_ones()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// Check if no mark has been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() as usize == TOTAL_CELLS
    }

    /// Build a board from three row strings of `X`, `O` and `.`
    /// (any other character counts as empty). Mostly useful for tests.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'X' | 'x' => board.place(pos, Player::One),
                    'O' | 'o' => board.place(pos, Player::Two),
                    _ => {}
                }
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(row as u8, col as u8)) {
                    Some(player) => player.symbol(),
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
