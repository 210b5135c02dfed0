//! Bitboard implementation for fast line matching

use super::{Pos, TOTAL_CELLS};

/// Mask with all nine cells set
const FULL_MASK: u16 = (1 << TOTAL_CELLS) - 1;

/// Bitboard representation of one player's marks.
/// Bit `row * 3 + col` is set when the cell is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Create a bitboard from raw bits (bits above the ninth are dropped)
    pub const fn from_bits(bits: u16) -> Self {
        Self {
            bits: bits & FULL_MASK,
        }
    }

    /// Raw bit pattern
    #[inline]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// True when every bit of `mask` is set
    #[inline]
    pub fn contains_all(&self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Cells set in neither board
    #[inline]
    pub fn vacant(a: Bitboard, b: Bitboard) -> Bitboard {
        Bitboard::from_bits(!(a.bits | b.bits))
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard.
/// Owns a copy of the bits, so the source board can change while iterating.
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
