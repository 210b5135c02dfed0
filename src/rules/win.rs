//! Win and draw detection
//!
//! Lines are scanned in a fixed order: the three rows top to bottom, the
//! three columns left to right, the main diagonal, then the anti-diagonal.
//! The first complete line found decides the winner.

use crate::board::{Bitboard, Board, Player, Pos};

/// The eight winning lines in scan order
pub const LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Main diagonal
    [(0, 0), (1, 1), (2, 2)],
    // Anti-diagonal
    [(0, 2), (1, 1), (2, 0)],
];

/// Bit masks for `LINES`, same order
const LINE_MASKS: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

/// State of a game as derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// True for `Win` and `Draw`
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// The winner, if any
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// A completed line of three
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Pos; 3],
}

#[inline]
fn line_cells(line: usize) -> [Pos; 3] {
    let [a, b, c] = LINES[line];
    [Pos::new(a.0, a.1), Pos::new(b.0, b.1), Pos::new(c.0, c.1)]
}

/// First completed line in scan order, if any.
///
/// Each line is tested for both players before moving to the next line, so
/// the result matches a cell-by-cell scan of the grid.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    for (i, &mask) in LINE_MASKS.iter().enumerate() {
        let mask = Bitboard::from_bits(mask);
        for player in [Player::One, Player::Two] {
            if board.marks(player).contains_all(mask) {
                return Some(WinningLine {
                    player,
                    cells: line_cells(i),
                });
            }
        }
    }
    None
}

/// Check whether `player` has any completed line
#[inline]
pub fn has_three_in_row(board: &Board, player: Player) -> bool {
    let marks = board.marks(player);
    LINE_MASKS
        .iter()
        .any(|&mask| marks.contains_all(Bitboard::from_bits(mask)))
}

/// Check for a winner
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|line| line.player)
}

/// Derive the outcome from the board contents
pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    match check_winner(board) {
        Some(player) => GameOutcome::Win(player),
        None if board.is_full() => GameOutcome::Draw,
        None => GameOutcome::InProgress,
    }
}

/// Would placing `player` at `pos` complete a line?
/// Uses a copy of the board; the caller's board is untouched.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, player: Player) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    let mut marks = *board.marks(player);
    marks.set(pos);
    LINE_MASKS
        .iter()
        .any(|&mask| marks.contains_all(Bitboard::from_bits(mask)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    /// Cell-by-cell line check used as a reference for the bitboard version
    fn naive_winner(cells: &[Option<Player>; TOTAL_CELLS]) -> Option<Player> {
        for line in LINES {
            let [a, b, c] = line.map(|(r, c)| cells[r as usize * 3 + c as usize]);
            if a.is_some() && a == b && b == c {
                return a;
            }
        }
        None
    }

    #[test]
    fn test_row_win() {
        let board = Board::from_rows(["XXX", "OO.", "..."]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.player, Player::One);
        assert_eq!(line.cells, [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(evaluate_outcome(&board), GameOutcome::Win(Player::One));
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_rows(["XO.", "XO.", ".OX"]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.player, Player::Two);
        assert_eq!(line.cells, [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)]);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = Board::from_rows(["OX.", "XO.", "X.O"]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.player, Player::Two);
        assert_eq!(line.cells, [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows(["OOX", ".X.", "X.."]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.player, Player::One);
        assert_eq!(line.cells, [Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // X completes both row 2 and column 0; the row comes first.
        let board = Board::from_rows(["XOO", "XO.", "XXX"]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.cells, [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)]);
    }

    #[test]
    fn test_draw() {
        let board = Board::from_rows(["XOX", "OOX", "XXO"]);
        assert_eq!(check_winner(&board), None);
        assert_eq!(evaluate_outcome(&board), GameOutcome::Draw);
        assert!(evaluate_outcome(&board).is_terminal());
    }

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(evaluate_outcome(&board), GameOutcome::InProgress);
        assert!(!has_three_in_row(&board, Player::One));
        assert!(!has_three_in_row(&board, Player::Two));
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]);
        assert_eq!(evaluate_outcome(&board), GameOutcome::Win(Player::One));
    }

    #[test]
    fn test_is_winning_move() {
        let board = Board::from_rows(["XX.", "OO.", "..."]);
        assert!(is_winning_move(&board, Pos::new(0, 2), Player::One));
        assert!(!is_winning_move(&board, Pos::new(0, 2), Player::Two));
        assert!(is_winning_move(&board, Pos::new(1, 2), Player::Two));
        // Occupied cells never count
        assert!(!is_winning_move(&board, Pos::new(0, 0), Player::One));
    }

    #[test]
    fn test_every_configuration_matches_reference() {
        // Every assignment of {empty, X, O} to the nine cells.
        for code in 0..3usize.pow(TOTAL_CELLS as u32) {
            let mut cells = [None; TOTAL_CELLS];
            let mut board = Board::new();
            let mut rest = code;
            for (idx, cell) in cells.iter_mut().enumerate() {
                *cell = match rest % 3 {
                    1 => Some(Player::One),
                    2 => Some(Player::Two),
                    _ => None,
                };
                if let Some(player) = *cell {
                    board.place(Pos::from_index(idx), player);
                }
                rest /= 3;
            }

            let expected = match naive_winner(&cells) {
                Some(player) => GameOutcome::Win(player),
                None if cells.iter().all(Option::is_some) => GameOutcome::Draw,
                None => GameOutcome::InProgress,
            };
            assert_eq!(evaluate_outcome(&board), expected, "board:\n{}", board);
        }
    }
}
