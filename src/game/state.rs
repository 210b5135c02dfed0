//! Live game state: board, turn, outcome and undo/redo history

use log::debug;

use super::error::MoveError;
use super::score::Scoreboard;
use crate::board::{Board, Player, Pos};
use crate::rules::{find_winning_line, GameOutcome};

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Player,
}

/// State of a single game.
///
/// `apply_move`, `undo` and `redo` are the only ways the board changes.
/// The outcome is recomputed from the board after every placement.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Player,
    outcome: GameOutcome,
    winning_cells: Vec<Pos>,
    history: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
    scores: Scoreboard,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, player one to move, zero scores
    pub fn new() -> Self {
        Self::with_scores(Scoreboard::default())
    }

    /// Empty board carrying over an existing scoreboard
    pub fn with_scores(scores: Scoreboard) -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            outcome: GameOutcome::InProgress,
            winning_cells: Vec::new(),
            history: Vec::new(),
            redo_stack: Vec::new(),
            scores,
        }
    }

    /// Clear the board and both stacks. The scoreboard is kept.
    pub fn reset(&mut self) {
        let scores = self.scores;
        *self = Self::with_scores(scores);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The three cells of the winning line, empty unless the game is won
    pub fn winning_cells(&self) -> &[Pos] {
        &self.winning_cells
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn redo_stack(&self) -> &[MoveRecord] {
        &self.redo_stack
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Place the current player's mark at `pos`.
    ///
    /// Fails without changing anything if the cell is off the board or taken,
    /// or if the game is already decided. On success the redo stack is
    /// dropped and the turn passes to the opponent unless the move ended the
    /// game.
    pub fn apply_move(&mut self, pos: Pos) -> Result<MoveRecord, MoveError> {
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        let record = MoveRecord {
            pos,
            player: self.current,
        };
        self.board.place(pos, record.player);
        self.history.push(record);
        self.redo_stack.clear();
        debug!("{} plays {}", record.player, pos);

        self.recompute_outcome();
        if !self.is_game_over() {
            self.current = record.player.opponent();
        }

        Ok(record)
    }

    /// Take back the most recent move.
    ///
    /// The undone player is to move again and the game is marked in progress
    /// no matter what the outcome was. A win taken back is also taken off the
    /// scoreboard. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let record = match self.history.pop() {
            Some(record) => record,
            None => return false,
        };

        self.board.clear(record.pos);
        self.redo_stack.push(record);
        self.current = record.player;

        if let GameOutcome::Win(winner) = self.outcome {
            self.scores.revoke_win(winner);
        }
        self.outcome = GameOutcome::InProgress;
        self.winning_cells.clear();

        debug!("undo {} at {}", record.player, record.pos);
        true
    }

    /// Replay the most recently undone move.
    /// Returns `false` when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        let record = match self.redo_stack.pop() {
            Some(record) => record,
            None => return false,
        };

        if !self.board.is_empty(record.pos) {
            // Only reachable if the board was changed behind our back.
            self.redo_stack.push(record);
            return false;
        }

        self.board.place(record.pos, record.player);
        self.history.push(record);
        debug!("redo {} at {}", record.player, record.pos);

        self.recompute_outcome();
        if !self.is_game_over() {
            self.current = record.player.opponent();
        }
        true
    }

    /// Derive the outcome from the board.
    ///
    /// Lines are scanned rows first, then columns, then the main diagonal,
    /// then the anti-diagonal. A win records the winning cells and adds one
    /// to the winner's score.
    pub fn recompute_outcome(&mut self) -> GameOutcome {
        self.winning_cells.clear();

        self.outcome = match find_winning_line(&self.board) {
            Some(line) => {
                self.winning_cells.extend_from_slice(&line.cells);
                self.scores.record_win(line.player);
                GameOutcome::Win(line.player)
            }
            None if self.board.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        };

        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[(u8, u8)]) {
        for &(r, c) in moves {
            state.apply_move(Pos::new(r, c)).unwrap();
        }
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert!(state.board().is_board_empty());
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn test_apply_move_alternates_turns() {
        let mut state = GameState::new();
        let record = state.apply_move(Pos::new(1, 1)).unwrap();
        assert_eq!(record.player, Player::One);
        assert_eq!(state.board().get(Pos::new(1, 1)), Some(Player::One));
        assert_eq!(state.current_player(), Player::Two);

        state.apply_move(Pos::new(0, 0)).unwrap();
        assert_eq!(state.board().get(Pos::new(0, 0)), Some(Player::Two));
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new();
        state.apply_move(Pos::new(0, 0)).unwrap();
        let before = state.clone();

        let err = state.apply_move(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, MoveError::Occupied(Pos::new(0, 0)));
        assert_eq!(state.board(), before.board());
        assert_eq!(state.current_player(), before.current_player());
        assert_eq!(state.history(), before.history());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut state = GameState::new();
        let err = state.apply_move(Pos { row: 3, col: 0 }).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { row: 3, col: 0 });
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_row_win_scenario() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (2, 2)]);
        assert!(!state.is_game_over());

        state.apply_move(Pos::new(0, 2)).unwrap();
        assert_eq!(state.outcome(), GameOutcome::Win(Player::One));
        assert_eq!(
            state.winning_cells(),
            &[Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
        );
        assert_eq!(state.scores().wins(Player::One), 1);
        assert_eq!(state.scores().wins(Player::Two), 0);
        // Turn does not pass after the winning move
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(state.apply_move(Pos::new(1, 1)), Err(MoveError::GameOver));
        assert_eq!(state.history().len(), 5);
    }

    #[test]
    fn test_draw_scenario() {
        let mut state = GameState::new();
        // X O X
        // O O X
        // X X O
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (1, 1), (2, 0), (2, 2)],
        );
        assert!(!state.is_game_over());
        state.apply_move(Pos::new(2, 1)).unwrap();
        assert_eq!(state.outcome(), GameOutcome::Draw);
        assert!(state.winning_cells().is_empty());
        assert_eq!(state.scores().wins(Player::One), 0);
        assert_eq!(state.scores().wins(Player::Two), 0);
        assert_eq!(state.apply_move(Pos::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let mut state = GameState::new();
        play(&mut state, &[(1, 1), (0, 0)]);
        let before = state.clone();

        state.apply_move(Pos::new(2, 2)).unwrap();
        assert!(state.undo());

        assert_eq!(state.board(), before.board());
        assert_eq!(state.current_player(), before.current_player());
        assert_eq!(state.outcome(), before.outcome());
        assert_eq!(state.history(), before.history());
        assert_eq!(
            state.redo_stack(),
            &[MoveRecord {
                pos: Pos::new(2, 2),
                player: Player::One
            }]
        );
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut state = GameState::new();
        assert!(!state.undo());
        assert!(!state.redo());
    }

    #[test]
    fn test_redo_reproduces_state() {
        let mut state = GameState::new();
        play(&mut state, &[(1, 1), (0, 0), (2, 2)]);
        let before = state.clone();

        assert!(state.undo());
        assert!(state.redo());

        assert_eq!(state.board(), before.board());
        assert_eq!(state.current_player(), before.current_player());
        assert_eq!(state.outcome(), before.outcome());
        assert_eq!(state.history(), before.history());
        assert!(state.redo_stack().is_empty());
    }

    #[test]
    fn test_undo_redo_winning_move() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        let won = state.clone();

        assert!(state.undo());
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert!(state.winning_cells().is_empty());
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.scores().wins(Player::One), 0);

        assert!(state.redo());
        assert_eq!(state.outcome(), won.outcome());
        assert_eq!(state.winning_cells(), won.winning_cells());
        assert_eq!(state.current_player(), won.current_player());
        assert_eq!(state.scores(), won.scores());
    }

    #[test]
    fn test_multi_step_undo_then_redo() {
        let mut state = GameState::new();
        play(&mut state, &[(1, 1), (0, 0), (2, 2), (0, 2)]);
        let before = state.clone();

        for _ in 0..4 {
            assert!(state.undo());
        }
        assert!(state.board().is_board_empty());
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.undo());

        for _ in 0..4 {
            assert!(state.redo());
        }
        assert_eq!(state.board(), before.board());
        assert_eq!(state.current_player(), before.current_player());
        assert!(!state.redo());
    }

    #[test]
    fn test_new_move_clears_redo_stack() {
        let mut state = GameState::new();
        play(&mut state, &[(1, 1), (0, 0), (2, 2)]);
        assert!(state.undo());
        assert!(state.undo());
        assert_eq!(state.redo_stack().len(), 2);

        state.apply_move(Pos::new(0, 1)).unwrap();
        assert!(state.redo_stack().is_empty());
        assert!(!state.redo());
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        state.reset();
        assert!(state.board().is_board_empty());
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_game_over());
        assert_eq!(state.scores().wins(Player::One), 1);
    }
}
