//! Session facade: one game at a time, plus everything that outlives a game

use log::{debug, info};

use super::error::MoveError;
use super::score::Scoreboard;
use super::state::{GameState, MoveRecord};
use super::{GameMode, PlayerKind};
use crate::board::{Board, Player, Pos};
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::rules::GameOutcome;

/// A finished game, archived when it ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub board: Board,
    pub outcome: GameOutcome,
    pub moves: Vec<MoveRecord>,
    pub players: (PlayerKind, PlayerKind),
    pub difficulty: Difficulty,
}

/// A play session.
///
/// Owns the current [`GameState`], the configuration it was started with and
/// the computer player. The scoreboard and the log of finished games carry
/// over from one game to the next; everything else starts fresh on
/// [`Session::new_game`].
pub struct Session {
    state: GameState,
    mode: GameMode,
    players: (PlayerKind, PlayerKind),
    engine: AIEngine,
    games: Vec<GameRecord>,
}

impl Default for Session {
    fn default() -> Self {
        let mode = GameMode::default();
        let (p1, p2) = mode.default_players();
        Self::new(mode, p1, p2, Difficulty::default())
    }
}

impl Session {
    pub fn new(
        mode: GameMode,
        player1: PlayerKind,
        player2: PlayerKind,
        difficulty: Difficulty,
    ) -> Self {
        Self::with_engine(mode, player1, player2, AIEngine::new(difficulty))
    }

    /// Same as [`Session::new`] with a seeded random policy
    pub fn with_seed(
        mode: GameMode,
        player1: PlayerKind,
        player2: PlayerKind,
        difficulty: Difficulty,
        seed: u64,
    ) -> Self {
        Self::with_engine(mode, player1, player2, AIEngine::with_seed(difficulty, seed))
    }

    fn with_engine(
        mode: GameMode,
        player1: PlayerKind,
        player2: PlayerKind,
        engine: AIEngine,
    ) -> Self {
        let mut session = Self {
            state: GameState::new(),
            mode,
            players: (player1, player2),
            engine,
            games: Vec::new(),
        };
        session.log_new_game();
        session
    }

    /// Start a new game with the given configuration.
    /// The board, turn and history are reset; scores and the game log stay.
    pub fn new_game(
        &mut self,
        mode: GameMode,
        player1: PlayerKind,
        player2: PlayerKind,
        difficulty: Difficulty,
    ) {
        self.mode = mode;
        self.players = (player1, player2);
        self.engine.set_difficulty(difficulty);
        self.state.reset();
        self.log_new_game();
    }

    /// New game with the current configuration
    pub fn restart(&mut self) {
        let (p1, p2) = self.players;
        self.new_game(self.mode, p1, p2, self.difficulty());
    }

    /// Switch between PvP and PvC and start over
    pub fn toggle_mode(&mut self) {
        let mode = self.mode.toggled();
        let (p1, p2) = mode.default_players();
        self.new_game(mode, p1, p2, self.difficulty());
    }

    /// Move to the next difficulty tier and start over
    pub fn cycle_difficulty(&mut self) {
        let (p1, p2) = self.players;
        self.new_game(self.mode, p1, p2, self.difficulty().next());
    }

    fn log_new_game(&self) {
        info!(
            "new game: mode {}, X {:?}, O {:?}, difficulty {}",
            self.mode,
            self.players.0,
            self.players.1,
            self.difficulty()
        );
    }

    /// Place the current player's mark at `(row, col)`
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveRecord, MoveError> {
        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let record = self.state.apply_move(pos)?;
        self.archive_if_finished();
        Ok(record)
    }

    pub fn undo(&mut self) -> bool {
        let was_over = self.state.is_game_over();
        let undone = self.state.undo();
        if undone && was_over {
            self.games.pop();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.state.redo();
        if redone {
            self.archive_if_finished();
        }
        redone
    }

    fn archive_if_finished(&mut self) {
        let outcome = self.state.outcome();
        if !outcome.is_terminal() {
            return;
        }

        match outcome {
            GameOutcome::Win(winner) => info!("{} wins; score {}", winner, self.state.scores()),
            _ => info!("draw; score {}", self.state.scores()),
        }
        debug!("final board:\n{}", self.state.board());

        self.games.push(GameRecord {
            board: *self.state.board(),
            outcome,
            moves: self.state.history().to_vec(),
            players: self.players,
            difficulty: self.difficulty(),
        });
    }

    /// Ask the computer player for a move for whoever is to play.
    /// `None` once the game is over.
    pub fn select_computer_move(&mut self) -> Option<Pos> {
        self.select_computer_move_with_stats()
            .and_then(|result| result.best_move)
    }

    pub fn select_computer_move_with_stats(&mut self) -> Option<MoveResult> {
        if self.state.is_game_over() {
            return None;
        }
        let player = self.state.current_player();
        Some(self.engine.get_move_with_stats(self.state.board(), player))
    }

    /// Engine for a search that runs off the session, e.g. on a worker thread
    pub fn fork_engine(&mut self) -> AIEngine {
        self.engine.fork()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    pub fn winning_cells(&self) -> &[Pos] {
        self.state.winning_cells()
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.state.last_move()
    }

    pub fn scores(&self) -> &Scoreboard {
        self.state.scores()
    }

    /// Finished games, oldest first
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    pub fn player_kind(&self, player: Player) -> PlayerKind {
        match player {
            Player::One => self.players.0,
            Player::Two => self.players.1,
        }
    }

    /// Is the side to move controlled by the computer (and still playing)?
    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over() && self.player_kind(self.current_player()) == PlayerKind::Computer
    }
}
