//! Game core: state, scoreboard and the session facade used by the UI
//!
//! Nothing here knows about pixels or input events. A front-end drives a
//! [`Session`] through `new_game`, `apply_move`, `undo`, `redo` and
//! `select_computer_move`, and reads back the board, turn and outcome.

mod error;
mod score;
mod session;
mod state;

use std::fmt;

pub use error::MoveError;
pub use score::Scoreboard;
pub use session::{GameRecord, Session};
pub use state::{GameState, MoveRecord};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    #[value(name = "pvp")]
    PvP,
    /// Player vs Computer
    #[default]
    #[value(name = "pvc")]
    PvC,
}

impl GameMode {
    /// Player kinds a fresh game in this mode starts with
    pub fn default_players(self) -> (PlayerKind, PlayerKind) {
        match self {
            GameMode::PvP => (PlayerKind::Human, PlayerKind::Human),
            GameMode::PvC => (PlayerKind::Human, PlayerKind::Computer),
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PvP => GameMode::PvC,
            GameMode::PvC => GameMode::PvP,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PvP => f.write_str("PvP"),
            GameMode::PvC => f.write_str("PvC"),
        }
    }
}

/// Who controls a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Computer,
}
