use thiserror::Error;

use crate::board::Pos;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell {0} is already taken")]
    Occupied(Pos),
    #[error("the game is over")]
    GameOver,
}
