//! Setup and IO errors.
//!
//! Running out of money is not an error: payments report a `bool` and the
//! turn engine turns failures into bankruptcies. `GameError` covers the
//! things that stop a game from being built or from continuing at all.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("at least {min} players are needed to start, got {found}")]
    NotEnoughPlayers { found: usize, min: usize },

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("player name {0:?} is used more than once")]
    DuplicatePlayer(String),

    #[error("a board needs at least 2 squares, got {0}")]
    BoardTooSmall(usize),

    #[error("a board holds at most 256 squares, got {0}")]
    BoardTooLarge(usize),

    #[error("{0} is not a possible two-dice total")]
    InvalidRoll(u8),

    #[error("input closed before the game finished")]
    InputClosed,
}
