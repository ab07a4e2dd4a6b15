//! The board: a fixed ring of squares.
//!
//! ## Key Types
//!
//! - `SquareId`: A board position
//! - `Square`: Name plus `SquareKind` (property, company, special)
//! - `Landing`: What landing on a square means for the visitor
//! - `Board`: The ordered squares, with wraparound movement
//!
//! Index 0 is the start square. Movement wraps modulo the board length.

mod layout;
mod square;

pub use layout::standard_board;
pub use square::{Company, Landing, Property, SpecialSquare, Square, SquareId, SquareKind};

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::core::{GameError, PlayerId};

/// Ordered, fixed-size ring of squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Build a board. Needs at least two squares and at most 256.
    pub fn new(squares: Vec<Square>) -> Result<Self, GameError> {
        if squares.len() < 2 {
            return Err(GameError::BoardTooSmall(squares.len()));
        }
        if squares.len() > usize::from(u8::MAX) + 1 {
            return Err(GameError::BoardTooLarge(squares.len()));
        }
        Ok(Self { squares })
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Boards always hold at least two squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The square at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is off the board. Positions produced by `advance`
    /// are always on the board.
    #[must_use]
    pub fn square(&self, id: SquareId) -> &Square {
        assert!(
            id.index() < self.squares.len(),
            "{id} is off a board of {} squares",
            self.squares.len()
        );
        &self.squares[id.index()]
    }

    /// Mutable access to the square at `id`. Same precondition as `square`.
    pub fn square_mut(&mut self, id: SquareId) -> &mut Square {
        assert!(
            id.index() < self.squares.len(),
            "{id} is off a board of {} squares",
            self.squares.len()
        );
        &mut self.squares[id.index()]
    }

    /// The square at `id`, or `None` if off the board.
    #[must_use]
    pub fn get(&self, id: SquareId) -> Option<&Square> {
        self.squares.get(id.index())
    }

    /// Move `steps` forward from `from`.
    ///
    /// Returns the new position and whether the move wrapped past the start
    /// square (new position strictly below the old one).
    #[must_use]
    pub fn advance(&self, from: SquareId, steps: u8) -> (SquareId, bool) {
        let to = (from.index() + usize::from(steps)) % self.squares.len();
        // `new` caps the length at 256, so every index fits in a u8.
        let to = SquareId(to as u8);
        (to, to < from)
    }

    /// Owner of the square at `id`, if any.
    #[must_use]
    pub fn owner_of(&self, id: SquareId) -> Option<PlayerId> {
        self.get(id).and_then(Square::owner)
    }

    /// Iterate over (SquareId, &Square) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (SquareId, &Square)> {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, square)| (SquareId(i as u8), square))
    }
}

impl Index<SquareId> for Board {
    type Output = Square;

    fn index(&self, id: SquareId) -> &Self::Output {
        self.square(id)
    }
}
