//! Game rules: the turn engine and landing resolution.
//!
//! - `Game`: owns the board, players, dice, and console; plays rounds
//! - `GameBuilder`: validates configuration and builds a `Game`
//! - `GameResult`: winner or no winner
//!
//! Landing resolution lives in `landing` as further `Game` methods.

pub mod builder;
pub mod engine;
mod landing;

pub use builder::GameBuilder;
pub use engine::{Game, GameResult, ROLL_PROMPT};
