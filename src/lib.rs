//! # monopoly-engine
//!
//! A turn-based property-trading board game for two or more players,
//! played over a line-based text console.
//!
//! ## Design Principles
//!
//! 1. **Collaborators at the edges**: dice and console are traits, so a
//!    seeded or scripted implementation can replace the interactive ones.
//!
//! 2. **Money failures are outcomes, not errors**: a payment that cannot be
//!    covered returns `false`; the engine turns it into a bankruptcy.
//!
//! 3. **One owner per asset**: a player's `Portfolio` owns the assets; a
//!    square only remembers its owner's `PlayerId`.
//!
//! ## Modules
//!
//! - `core`: Money, players, portfolios, dice, console, configuration, errors
//! - `board`: Squares, landing decisions, the board ring and standard layout
//! - `effects`: Special square effects and company rent strategies
//! - `rules`: Turn engine, landing resolution, game builder
//! - `events`: Game events and observers

pub mod board;
pub mod core;
pub mod effects;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Console, Dice, EntropyDice, GameConfig, GameError, Money, Player, PlayerId, PlayerMap,
    Portfolio, ScriptedConsole, ScriptedDice, SeededDice, StdConsole,
};

pub use crate::board::{standard_board, Board, Landing, Square, SquareId, SquareKind};

pub use crate::effects::{EffectOutcome, RentStrategy, SpecialEffect};

pub use crate::events::{EventLog, GameEvent, GameObserver, SharedEventLog};

pub use crate::rules::{Game, GameBuilder, GameResult};
