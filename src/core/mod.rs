//! Core types: money, players, portfolios, configuration, errors, and the
//! two collaborators the turn engine talks to (dice and console).

pub mod config;
pub mod console;
pub mod dice;
pub mod error;
pub mod money;
pub mod player;
pub mod portfolio;
pub mod rng;

pub use config::{GameConfig, DEFAULT_PASS_START_BONUS, DEFAULT_STARTING_BALANCE};
pub use console::{is_affirmative, Console, ScriptedConsole, StdConsole};
pub use dice::{Dice, EntropyDice, ScriptedDice, SeededDice, MAX_ROLL, MIN_ROLL};
pub use error::GameError;
pub use money::{format_money, Money};
pub use player::{Player, PlayerId, PlayerMap};
pub use portfolio::Portfolio;
pub use rng::GameRng;
