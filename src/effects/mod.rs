//! Effects and rent strategies attached to squares.
//!
//! - `SpecialEffect`: what a special square does to the player landing on it
//! - `RentStrategy`: how a company turns a dice roll into a fee

mod effect;
mod rent;

pub use effect::{EffectOutcome, SpecialEffect};
pub use rent::RentStrategy;
