//! The dice collaborator.
//!
//! The turn engine only sees the `Dice` trait, so a seeded or scripted
//! implementation can stand in for the non-deterministic one.

use std::collections::VecDeque;

use super::error::GameError;
use super::rng::{GameRng, DIE_FACES};

/// Smallest total two dice can show.
pub const MIN_ROLL: u8 = 2;
/// Largest total two dice can show.
pub const MAX_ROLL: u8 = 2 * DIE_FACES;

/// Source of two-dice totals in `MIN_ROLL..=MAX_ROLL`.
pub trait Dice {
    /// Roll two six-sided dice and return their sum.
    fn roll(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Reproducible dice: the same seed gives the same game.
#[derive(Clone, Debug)]
pub struct SeededDice {
    rng: GameRng,
}

impl SeededDice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die() + self.rng.roll_die()
    }
}

/// Dice seeded from OS entropy. This is what a normal session uses.
#[derive(Clone, Debug)]
pub struct EntropyDice {
    rng: GameRng,
}

impl EntropyDice {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Seed picked at construction, worth logging so a session can be replayed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for EntropyDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for EntropyDice {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die() + self.rng.roll_die()
    }
}

/// Replays a fixed list of totals, then panics when it runs dry.
///
/// Meant for tests and demos where every roll must be known up front.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    /// Queue `rolls` in order. Every value must be a possible two-dice total.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Result<Self, GameError> {
        let rolls: VecDeque<u8> = rolls.into_iter().collect();
        if let Some(&bad) = rolls.iter().find(|r| !(MIN_ROLL..=MAX_ROLL).contains(*r)) {
            return Err(GameError::InvalidRoll(bad));
        }
        Ok(Self { rolls })
    }

    /// Rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.rolls.pop_front().expect("ScriptedDice ran out of rolls")
    }
}
