//! Rent strategies for companies.
//!
//! A company's fee is computed from a fresh dice roll at the moment the
//! visitor pays. Both strategies are pure and total over every roll.

use serde::{Deserialize, Serialize};

use crate::core::Money;

/// How a company turns a dice roll into a fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentStrategy {
    /// The same fee whatever the roll.
    Fixed(Money),
    /// `roll * multiplier`.
    Proportional(Money),
}

impl RentStrategy {
    /// Fixed fee strategy.
    #[must_use]
    pub const fn fixed(fee: Money) -> Self {
        Self::Fixed(fee)
    }

    /// Fee proportional to the roll.
    #[must_use]
    pub const fn proportional(multiplier: Money) -> Self {
        Self::Proportional(multiplier)
    }

    /// Fee owed for `roll`. Negative configured amounts are treated as zero.
    #[must_use]
    pub fn compute_rent(&self, roll: u8) -> Money {
        let fee = match *self {
            Self::Fixed(fee) => fee,
            Self::Proportional(multiplier) => Money::from(roll) * multiplier,
        };
        fee.max(0)
    }

    /// Whether the fee depends on the roll.
    #[must_use]
    pub fn uses_roll(&self) -> bool {
        matches!(self, Self::Proportional(_))
    }
}

impl std::fmt::Display for RentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(fee) => write!(f, "fixed fee {fee}"),
            Self::Proportional(multiplier) => write!(f, "{multiplier} x dice"),
        }
    }
}
