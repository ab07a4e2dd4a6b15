//! Special square effects.
//!
//! Effects fire when a player lands on a special square. They never fail:
//! a penalty larger than the balance simply leaves the player bankrupt for
//! the purge phase to collect.

use serde::{Deserialize, Serialize};

use crate::board::{Board, SquareId};
use crate::core::{Money, Player};

/// An action attached to a special square.
///
/// ## Cash Effects
///
/// - `GrantMoney`: credit a fixed amount
/// - `Penalty`: debit a fixed amount, even below zero
///
/// ## Movement Effects
///
/// - `Advance`: move forward without resolving the new square
///
/// ## Placeholders
///
/// - `JailVisit`: nothing happens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEffect {
    GrantMoney(Money),
    Penalty(Money),
    Advance(u8),
    JailVisit,
}

/// What an effect did to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    Credited(Money),
    Debited(Money),
    Moved { to: SquareId, passed_start: bool },
    Nothing,
}

impl SpecialEffect {
    /// Create a grant money effect.
    pub fn grant(amount: Money) -> Self {
        Self::GrantMoney(amount)
    }

    /// Create a penalty effect.
    pub fn penalty(amount: Money) -> Self {
        Self::Penalty(amount)
    }

    /// Create an advance effect.
    pub fn advance(steps: u8) -> Self {
        Self::Advance(steps)
    }

    /// Apply the effect to `player`.
    ///
    /// `pass_start_bonus` is credited when an `Advance` wraps past the
    /// start square, the same as ordinary movement.
    pub fn apply(
        &self,
        player: &mut Player,
        board: &Board,
        pass_start_bonus: Money,
    ) -> EffectOutcome {
        match *self {
            Self::GrantMoney(amount) => {
                player.credit(amount);
                EffectOutcome::Credited(amount)
            }
            Self::Penalty(amount) => {
                player.force_debit(amount);
                EffectOutcome::Debited(amount)
            }
            Self::Advance(steps) => {
                let (to, passed_start) = board.advance(player.position, steps);
                player.position = to;
                if passed_start {
                    player.credit(pass_start_bonus);
                }
                EffectOutcome::Moved { to, passed_start }
            }
            Self::JailVisit => EffectOutcome::Nothing,
        }
    }

    /// Short description for the console.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::GrantMoney(amount) => format!("receives ${amount}"),
            Self::Penalty(amount) => format!("pays a ${amount} penalty"),
            Self::Advance(steps) => format!("advances {steps} square(s)"),
            Self::JailVisit => "is just visiting".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::standard_board;

    #[test]
    fn test_grant_money() {
        let board = standard_board();
        let mut player = Player::new("Ana", 1500);

        let outcome = SpecialEffect::grant(50).apply(&mut player, &board, 100);

        assert_eq!(outcome, EffectOutcome::Credited(50));
        assert_eq!(player.balance(), 1550);
    }

    #[test]
    fn test_penalty_can_bankrupt() {
        let board = standard_board();
        let mut player = Player::new("Ana", 30);

        let outcome = SpecialEffect::penalty(50).apply(&mut player, &board, 100);

        assert_eq!(outcome, EffectOutcome::Debited(50));
        assert_eq!(player.balance(), -20);
        assert!(player.is_bankrupt());
    }

    #[test]
    fn test_advance_without_wrap() {
        let board = standard_board();
        let mut player = Player::new("Ana", 1500);
        player.position = SquareId(2);

        let outcome = SpecialEffect::advance(3).apply(&mut player, &board, 100);

        assert_eq!(outcome, EffectOutcome::Moved { to: SquareId(5), passed_start: false });
        assert_eq!(player.position, SquareId(5));
        assert_eq!(player.balance(), 1500);
    }

    #[test]
    fn test_advance_wrap_pays_bonus() {
        let board = standard_board();
        let mut player = Player::new("Ana", 1500);
        player.position = SquareId(8);

        let outcome = SpecialEffect::advance(4).apply(&mut player, &board, 100);

        assert_eq!(outcome, EffectOutcome::Moved { to: SquareId(2), passed_start: true });
        assert_eq!(player.balance(), 1600);
    }

    #[test]
    fn test_jail_visit_is_noop() {
        let board = standard_board();
        let mut player = Player::new("Ana", 1500);
        let before = player.clone();

        let outcome = SpecialEffect::JailVisit.apply(&mut player, &board, 100);

        assert_eq!(outcome, EffectOutcome::Nothing);
        assert_eq!(player, before);
    }
}
