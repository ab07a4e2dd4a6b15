//! Game event types.

use serde::{Deserialize, Serialize};

use crate::board::SquareId;
use crate::core::{Money, PlayerId};
use crate::effects::EffectOutcome;
use crate::rules::GameResult;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player's turn began.
    TurnStarted { round: u32, player: PlayerId },

    /// Dice were rolled, for movement or for a company fee.
    DiceRolled { player: PlayerId, roll: u8 },

    /// A player moved.
    Moved { player: PlayerId, from: SquareId, to: SquareId },

    /// A move wrapped past the start square and paid the bonus.
    PassedStart { player: PlayerId, bonus: Money },

    /// A player arrived on a square.
    Landed { player: PlayerId, square: SquareId },

    /// A purchase went through.
    Purchased { player: PlayerId, square: SquareId, price: Money },

    /// The player turned the offer down.
    PurchaseDeclined { player: PlayerId, square: SquareId },

    /// The player wanted to buy but could not afford it.
    InsufficientFunds { player: PlayerId, square: SquareId, price: Money },

    /// The player already owns the square.
    AlreadyOwned { player: PlayerId, square: SquareId },

    /// Rent or a company fee moved from payer to owner.
    RentPaid { payer: PlayerId, owner: PlayerId, square: SquareId, amount: Money },

    /// The payer could not cover rent and is now bankrupt.
    PaymentFailed { payer: PlayerId, owner: PlayerId, square: SquareId, amount: Money },

    /// A special square's effect fired.
    EffectApplied { player: PlayerId, square: SquareId, outcome: EffectOutcome },

    /// A player with a negative balance left the game.
    Bankrupt { player: PlayerId, balance: Money },

    /// The game ended.
    GameOver { result: GameResult },
}

impl GameEvent {
    /// The player the event is mostly about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Self::TurnStarted { player, .. }
            | Self::DiceRolled { player, .. }
            | Self::Moved { player, .. }
            | Self::PassedStart { player, .. }
            | Self::Landed { player, .. }
            | Self::Purchased { player, .. }
            | Self::PurchaseDeclined { player, .. }
            | Self::InsufficientFunds { player, .. }
            | Self::AlreadyOwned { player, .. }
            | Self::EffectApplied { player, .. }
            | Self::Bankrupt { player, .. } => Some(*player),
            Self::RentPaid { payer, .. } | Self::PaymentFailed { payer, .. } => Some(*payer),
            Self::GameOver { result } => result.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_player() {
        let event = GameEvent::RentPaid {
            payer: PlayerId(1),
            owner: PlayerId(0),
            square: SquareId(0),
            amount: 50,
        };
        assert_eq!(event.player(), Some(PlayerId(1)));

        let over = GameEvent::GameOver { result: GameResult::NoWinner };
        assert_eq!(over.player(), None);
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::Purchased {
            player: PlayerId(0),
            square: SquareId(3),
            price: 180,
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, back);
    }
}
