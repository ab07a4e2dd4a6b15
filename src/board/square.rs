//! Squares and their landing behaviour.
//!
//! A `Square` is one board position. Purchasable squares (properties and
//! companies) remember their owner as a plain `PlayerId`; the owning side of
//! that relation is the player's `Portfolio`.
//!
//! `Square::on_land` decides what a landing means for the visiting player.
//! The turn engine carries the decision out, since it needs the dice, the
//! console, and both players' portfolios.

use serde::{Deserialize, Serialize};

use crate::core::{Money, PlayerId};
use crate::effects::{RentStrategy, SpecialEffect};

/// A board position, 0-based. Position 0 is the start square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquareId(pub u8);

impl SquareId {
    /// The start square.
    pub const START: SquareId = SquareId(0);

    /// Create a new square ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw position (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SquareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

/// A street: bought once, then charges a fixed rent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub price: Money,
    pub rent: Money,
    owner: Option<PlayerId>,
}

/// A company: bought once, then charges a fee computed from a fresh roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub price: Money,
    pub strategy: RentStrategy,
    owner: Option<PlayerId>,
}

/// A square that cannot be bought, optionally carrying an effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSquare {
    pub effect: Option<SpecialEffect>,
}

/// The three kinds of square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    Property(Property),
    Company(Company),
    Special(SpecialSquare),
}

/// One board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    pub name: String,
    pub kind: SquareKind,
}

/// What landing on a square means for the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// Unowned and purchasable: offer it for `price`.
    OfferPurchase { price: Money },
    /// The visitor already owns it.
    OwnedByVisitor,
    /// Owned by someone else: pay a fixed rent.
    PayRent { owner: PlayerId, rent: Money },
    /// Owned by someone else: roll again and pay what the strategy says.
    PayCompanyFee { owner: PlayerId, strategy: RentStrategy },
    /// A special square's effect.
    TriggerEffect(SpecialEffect),
    /// Nothing beyond the arrival notice.
    Nothing,
}

impl Square {
    /// A property with a fixed rent.
    pub fn property(name: impl Into<String>, price: Money, rent: Money) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Property(Property {
                price,
                rent,
                owner: None,
            }),
        }
    }

    /// A company charging according to `strategy`.
    pub fn company(name: impl Into<String>, price: Money, strategy: RentStrategy) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Company(Company {
                price,
                strategy,
                owner: None,
            }),
        }
    }

    /// A special square carrying `effect`.
    pub fn special(name: impl Into<String>, effect: SpecialEffect) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Special(SpecialSquare {
                effect: Some(effect),
            }),
        }
    }

    /// A special square with no effect.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SquareKind::Special(SpecialSquare { effect: None }),
        }
    }

    /// Can this square be bought at all?
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        !matches!(self.kind, SquareKind::Special(_))
    }

    /// Purchase price, for properties and companies.
    #[must_use]
    pub fn purchase_price(&self) -> Option<Money> {
        match &self.kind {
            SquareKind::Property(p) => Some(p.price),
            SquareKind::Company(c) => Some(c.price),
            SquareKind::Special(_) => None,
        }
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match &self.kind {
            SquareKind::Property(p) => p.owner,
            SquareKind::Company(c) => c.owner,
            SquareKind::Special(_) => None,
        }
    }

    /// Record `buyer` as owner. Only succeeds on an unowned purchasable
    /// square; the engine calls this after the buyer has paid.
    pub(crate) fn assign_owner(&mut self, buyer: PlayerId) -> bool {
        let slot = match &mut self.kind {
            SquareKind::Property(p) => &mut p.owner,
            SquareKind::Company(c) => &mut c.owner,
            SquareKind::Special(_) => return false,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(buyer);
        true
    }

    /// Decide what landing here means for `visitor`.
    #[must_use]
    pub fn on_land(&self, visitor: PlayerId) -> Landing {
        match &self.kind {
            SquareKind::Property(p) => match p.owner {
                None => Landing::OfferPurchase { price: p.price },
                Some(owner) if owner == visitor => Landing::OwnedByVisitor,
                Some(owner) => Landing::PayRent { owner, rent: p.rent },
            },
            SquareKind::Company(c) => match c.owner {
                None => Landing::OfferPurchase { price: c.price },
                Some(owner) if owner == visitor => Landing::OwnedByVisitor,
                Some(owner) => Landing::PayCompanyFee {
                    owner,
                    strategy: c.strategy,
                },
            },
            SquareKind::Special(s) => match s.effect {
                Some(effect) => Landing::TriggerEffect(effect),
                None => Landing::Nothing,
            },
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANA: PlayerId = PlayerId(0);
    const BIA: PlayerId = PlayerId(1);

    #[test]
    fn test_unowned_property_offers_purchase() {
        let square = Square::property("Avenida Principal", 200, 50);

        assert!(square.is_purchasable());
        assert_eq!(square.purchase_price(), Some(200));
        assert_eq!(square.owner(), None);
        assert_eq!(square.on_land(ANA), Landing::OfferPurchase { price: 200 });
    }

    #[test]
    fn test_owned_property_landings() {
        let mut square = Square::property("Avenida Principal", 200, 50);
        assert!(square.assign_owner(ANA));

        assert_eq!(square.on_land(ANA), Landing::OwnedByVisitor);
        assert_eq!(square.on_land(BIA), Landing::PayRent { owner: ANA, rent: 50 });
    }

    #[test]
    fn test_owner_is_never_replaced() {
        let mut square = Square::company("Companhia de Gás", 150, RentStrategy::fixed(35));

        assert!(square.assign_owner(ANA));
        assert!(!square.assign_owner(BIA));
        assert_eq!(square.owner(), Some(ANA));
    }

    #[test]
    fn test_company_landing_carries_strategy() {
        let mut square = Square::company("Companhia de Água", 150, RentStrategy::proportional(10));
        assert_eq!(square.on_land(BIA), Landing::OfferPurchase { price: 150 });

        square.assign_owner(ANA);
        assert_eq!(
            square.on_land(BIA),
            Landing::PayCompanyFee {
                owner: ANA,
                strategy: RentStrategy::proportional(10)
            }
        );
    }

    #[test]
    fn test_special_squares() {
        let lucky = Square::special("Sorte ou Revés", SpecialEffect::grant(50));
        assert_eq!(lucky.on_land(ANA), Landing::TriggerEffect(SpecialEffect::GrantMoney(50)));

        let mut start = Square::plain("Ponto de Partida");
        assert_eq!(start.on_land(ANA), Landing::Nothing);
        assert!(!start.is_purchasable());
        assert_eq!(start.purchase_price(), None);
        assert!(!start.assign_owner(ANA));
        assert_eq!(start.owner(), None);
    }
}
