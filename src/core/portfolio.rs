//! A player's cash and owned assets.
//!
//! The portfolio is the owning side of every asset relation: it records the
//! board positions of the properties and companies its player bought. The
//! squares themselves only keep a lookup-only `owner` id.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::Write as _;

use super::money::{format_money, Money};
use crate::board::{Board, SquareId};

/// Balance plus owned properties and companies, in purchase order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    balance: Money,
    properties: SmallVec<[SquareId; 8]>,
    companies: SmallVec<[SquareId; 4]>,
}

impl Portfolio {
    /// Create an empty portfolio holding `balance` in cash.
    #[must_use]
    pub fn new(balance: Money) -> Self {
        Self {
            balance,
            properties: SmallVec::new(),
            companies: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Owned properties, oldest purchase first.
    #[must_use]
    pub fn properties(&self) -> &[SquareId] {
        &self.properties
    }

    /// Owned companies, oldest purchase first.
    #[must_use]
    pub fn companies(&self) -> &[SquareId] {
        &self.companies
    }

    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Atomic debit: either the whole amount leaves the balance or nothing does.
    #[must_use]
    pub fn withdraw(&mut self, amount: Money) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    /// Unconditional debit. The balance may become negative.
    pub fn charge(&mut self, amount: Money) {
        self.balance -= amount;
    }

    pub fn add_property(&mut self, square: SquareId) {
        self.properties.push(square);
    }

    pub fn add_company(&mut self, square: SquareId) {
        self.companies.push(square);
    }

    /// Does this portfolio hold the asset at `square`?
    #[must_use]
    pub fn owns(&self, square: SquareId) -> bool {
        self.properties.contains(&square) || self.companies.contains(&square)
    }

    /// Cash plus the purchase price of every owned asset.
    #[must_use]
    pub fn net_worth(&self, board: &Board) -> Money {
        let assets: Money = self
            .properties
            .iter()
            .chain(self.companies.iter())
            .filter_map(|&id| board.get(id))
            .filter_map(|square| square.purchase_price())
            .sum();
        self.balance + assets
    }

    /// Multi-line text shown at the start of a player's turn.
    #[must_use]
    pub fn summary(&self, board: &Board) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Balance: {}", format_money(self.balance));

        let sections: [(&str, &[SquareId], &str); 2] = [
            ("Properties:", self.properties.as_slice(), "  No properties."),
            ("Companies:", self.companies.as_slice(), "  No companies."),
        ];
        for (title, assets, empty) in sections {
            let _ = writeln!(out, "{title}");
            if assets.is_empty() {
                let _ = writeln!(out, "{empty}");
            }
            for &id in assets {
                if let Some(square) = board.get(id) {
                    let _ = writeln!(out, "  - {}", square.name);
                }
            }
        }

        out.truncate(out.trim_end().len());
        out
    }
}
