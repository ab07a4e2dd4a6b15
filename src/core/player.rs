//! Player identification, per-player storage, and the player record.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! The map is fixed at game setup; bankrupt players keep their entry
//! (they only leave the active roster).
//!
//! ## Player
//!
//! A named participant with a board position and a `Portfolio`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::money::Money;
use super::portfolio::Portfolio;
use crate::board::SquareId;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use monopoly_engine::core::{PlayerId, PlayerMap};
///
/// let mut cash: PlayerMap<i64> = PlayerMap::new(2, |_| 1500);
/// cash[PlayerId::new(1)] -= 200;
/// assert_eq!(cash[PlayerId::new(1)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Build a PlayerMap from already constructed values, in player order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A participant in the game.
///
/// Every player starts on the start square (position 0). The position is
/// only changed by the turn engine and by movement effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a game.
    pub name: String,
    /// Current board position.
    pub position: SquareId,
    /// Cash and owned assets.
    pub portfolio: Portfolio,
}

impl Player {
    /// Create a player on the start square with the given starting cash.
    pub fn new(name: impl Into<String>, starting_balance: Money) -> Self {
        Self {
            name: name.into(),
            position: SquareId::START,
            portfolio: Portfolio::new(starting_balance),
        }
    }

    /// Current cash balance.
    #[must_use]
    pub fn balance(&self) -> Money {
        self.portfolio.balance()
    }

    /// Receive money unconditionally.
    pub fn credit(&mut self, amount: Money) {
        self.portfolio.deposit(amount);
    }

    /// Try to pay `amount`. Returns `false` (and changes nothing) when the
    /// balance does not cover it.
    #[must_use = "a failed payment must be handled by the caller"]
    pub fn pay(&mut self, amount: Money) -> bool {
        self.portfolio.withdraw(amount)
    }

    /// Debit `amount` even if the balance goes negative.
    pub fn force_debit(&mut self, amount: Money) {
        self.portfolio.charge(amount);
    }

    /// A negative balance marks the player for removal at the next purge.
    #[must_use]
    pub fn is_bankrupt(&self) -> bool {
        self.balance() < 0
    }
}
