//! Game configuration.
//!
//! Everything fixed at startup lives here: who plays, how much cash they
//! start with, and the pass-start bonus. The board layout is configured
//! separately (see `board::standard_board`).

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::money::Money;

/// Cash each player starts with.
pub const DEFAULT_STARTING_BALANCE: Money = 1500;

/// Credit for moving past the start square.
pub const DEFAULT_PASS_START_BONUS: Money = 100;

/// Fewest players a game may start with.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Startup configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player names, in turn order.
    pub player_names: Vec<String>,

    /// Cash each player starts with.
    pub starting_balance: Money,

    /// Credit for wrapping past the start square.
    pub pass_start_bonus: Money,

    /// Fewest players needed to start.
    pub min_players: usize,

    /// Dice seed for `GameBuilder::build_seeded`. `None` means
    /// non-deterministic dice.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: Vec::new(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            pass_start_bonus: DEFAULT_PASS_START_BONUS,
            min_players: DEFAULT_MIN_PLAYERS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Two players named "Player 1" and "Player 2" with default rules.
    #[must_use]
    pub fn two_player() -> Self {
        Self {
            player_names: vec!["Player 1".to_string(), "Player 2".to_string()],
            ..Self::default()
        }
    }

    /// Check the roster before a game is built.
    pub fn validate(&self) -> Result<(), GameError> {
        let found = self.player_names.len();
        if found < self.min_players.max(1) {
            return Err(GameError::NotEnoughPlayers {
                found,
                min: self.min_players.max(1),
            });
        }
        if found > 255 {
            return Err(GameError::TooManyPlayers(found));
        }

        for (i, name) in self.player_names.iter().enumerate() {
            if self.player_names[..i].contains(name) {
                return Err(GameError::DuplicatePlayer(name.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_balance, 1500);
        assert_eq!(config.pass_start_bonus, 100);
        assert_eq!(config.min_players, 2);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_two_player_is_valid() {
        assert_eq!(GameConfig::two_player().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_single_player() {
        let config = GameConfig {
            player_names: vec!["Solo".into()],
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::NotEnoughPlayers { found: 1, min: 2 })
        );
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let config = GameConfig {
            player_names: vec!["Ana".into(), "Bia".into(), "Ana".into()],
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(GameError::DuplicatePlayer("Ana".into())));
    }

    #[test]
    fn test_rejects_too_many_players() {
        let config = GameConfig {
            player_names: (0..256).map(|i| format!("P{i}")).collect(),
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(GameError::TooManyPlayers(256)));
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let config: GameConfig =
            serde_json::from_str(r#"{"player_names": ["Ana", "Bia"], "seed": 7}"#).unwrap();

        assert_eq!(config.player_names, vec!["Ana", "Bia"]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.starting_balance, DEFAULT_STARTING_BALANCE);
        assert_eq!(config.pass_start_bonus, DEFAULT_PASS_START_BONUS);
    }
}
