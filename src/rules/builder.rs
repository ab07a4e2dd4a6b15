//! Builder for creating a `Game`.

use tracing::{debug, info};

use super::engine::Game;
use crate::board::{standard_board, Board};
use crate::core::{
    Console, Dice, EntropyDice, GameConfig, GameError, Money, Player, PlayerMap, SeededDice,
};

/// Builder for creating a `Game`.
///
/// ```
/// use monopoly_engine::core::{ScriptedConsole, ScriptedDice};
/// use monopoly_engine::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("Ana")
///     .player("Bia")
///     .starting_balance(1000)
///     .build(ScriptedDice::new([7]).unwrap(), ScriptedConsole::always(""))
///     .unwrap();
///
/// assert_eq!(game.roster().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    board: Option<Board>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one player at the end of the turn order.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.config.player_names.push(name.into());
        self
    }

    /// Add several players, in turn order.
    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.config
            .player_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn starting_balance(mut self, balance: Money) -> Self {
        self.config.starting_balance = balance;
        self
    }

    pub fn pass_start_bonus(mut self, bonus: Money) -> Self {
        self.config.pass_start_bonus = bonus;
        self
    }

    /// Seed the dice picked by `build_seeded`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Play on `board` instead of the standard board.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build with dice taken from the configuration: `SeededDice` when a
    /// seed is set, `EntropyDice` otherwise.
    pub fn build_seeded<C: Console>(
        self,
        console: C,
    ) -> Result<Game<Box<dyn Dice>, C>, GameError> {
        let dice: Box<dyn Dice> = match self.config.seed {
            Some(seed) => Box::new(SeededDice::new(seed)),
            None => {
                let dice = EntropyDice::new();
                info!(seed = dice.seed(), "dice seeded from entropy");
                Box::new(dice)
            }
        };
        self.build(dice, console)
    }

    /// Validate the configuration and build the game with `dice`.
    ///
    /// `GameConfig::seed` is ignored here; see `build_seeded`.
    pub fn build<D: Dice, C: Console>(self, dice: D, console: C) -> Result<Game<D, C>, GameError> {
        self.config.validate()?;

        let board = self.board.unwrap_or_else(standard_board);
        let balance = self.config.starting_balance;
        let players = PlayerMap::from_vec(
            self.config
                .player_names
                .iter()
                .map(|name| Player::new(name.as_str(), balance))
                .collect(),
        );

        debug!(
            players = players.player_count(),
            squares = board.len(),
            starting_balance = balance,
            "game built"
        );
        Ok(Game::from_parts(self.config, board, players, dice, console))
    }
}
