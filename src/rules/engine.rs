//! The turn engine.
//!
//! `Game` owns the board, the players, and the two collaborators (dice and
//! console). One call to `play_round` is one player's turn:
//!
//! 1. Show the turn banner and wait for the acknowledgement prompt
//! 2. Roll and move, crediting the pass-start bonus on wraparound
//! 3. Resolve the landing (see `rules::landing`)
//! 4. Pass the turn to the next active player
//! 5. Purge every player whose balance went negative
//!
//! The game is over once at most one player is left on the roster.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::board::{Board, SquareId};
use crate::core::{
    format_money, Console, Dice, GameConfig, GameError, Money, Player, PlayerId, PlayerMap,
};
use crate::events::{GameEvent, GameObserver};

/// Prompt shown before every roll.
pub const ROLL_PROMPT: &str = "Press ENTER to roll the dice...";

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The last solvent player standing.
    Winner(PlayerId),
    /// Nobody solvent is left.
    NoWinner,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        *self == GameResult::Winner(player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::NoWinner => None,
        }
    }
}

/// A game in progress.
///
/// Built with `GameBuilder`. Every player keeps their `PlayerMap` entry for
/// the whole game; bankruptcy only removes them from the active roster.
pub struct Game<D: Dice, C: Console> {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) players: PlayerMap<Player>,
    roster: SmallVec<[PlayerId; 8]>,
    current: usize,
    round: u32,
    pub(crate) dice: D,
    pub(crate) console: C,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<D: Dice, C: Console> Game<D, C> {
    pub(crate) fn from_parts(
        config: GameConfig,
        board: Board,
        players: PlayerMap<Player>,
        dice: D,
        console: C,
    ) -> Self {
        let roster = players.player_ids().collect();
        Self {
            config,
            board,
            players,
            roster,
            current: 0,
            round: 0,
            dice,
            console,
            observers: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every player, including bankrupt ones.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Players still in the game, in turn order.
    #[must_use]
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Whose turn is next, if anyone is left.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.roster.get(self.current).copied()
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Sum of every player's cash, bankrupt players included.
    #[must_use]
    pub fn total_money(&self) -> Money {
        self.players.iter().map(|(_, p)| p.balance()).sum()
    }

    /// Register an observer. Observers see events in registration order.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        debug!(?event, "game event");
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    pub(crate) fn name(&self, id: PlayerId) -> &str {
        &self.players[id].name
    }

    // === Turn Steps ===

    /// Roll the dice on behalf of `player`.
    pub fn roll_dice(&mut self, player: PlayerId) -> u8 {
        let roll = self.dice.roll();
        debug!(player = %self.name(player), roll, "dice rolled");
        self.emit(GameEvent::DiceRolled { player, roll });
        roll
    }

    /// Move `player` forward by `roll`, paying the pass-start bonus when the
    /// new position is lower than the old one. Returns the new position.
    pub fn move_player(&mut self, player: PlayerId, roll: u8) -> SquareId {
        let from = self.players[player].position;
        let (to, passed_start) = self.board.advance(from, roll);
        self.players[player].position = to;
        self.emit(GameEvent::Moved { player, from, to });

        if passed_start {
            let bonus = self.config.pass_start_bonus;
            self.players[player].credit(bonus);
            let name = self.name(player).to_string();
            info!(player = %name, bonus, "passed start");
            self.console.say(&format!(
                "{name} passed the start square and received {}.",
                format_money(bonus)
            ));
            self.emit(GameEvent::PassedStart { player, bonus });
        }

        to
    }

    /// Hand the turn to the next player on the roster.
    pub fn advance_turn(&mut self) {
        if !self.roster.is_empty() {
            self.current = (self.current + 1) % self.roster.len();
        }
    }

    /// Remove every player with a negative balance from the roster.
    ///
    /// Stops as soon as a single player is left. The turn index is left
    /// alone unless it falls off the end of the roster, in which case it
    /// wraps to 0.
    pub fn purge_bankrupt(&mut self) -> Vec<PlayerId> {
        let mut removed = Vec::new();
        let mut idx = 0;

        while idx < self.roster.len() {
            if self.roster.len() <= 1 {
                break;
            }

            let id = self.roster[idx];
            if !self.players[id].is_bankrupt() {
                idx += 1;
                continue;
            }

            self.roster.remove(idx);
            if self.current >= self.roster.len() {
                self.current = 0;
            }

            let balance = self.players[id].balance();
            let net_worth = self.players[id].portfolio.net_worth(&self.board);
            let name = self.name(id).to_string();
            info!(player = %name, balance, net_worth, "player bankrupt");
            self.console
                .say(&format!("\n{name} went bankrupt and is out of the game!"));
            self.emit(GameEvent::Bankrupt { player: id, balance });
            removed.push(id);
        }

        removed
    }

    /// Play one turn for the current player.
    ///
    /// Does nothing once the game is over. Fails only if the console closes
    /// at the acknowledgement prompt.
    pub fn play_round(&mut self) -> Result<(), GameError> {
        let Some(player) = self.current_player().filter(|_| !self.is_game_over()) else {
            return Ok(());
        };

        let name = self.name(player).to_string();
        let summary = self.players[player].portfolio.summary(&self.board);
        self.console.say(&format!("\n{name}'s turn!"));
        self.console.say(&format!("--- {name}'s portfolio ---\n{summary}"));
        if self.console.ask(ROLL_PROMPT).is_none() {
            return Err(GameError::InputClosed);
        }

        self.round += 1;
        let round = self.round;
        self.emit(GameEvent::TurnStarted { round, player });

        let roll = self.roll_dice(player);
        self.console.say(&format!("{name} rolled {roll}."));

        let to = self.move_player(player, roll);
        info!(round, player = %name, roll, position = to.0, "turn played");
        self.resolve_landing(player, to);

        self.advance_turn();
        self.purge_bankrupt();
        Ok(())
    }

    // === Game End ===

    /// At most one player left on the roster.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.roster.len() <= 1
    }

    /// The sole remaining solvent player, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_game_over() {
            return None;
        }
        self.roster
            .iter()
            .copied()
            .find(|&id| self.players[id].balance() >= 0)
    }

    /// `Some(result)` once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        Some(self.winner().map_or(GameResult::NoWinner, GameResult::Winner))
    }

    /// Play rounds until the game is over, then announce the result.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        info!(players = self.roster.len(), squares = self.board.len(), "game started");
        self.console.say("The game has started!");

        while !self.is_game_over() {
            self.play_round()?;
        }

        let result = self.winner().map_or(GameResult::NoWinner, GameResult::Winner);
        match result {
            GameResult::Winner(id) => {
                let name = self.name(id).to_string();
                self.console
                    .say(&format!("Congratulations, {name}! You won the game!"));
            }
            GameResult::NoWinner => self.console.say("The game ended with no winner."),
        }
        info!(?result, rounds = self.round, "game over");
        self.emit(GameEvent::GameOver { result });

        Ok(result)
    }
}

impl<D: Dice, C: Console> std::fmt::Debug for Game<D, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("round", &self.round)
            .field("roster", &self.roster)
            .field("current", &self.current)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}
