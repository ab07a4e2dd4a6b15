//! Landing resolution.
//!
//! `Square::on_land` decides what a landing means; this module carries it
//! out against the game: purchase offers go through the console, rent and
//! company fees move money between portfolios, and special effects are
//! applied to the visitor.
//!
//! Payments are atomic. When the visitor cannot cover rent nothing is paid
//! to the owner and the visitor is charged the full amount, leaving a
//! negative balance for the purge phase.

use tracing::{debug, info};

use super::engine::Game;
use crate::board::{Landing, SquareId, SquareKind};
use crate::core::{format_money, is_affirmative, Console, Dice, Money, PlayerId};
use crate::effects::{EffectOutcome, RentStrategy, SpecialEffect};
use crate::events::GameEvent;

/// What a landing visitor owes the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Charge {
    /// Fixed rent on a property.
    Rent,
    /// Usage fee on a company.
    Fee,
}

impl Charge {
    fn describe(self, amount: Money) -> String {
        match self {
            Self::Rent => format!("{} in rent", format_money(amount)),
            Self::Fee => format!("a {} usage fee", format_money(amount)),
        }
    }
}

impl<D: Dice, C: Console> Game<D, C> {
    /// Resolve `player` arriving on `square`.
    pub fn resolve_landing(&mut self, player: PlayerId, square: SquareId) {
        let landing = self.board.square(square).on_land(player);
        let name = self.name(player).to_string();
        let square_name = self.board.square(square).name.clone();

        debug!(player = %name, square = %square_name, ?landing, "landing");
        self.console.say(&format!("{name} landed on {square_name}."));
        self.emit(GameEvent::Landed { player, square });

        match landing {
            Landing::OfferPurchase { price } => self.offer_purchase(player, square, price),
            Landing::OwnedByVisitor => {
                self.console
                    .say(&format!("{name} already owns {square_name}."));
                self.emit(GameEvent::AlreadyOwned { player, square });
            }
            Landing::PayRent { owner, rent } => {
                self.collect(player, owner, square, rent, Charge::Rent);
            }
            Landing::PayCompanyFee { owner, strategy } => {
                self.collect_company_fee(player, owner, square, strategy)
            }
            Landing::TriggerEffect(effect) => self.apply_effect(player, square, effect),
            Landing::Nothing => self.console.say("Nothing happens here."),
        }
    }

    /// Offer an unowned square to `player` for `price`.
    fn offer_purchase(&mut self, player: PlayerId, square: SquareId, price: Money) {
        let name = self.name(player).to_string();
        let square_name = self.board.square(square).name.clone();
        let prompt = format!(
            "Do you want to buy {square_name} for {}? (yes/no): ",
            format_money(price)
        );

        // Closed input declines; the next acknowledgement prompt ends the game.
        let accepted = self
            .console
            .ask(&prompt)
            .is_some_and(|answer| is_affirmative(&answer));
        if !accepted {
            self.emit(GameEvent::PurchaseDeclined { player, square });
            return;
        }

        if !self.players[player].pay(price) {
            self.console.say(&format!(
                "{name} does not have enough money to buy {square_name}."
            ));
            self.emit(GameEvent::InsufficientFunds { player, square, price });
            return;
        }

        let target = self.board.square_mut(square);
        let assigned = target.assign_owner(player);
        debug_assert!(assigned, "offered square {square_name} already had an owner");
        let portfolio = &mut self.players[player].portfolio;
        match target.kind {
            SquareKind::Company(_) => portfolio.add_company(square),
            _ => portfolio.add_property(square),
        }

        info!(player = %name, square = %square_name, price, "purchase");
        self.console.say(&format!("{name} bought {square_name}!"));
        self.emit(GameEvent::Purchased { player, square, price });
    }

    /// Roll again and charge whatever the company's strategy asks for.
    fn collect_company_fee(
        &mut self,
        payer: PlayerId,
        owner: PlayerId,
        square: SquareId,
        strategy: RentStrategy,
    ) {
        let roll = self.roll_dice(payer);
        let fee = strategy.compute_rent(roll);
        if strategy.uses_roll() {
            self.console
                .say(&format!("The fee roll came up {roll}: the fee is {}.", format_money(fee)));
        }
        self.collect(payer, owner, square, fee, Charge::Fee);
    }

    /// Move `amount` from `payer` to `owner`, or bankrupt the payer.
    fn collect(
        &mut self,
        payer: PlayerId,
        owner: PlayerId,
        square: SquareId,
        amount: Money,
        charge: Charge,
    ) {
        let payer_name = self.name(payer).to_string();
        let owner_name = self.name(owner).to_string();
        let what = charge.describe(amount);

        if self.players[payer].pay(amount) {
            self.players[owner].credit(amount);
            info!(payer = %payer_name, owner = %owner_name, amount, ?charge, "paid");
            self.console
                .say(&format!("{payer_name} paid {what} to {owner_name}."));
            self.emit(GameEvent::RentPaid { payer, owner, square, amount });
        } else {
            self.players[payer].force_debit(amount);
            info!(payer = %payer_name, owner = %owner_name, amount, ?charge, "unpaid");
            self.console
                .say(&format!("{payer_name} could not pay {what} and is bankrupt!"));
            self.emit(GameEvent::PaymentFailed { payer, owner, square, amount });
        }
    }

    fn apply_effect(&mut self, player: PlayerId, square: SquareId, effect: SpecialEffect) {
        let bonus = self.config.pass_start_bonus;
        let outcome = effect.apply(&mut self.players[player], &self.board, bonus);

        let name = self.name(player).to_string();
        debug!(player = %name, ?outcome, "effect applied");
        self.console.say(&format!("{name} {}.", effect.describe()));

        if let EffectOutcome::Moved { to, passed_start } = outcome {
            let to_name = self.board.square(to).name.clone();
            self.console.say(&format!("{name} is now on {to_name}."));
            if passed_start {
                self.console.say(&format!(
                    "{name} passed the start square and received {}.",
                    format_money(bonus)
                ));
                self.emit(GameEvent::PassedStart { player, bonus });
            }
        }
        self.emit(GameEvent::EffectApplied { player, square, outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{standard_board, Board, Square};
    use crate::core::{ScriptedConsole, ScriptedDice};
    use crate::rules::GameBuilder;

    const ANA: PlayerId = PlayerId(0);
    const BIA: PlayerId = PlayerId(1);

    fn game_on(
        board: Board,
        rolls: impl IntoIterator<Item = u8>,
        console: ScriptedConsole,
    ) -> Game<ScriptedDice, ScriptedConsole> {
        GameBuilder::new()
            .players(["Ana", "Bia"])
            .board(board)
            .build(ScriptedDice::new(rolls).unwrap(), console)
            .unwrap()
    }

    fn game(console: ScriptedConsole) -> Game<ScriptedDice, ScriptedConsole> {
        game_on(standard_board(), [], console)
    }

    #[test]
    fn test_accepting_offer_buys_property() {
        let mut g = game(ScriptedConsole::new(["sim"]));

        g.resolve_landing(ANA, SquareId(0));

        assert_eq!(g.player(ANA).balance(), 1300);
        assert_eq!(g.board().owner_of(SquareId(0)), Some(ANA));
        assert_eq!(g.player(ANA).portfolio.properties(), &[SquareId(0)]);
        assert!(g.console().saw("Do you want to buy Avenida Principal for $200? (yes/no): "));
        assert!(g.console().saw("Ana bought Avenida Principal!"));
    }

    #[test]
    fn test_company_purchase_goes_to_companies() {
        let mut g = game(ScriptedConsole::new(["yes"]));

        g.resolve_landing(ANA, SquareId(4));

        assert_eq!(g.player(ANA).balance(), 1350);
        assert_eq!(g.player(ANA).portfolio.companies(), &[SquareId(4)]);
        assert!(g.player(ANA).portfolio.properties().is_empty());
    }

    #[test]
    fn test_declining_offer_changes_nothing() {
        let mut g = game(ScriptedConsole::new(["não"]));

        g.resolve_landing(ANA, SquareId(0));

        assert_eq!(g.player(ANA).balance(), 1500);
        assert_eq!(g.board().owner_of(SquareId(0)), None);
    }

    #[test]
    fn test_closed_input_declines_offer() {
        let mut g = game(ScriptedConsole::new(Vec::<String>::new()));

        g.resolve_landing(ANA, SquareId(0));

        assert_eq!(g.board().owner_of(SquareId(0)), None);
    }

    #[test]
    fn test_cannot_afford_purchase() {
        let mut g = game(ScriptedConsole::new(["sim"]));
        g.players[ANA].force_debit(1400); // 100 left

        g.resolve_landing(ANA, SquareId(0));

        assert_eq!(g.player(ANA).balance(), 100);
        assert_eq!(g.board().owner_of(SquareId(0)), None);
        assert!(g.console().saw("does not have enough money"));
    }

    #[test]
    fn test_exact_balance_is_enough() {
        let mut g = game(ScriptedConsole::new(["sim"]));
        g.players[ANA].force_debit(1300); // exactly 200 left

        g.resolve_landing(ANA, SquareId(0));

        assert_eq!(g.player(ANA).balance(), 0);
        assert_eq!(g.board().owner_of(SquareId(0)), Some(ANA));
    }

    #[test]
    fn test_rent_moves_money_to_owner() {
        let mut g = game(ScriptedConsole::new(["sim"]));
        g.resolve_landing(ANA, SquareId(0));

        g.resolve_landing(BIA, SquareId(0));

        assert_eq!(g.player(BIA).balance(), 1450);
        assert_eq!(g.player(ANA).balance(), 1350);
        assert_eq!(g.total_money(), 3000 - 200);
        assert!(g.console().saw("Bia paid $50 in rent to Ana."));
    }

    #[test]
    fn test_failed_rent_bankrupts_payer_only() {
        let mut g = game(ScriptedConsole::new(["sim"]));
        g.resolve_landing(ANA, SquareId(0));
        g.players[BIA].force_debit(1470); // 30 left

        g.resolve_landing(BIA, SquareId(0));

        assert_eq!(g.player(BIA).balance(), -20);
        assert!(g.player(BIA).is_bankrupt());
        assert_eq!(g.player(ANA).balance(), 1300);
        assert!(g.console().saw("could not pay $50 in rent"));
    }

    #[test]
    fn test_owner_landing_is_idempotent() {
        let mut g = game(ScriptedConsole::new(["sim"]));
        g.resolve_landing(ANA, SquareId(0));
        let before = g.player(ANA).clone();

        g.resolve_landing(ANA, SquareId(0));

        assert_eq!(g.player(ANA), &before);
        assert_eq!(g.board().owner_of(SquareId(0)), Some(ANA));
        assert!(g.console().saw("Ana already owns Avenida Principal."));
    }

    #[test]
    fn test_fixed_company_fee_still_rolls() {
        let mut g = game_on(standard_board(), [9], ScriptedConsole::new(["sim"]));
        g.resolve_landing(ANA, SquareId(1));

        g.resolve_landing(BIA, SquareId(1));

        assert_eq!(g.dice().remaining(), 0);
        assert_eq!(g.player(BIA).balance(), 1470);
        assert_eq!(g.player(ANA).balance(), 1500 - 150 + 30);
        assert!(g.console().saw("Bia paid a $30 usage fee to Ana."));
        assert!(!g.console().saw("in rent"));
    }

    #[test]
    fn test_proportional_company_fee_uses_fresh_roll() {
        let mut g = game_on(standard_board(), [8], ScriptedConsole::new(["sim"]));
        g.resolve_landing(ANA, SquareId(4));

        g.resolve_landing(BIA, SquareId(4));

        assert_eq!(g.player(BIA).balance(), 1500 - 80);
        assert_eq!(g.player(ANA).balance(), 1500 - 150 + 80);
        assert!(g.console().saw("the fee is $80"));
    }

    #[test]
    fn test_grant_effect() {
        let mut g = game(ScriptedConsole::always(""));

        g.resolve_landing(ANA, SquareId(2));

        assert_eq!(g.player(ANA).balance(), 1550);
        assert!(g.console().saw("Ana receives $50."));
    }

    #[test]
    fn test_special_without_effect() {
        let mut g = game(ScriptedConsole::always(""));

        g.resolve_landing(ANA, SquareId(8));

        assert_eq!(g.player(ANA).balance(), 1500);
        assert!(g.console().saw("Nothing happens here."));
    }

    #[test]
    fn test_advance_effect_moves_without_second_landing() {
        let board = Board::new(vec![
            Square::plain("Start"),
            Square::special("Shortcut", SpecialEffect::advance(2)),
            Square::property("Lane", 100, 10),
        ])
        .unwrap();
        let mut g = game_on(board, [], ScriptedConsole::new(Vec::<String>::new()));
        g.players[ANA].position = SquareId(1);

        g.resolve_landing(ANA, SquareId(1));

        assert_eq!(g.player(ANA).position, SquareId(0));
        assert_eq!(g.player(ANA).balance(), 1600);
        // No purchase prompt for the square moved onto.
        assert!(!g.console().saw("Do you want to buy"));
    }

    #[test]
    fn test_penalty_effect_bankrupts() {
        let board = Board::new(vec![
            Square::plain("Start"),
            Square::special("Tax", SpecialEffect::penalty(2000)),
        ])
        .unwrap();
        let mut g = game_on(board, [], ScriptedConsole::always(""));

        g.resolve_landing(ANA, SquareId(1));

        assert_eq!(g.player(ANA).balance(), -500);
        assert!(g.player(ANA).is_bankrupt());
    }
}
