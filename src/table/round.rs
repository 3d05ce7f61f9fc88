use alloc::vec::Vec;
use tracing::{debug, info};

use crate::error::{PlayError, ShoeError};
use crate::hand::Hand;
use crate::result::{Outcome, RoundEvent, RoundResult, Settlement, Side};
use crate::rules::{self, MAX_ROUND_CARDS};
use crate::shoe::Shoe;

use super::{Table, TableState};

/// Deals one card from the shoe into `hand` and records the draw.
fn draw_third_card(
    shoe: &mut Shoe,
    hand: &mut Hand,
    side: Side,
    events: &mut Vec<RoundEvent>,
) -> Result<(), ShoeError> {
    let card = shoe.deal()?;
    hand.add_card(card);

    let total = hand.total();
    debug!(%side, %card, total, "third card drawn");
    events.push(RoundEvent::Drew { side, card, total });
    Ok(())
}

impl Table {
    /// Plays one round and settles every pending bet.
    ///
    /// The shoe is reset first if it holds fewer cards than the reshuffle
    /// threshold. Four cards are then dealt alternately to the player and
    /// banker hands; unless either hand is a natural, the player and then
    /// the banker may draw a third card. The outcome is logged and each
    /// queued bet is paid into the player's bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if no bets are pending, no player is seated, or the
    /// shoe runs out of cards. On error the bets stay queued.
    pub fn play(&mut self) -> Result<RoundResult, PlayError> {
        if self.bets.is_empty() {
            return Err(PlayError::NoBetsPending);
        }
        if self.player.is_none() {
            return Err(PlayError::NoPlayerSeated);
        }

        self.state = TableState::RoundInProgress;
        match self.play_round() {
            Ok(result) => {
                self.state = TableState::RoundSettled;
                Ok(result)
            }
            Err(err) => {
                self.state = TableState::BetsPending;
                Err(err)
            }
        }
    }

    fn play_round(&mut self) -> Result<RoundResult, PlayError> {
        let mut events = Vec::new();

        let threshold = self.options.reshuffle_threshold.max(MAX_ROUND_CARDS);
        let reshuffled = self.shoe.num_cards() < threshold;
        if reshuffled {
            self.shoe.reset();
            let cards = self.shoe.num_cards();
            info!(cards, "shoe reset");
            events.push(RoundEvent::Reshuffled { cards });
        }

        debug!(cards = self.shoe.num_cards(), "starting new deal");
        self.deal_hands(&mut events)?;

        let (outcome, natural) = self.draw_and_resolve(&mut events)?;
        info!(%outcome, natural, "round resolved");
        self.results.push(outcome);

        let settlements = self.settle_bets(outcome)?;
        let total_payout: usize = settlements.iter().map(|s| s.payout).sum();
        let bankroll = self.bankroll().unwrap_or_default();
        info!(total_payout, bankroll, "bets settled");

        let totals = |hand: Option<&Hand>| hand.map_or(0, Hand::total);
        Ok(RoundResult {
            outcome,
            natural,
            reshuffled,
            player_total: totals(self.player_hand.as_ref()),
            banker_total: totals(self.banker_hand.as_ref()),
            events,
            settlements,
            total_payout,
            bankroll,
        })
    }

    /// Deals two fresh hands: player, banker, player, banker.
    fn deal_hands(&mut self, events: &mut Vec<RoundEvent>) -> Result<(), ShoeError> {
        self.player_hand = None;
        self.banker_hand = None;

        let mut player_hand = Hand::new();
        let mut banker_hand = Hand::new();

        for _ in 0..2 {
            for (side, hand) in [
                (Side::Player, &mut player_hand),
                (Side::Banker, &mut banker_hand),
            ] {
                let card = self.shoe.deal()?;
                hand.add_card(card);
                events.push(RoundEvent::Dealt { side, card });
            }
        }

        debug!(%player_hand, "player hand dealt");
        debug!(%banker_hand, "banker hand dealt");
        self.player_hand = Some(player_hand);
        self.banker_hand = Some(banker_hand);
        Ok(())
    }

    /// Applies the natural check and the third-card rules to the dealt hands.
    ///
    /// Returns the outcome and whether a natural decided it.
    fn draw_and_resolve(
        &mut self,
        events: &mut Vec<RoundEvent>,
    ) -> Result<(Outcome, bool), PlayError> {
        let (Some(player_hand), Some(banker_hand)) =
            (self.player_hand.as_mut(), self.banker_hand.as_mut())
        else {
            return Err(PlayError::HandsNotDealt);
        };

        if let Some(outcome) = rules::check_natural(player_hand, banker_hand) {
            debug!(%outcome, "natural");
            events.push(RoundEvent::Natural { outcome });
            return Ok((outcome, true));
        }

        if rules::player_should_draw(player_hand.total()) {
            draw_third_card(&mut self.shoe, player_hand, Side::Player, events)?;
        } else {
            events.push(RoundEvent::Stood {
                side: Side::Player,
                total: player_hand.total(),
            });
        }

        let player_third = player_hand.third_card().map(|card| card.baccarat_value());
        if rules::banker_should_draw(banker_hand.total(), player_third) {
            draw_third_card(&mut self.shoe, banker_hand, Side::Banker, events)?;
        } else {
            events.push(RoundEvent::Stood {
                side: Side::Banker,
                total: banker_hand.total(),
            });
        }

        let outcome = rules::resolve_result(player_hand, banker_hand);
        events.push(RoundEvent::Resolved { outcome });
        Ok((outcome, false))
    }

    /// Pays out every queued bet against `outcome`, oldest first.
    fn settle_bets(&mut self, outcome: Outcome) -> Result<Vec<Settlement>, PlayError> {
        let player = self.player.as_mut().ok_or(PlayError::NoPlayerSeated)?;
        let mut settlements = Vec::with_capacity(self.bets.len());

        while let Some(bet) = self.bets.pop_front() {
            let payout = crate::bet::settle(&bet, outcome);
            if payout == 0 {
                debug!(amount = bet.amount(), bet_on = %bet.target(), "bet lost");
            } else {
                debug!(amount = bet.amount(), bet_on = %bet.target(), payout, "bet won");
            }

            player.win_bet(payout);
            settlements.push(Settlement { bet, payout });
        }

        if !self.bets.is_empty() {
            return Err(PlayError::UnsettledBets);
        }

        Ok(settlements)
    }
}
