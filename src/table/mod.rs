//! Table engine and state management.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::info;

use crate::bet::{Bet, Player};
use crate::error::SeatError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::Outcome;
use crate::shoe::Shoe;

mod bet;
mod round;
pub mod state;

pub use state::TableState;

/// A single-seat baccarat table that deals rounds and settles bets.
///
/// The table owns the shoe, the seated player, the queue of pending bets and
/// the hands of the latest round. Use [`TableOptions`] to configure the shoe.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// The shoe cards are dealt from.
    shoe: Shoe,
    /// Current table state.
    state: TableState,
    /// The seated player, if any.
    player: Option<Player>,
    /// Bets waiting for the next round, oldest first.
    bets: VecDeque<Bet>,
    /// Player hand of the latest round.
    player_hand: Option<Hand>,
    /// Banker hand of the latest round.
    banker_hand: Option<Hand>,
    /// Outcome of every completed round.
    results: Vec<Outcome>,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bcrs::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), 8 * 52);
    /// assert_eq!(table.num_games(), 0);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut shoe = Shoe::new(options.decks, seed);
        shoe.shuffle();
        info!(decks = shoe.num_decks(), cards = shoe.num_cards(), "shoe shuffled");

        Self {
            options,
            shoe,
            state: TableState::NoPlayer,
            player: None,
            bets: VecDeque::new(),
            player_hand: None,
            banker_hand: None,
            results: Vec::new(),
        }
    }

    /// Seats a player at the table.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::Occupied`] if a player is already seated.
    pub fn seat_player(&mut self, player: Player) -> Result<(), SeatError> {
        if self.player.is_some() {
            return Err(SeatError::Occupied);
        }

        info!(bankroll = player.bankroll(), "player seated");
        self.player = Some(player);
        self.state = TableState::PlayerSeated;
        Ok(())
    }

    /// Removes the seated player, refunding any bets still pending.
    pub fn unseat_player(&mut self) -> Option<Player> {
        let mut player = self.player.take()?;
        for bet in self.bets.drain(..) {
            player.win_bet(bet.amount());
        }

        info!(bankroll = player.bankroll(), "player left the table");
        self.state = TableState::NoPlayer;
        Some(player)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the seated player.
    #[must_use]
    pub const fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Returns the seated player's bankroll.
    #[must_use]
    pub fn bankroll(&self) -> Option<usize> {
        self.player.as_ref().map(Player::bankroll)
    }

    /// Returns the bets waiting for the next round, oldest first.
    #[must_use]
    pub const fn pending_bets(&self) -> &VecDeque<Bet> {
        &self.bets
    }

    /// Returns the player hand of the latest round.
    #[must_use]
    pub const fn player_hand(&self) -> Option<&Hand> {
        self.player_hand.as_ref()
    }

    /// Returns the banker hand of the latest round.
    #[must_use]
    pub const fn banker_hand(&self) -> Option<&Hand> {
        self.banker_hand.as_ref()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe for rearranging or dealing outside a round.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of live cards in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.num_cards()
    }

    /// Returns the outcome of every completed round, oldest first.
    #[must_use]
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// Returns the number of completed rounds.
    #[must_use]
    pub fn num_games(&self) -> usize {
        self.results.len()
    }

    /// Returns the outcome of the latest round.
    #[must_use]
    pub fn last_result(&self) -> Option<Outcome> {
        self.results.last().copied()
    }

    /// Returns how often each outcome has occurred. Every outcome is present.
    #[must_use]
    pub fn result_counts(&self) -> HashMap<Outcome, usize> {
        let mut counts: HashMap<Outcome, usize> =
            Outcome::ALL.into_iter().map(|outcome| (outcome, 0)).collect();
        for outcome in &self.results {
            *counts.entry(*outcome).or_insert(0) += 1;
        }
        counts
    }
}
