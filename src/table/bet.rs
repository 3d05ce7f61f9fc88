use tracing::info;

use crate::error::BetError;
use crate::result::Outcome;

use super::{Table, TableState};

impl Table {
    /// Places a bet for the seated player.
    ///
    /// The amount leaves the bankroll immediately and the bet waits in the
    /// queue until the next [`Table::play`].
    ///
    /// # Errors
    ///
    /// Returns an error if no player is seated, the amount is zero, or the
    /// amount exceeds the player's bankroll.
    pub fn place_bet(&mut self, amount: usize, target: Outcome) -> Result<(), BetError> {
        let player = self.player.as_mut().ok_or(BetError::NoPlayerSeated)?;
        let bet = player.make_bet(amount, target)?;

        info!(amount, bet_on = %target, bankroll = player.bankroll(), "bet placed");
        self.bets.push_back(bet);
        self.state = TableState::BetsPending;
        Ok(())
    }
}
