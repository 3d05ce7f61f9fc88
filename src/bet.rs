//! Wagers, the bankroll holder, and payout arithmetic.

use crate::error::BetError;
use crate::result::Outcome;

/// Return on a winning player bet, stake included.
pub const PLAYER_PAYS: usize = 2;
/// Return on a winning tie bet, stake included.
pub const TIE_PAYS: usize = 8;
/// Return on a winning banker bet in hundredths, stake included
/// (even money less a 5% commission).
pub const BANKER_PAYS_PERCENT: usize = 195;

/// A wager on one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bet {
    amount: usize,
    target: Outcome,
}

impl Bet {
    /// Creates a bet. Use [`Player::make_bet`] to fund it from a bankroll.
    #[must_use]
    pub const fn new(amount: usize, target: Outcome) -> Self {
        Self { amount, target }
    }

    /// Returns the wagered amount.
    #[must_use]
    pub const fn amount(&self) -> usize {
        self.amount
    }

    /// Returns the outcome the bet is on.
    #[must_use]
    pub const fn target(&self) -> Outcome {
        self.target
    }
}

/// Returns the amount paid back for `bet` when the round ends in `outcome`.
///
/// The stake was taken when the bet was placed, so the payout includes it:
/// player bets return 2x, tie bets 8x, and banker bets 1.95x rounded down.
/// Any other pairing returns nothing, including player and banker bets on a
/// tied round.
///
/// ```
/// use bcrs::{Bet, Outcome, settle};
///
/// assert_eq!(settle(&Bet::new(10, Outcome::Banker), Outcome::Banker), 19);
/// assert_eq!(settle(&Bet::new(10, Outcome::Player), Outcome::Tie), 0);
/// ```
#[must_use]
pub const fn settle(bet: &Bet, outcome: Outcome) -> usize {
    let amount = bet.amount;
    match (bet.target, outcome) {
        (Outcome::Player, Outcome::Player) => amount.saturating_mul(PLAYER_PAYS),
        (Outcome::Banker, Outcome::Banker) => {
            // floor(amount * 1.95) without leaving integer arithmetic
            (amount / 100)
                .saturating_mul(BANKER_PAYS_PERCENT)
                .saturating_add(amount % 100 * BANKER_PAYS_PERCENT / 100)
        }
        (Outcome::Tie, Outcome::Tie) => amount.saturating_mul(TIE_PAYS),
        _ => 0,
    }
}

/// A player holding a bankroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    bankroll: usize,
}

impl Player {
    /// Creates a player with the given bankroll.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self { bankroll }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Takes `amount` from the bankroll and returns the resulting bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the bankroll. The
    /// bankroll is unchanged on error.
    pub const fn make_bet(&mut self, amount: usize, target: Outcome) -> Result<Bet, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        Ok(Bet::new(amount, target))
    }

    /// Adds a payout to the bankroll.
    pub const fn win_bet(&mut self, amount: usize) {
        self.bankroll = self.bankroll.saturating_add(amount);
    }
}
