//! Round outcome and event types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::bet::Bet;
use crate::card::Card;

/// The winning side of a round, also used as a bet target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player hand wins.
    Player,
    /// The banker hand wins.
    Banker,
    /// Both hands finish on the same total.
    Tie,
}

impl Outcome {
    /// All three outcomes.
    pub const ALL: [Self; 3] = [Self::Player, Self::Banker, Self::Tie];
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Banker => "Banker",
            Self::Tie => "Tie",
        })
    }
}

/// One of the two hands dealt each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player hand.
    Player,
    /// The banker hand.
    Banker,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Banker => "Banker",
        })
    }
}

/// A step of a round, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The shoe was reset before dealing.
    Reshuffled {
        /// Live cards after the reset.
        cards: usize,
    },
    /// A card from the initial four-card deal.
    Dealt {
        /// The receiving hand.
        side: Side,
        /// The card dealt.
        card: Card,
    },
    /// One or both hands were naturals; no further cards are drawn.
    Natural {
        /// The outcome decided by the natural.
        outcome: Outcome,
    },
    /// A hand drew a third card.
    Drew {
        /// The drawing hand.
        side: Side,
        /// The card drawn.
        card: Card,
        /// The hand total after the draw.
        total: u8,
    },
    /// A hand stood on its first two cards.
    Stood {
        /// The standing hand.
        side: Side,
        /// The hand total.
        total: u8,
    },
    /// The round was decided by comparing totals.
    Resolved {
        /// The winning side, or a tie.
        outcome: Outcome,
    },
}

/// How a single bet was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The settled bet.
    pub bet: Bet,
    /// Amount paid back to the player (0 if the bet lost).
    pub payout: usize,
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The winning side, or a tie.
    pub outcome: Outcome,
    /// Whether a natural ended the round after the initial deal.
    pub natural: bool,
    /// Whether the shoe was reset before dealing.
    pub reshuffled: bool,
    /// Final player hand total.
    pub player_total: u8,
    /// Final banker hand total.
    pub banker_total: u8,
    /// Dealing and drawing steps, in order.
    pub events: Vec<RoundEvent>,
    /// Settlement of each bet, in the order the bets were placed.
    pub settlements: Vec<Settlement>,
    /// Sum of all payouts.
    pub total_payout: usize,
    /// Player bankroll after settlement.
    pub bankroll: usize,
}
