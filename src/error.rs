//! Error types for table operations.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No live cards left to deal.
    #[error("the shoe is exhausted")]
    Exhausted,
    /// A requested card is not among the live cards.
    #[error("card is not in the live part of the shoe")]
    MissingCard,
}

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// The table's only seat is already taken.
    #[error("a player is already seated")]
    Occupied,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// No player is seated at the table.
    #[error("no player is seated")]
    NoPlayerSeated,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No bets are waiting to be resolved.
    #[error("no bets have been placed")]
    NoBetsPending,
    /// No player is seated at the table.
    #[error("no player is seated")]
    NoPlayerSeated,
    /// Resolution was attempted before both hands were dealt.
    #[error("hands have not been dealt")]
    HandsNotDealt,
    /// Bets were still queued after settlement.
    #[error("not all bets have been settled")]
    UnsettledBets,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card text")]
    Empty,
    /// The rank was not recognised.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit was not recognised.
    #[error("invalid card suit")]
    InvalidSuit,
}
