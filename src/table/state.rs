//! Table state types.

/// Table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// The seat is empty.
    NoPlayer,
    /// A player is seated but has not bet yet.
    PlayerSeated,
    /// Bets are queued for the next round.
    BetsPending,
    /// A round is being dealt and resolved.
    RoundInProgress,
    /// The last round has been settled.
    RoundSettled,
}
