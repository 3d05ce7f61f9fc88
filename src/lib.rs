//! A single-table baccarat engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that owns a multi-deck [`Shoe`], seats
//! one [`Player`], queues bets, and plays full rounds: the four-card deal,
//! the third-card rules, resolution and settlement.
//!
//! # Example
//!
//! ```
//! use bcrs::{Outcome, Player, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! table.seat_player(Player::new(100)).unwrap();
//! table.place_bet(10, Outcome::Banker).unwrap();
//!
//! let round = table.play().unwrap();
//! assert_eq!(table.num_games(), 1);
//! assert_eq!(table.bankroll(), Some(90 + round.total_payout));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod shoe;
pub mod table;

// Re-export main types
pub use bet::{Bet, Player, settle};
pub use card::{Card, DECK, DECK_SIZE, Rank, Suit};
pub use error::{BetError, ParseCardError, PlayError, SeatError, ShoeError};
pub use hand::Hand;
pub use options::TableOptions;
pub use result::{Outcome, RoundEvent, RoundResult, Settlement, Side};
pub use shoe::Shoe;
pub use table::{Table, TableState};
