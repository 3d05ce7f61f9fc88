//! A multi-deck shoe with a shuffle, deal and reset lifecycle.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK, DECK_SIZE};
use crate::error::ShoeError;

/// A depleting, reshuffleable source of cards built from standard decks.
///
/// Cards are split between the live cards still available to deal and the
/// discards dealt since the last reset; together they always hold exactly
/// `num_decks * 52` cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards still available, dealt from the end.
    live: Vec<Card>,
    /// Cards dealt since the last reset.
    discards: Vec<Card>,
    num_decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates an unshuffled shoe of `num_decks` concatenated decks.
    ///
    /// A deck count of zero is treated as one. The seed drives every later
    /// shuffle, so equal seeds give equal card sequences.
    ///
    /// ```
    /// use bcrs::Shoe;
    ///
    /// let shoe = Shoe::new(8, 7);
    /// assert_eq!(shoe.num_cards(), 416);
    /// assert!(shoe.discards().is_empty());
    /// ```
    #[must_use]
    pub fn new(num_decks: u8, seed: u64) -> Self {
        Self::with_rng(num_decks, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an unshuffled shoe that shuffles with the given generator.
    #[must_use]
    pub fn with_rng(num_decks: u8, rng: ChaCha8Rng) -> Self {
        let num_decks = num_decks.max(1);
        let mut live = Vec::with_capacity(num_decks as usize * DECK_SIZE);
        for _ in 0..num_decks {
            live.extend_from_slice(&DECK);
        }

        Self {
            live,
            discards: Vec::new(),
            num_decks,
            rng,
        }
    }

    /// Randomly permutes the live cards. Discards are untouched.
    pub fn shuffle(&mut self) {
        self.live.shuffle(&mut self.rng);
    }

    /// Deals the next card, moving it to the discards.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if no live cards remain.
    pub fn deal(&mut self) -> Result<Card, ShoeError> {
        let card = self.live.pop().ok_or(ShoeError::Exhausted)?;
        self.discards.push(card);
        Ok(card)
    }

    /// Returns the discards to the live cards and reshuffles.
    pub fn reset(&mut self) {
        self.live.append(&mut self.discards);
        self.shuffle();
    }

    /// Reorders the live cards so the next deals return `draws` in order.
    ///
    /// Only the order changes; the shoe keeps the same cards.
    ///
    /// ```
    /// use bcrs::{Card, Rank, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::new(1, 0);
    /// let nine = Card::new(Rank::Nine, Suit::Hearts);
    /// shoe.stack(&[nine]).unwrap();
    /// assert_eq!(shoe.deal(), Ok(nine));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::MissingCard`] if the live cards cannot supply
    /// every requested card. The shoe is left unchanged in that case.
    pub fn stack(&mut self, draws: &[Card]) -> Result<(), ShoeError> {
        let mut rest = self.live.clone();
        let mut top = Vec::with_capacity(draws.len());

        for card in draws {
            let index = rest
                .iter()
                .position(|c| c == card)
                .ok_or(ShoeError::MissingCard)?;
            top.push(rest.remove(index));
        }

        // Dealing pops from the end, so the first draw goes last.
        top.reverse();
        rest.extend(top);
        self.live = rest;
        Ok(())
    }

    /// Returns the number of live cards.
    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.live.len()
    }

    /// Returns the number of decks the shoe was built with.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Returns the total number of cards owned by the shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.num_decks as usize * DECK_SIZE
    }

    /// Returns the live cards; the last one is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.live
    }

    /// Returns the cards dealt since the last reset.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }
}
