//! Baccarat hand representation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// A hand of up to three cards for one side of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// The round logic never adds more than three cards.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the hand total: the sum of the card values, modulo 10.
    ///
    /// ```
    /// use bcrs::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Seven, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Six, Suit::Clubs));
    /// assert_eq!(hand.total(), 3);
    /// ```
    #[must_use]
    pub fn total(&self) -> u8 {
        let sum: u32 = self
            .cards
            .iter()
            .map(|card| u32::from(card.baccarat_value()))
            .sum();
        (sum % 10) as u8
    }

    /// Returns the third card, if one has been drawn.
    #[must_use]
    pub fn third_card(&self) -> Option<Card> {
        if self.cards.len() == 3 {
            Some(self.cards[2])
        } else {
            None
        }
    }

    /// Returns whether the hand is a natural: two cards totalling 8 or 9.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total() >= 8
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "total {}", self.total())?;
        if !self.cards.is_empty() {
            f.write_str(" ")?;
        }
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
