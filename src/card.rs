//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Parses a suit from its name, symbol or first letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        let suit = match s {
            "♠" => Self::Spades,
            "♥" => Self::Hearts,
            "♦" => Self::Diamonds,
            "♣" => Self::Clubs,
            _ if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("spades") => Self::Spades,
            _ if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hearts") => Self::Hearts,
            _ if s.eq_ignore_ascii_case("d") || s.eq_ignore_ascii_case("diamonds") => {
                Self::Diamonds
            }
            _ if s.eq_ignore_ascii_case("c") || s.eq_ignore_ascii_case("clubs") => Self::Clubs,
            _ => return Err(ParseCardError::InvalidSuit),
        };

        Ok(suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the baccarat point value of the rank.
    ///
    /// Tens and face cards count 0, an ace counts 1, and every other rank
    /// counts its pip value.
    ///
    /// ```
    /// use bcrs::Rank;
    ///
    /// assert_eq!(Rank::King.baccarat_value(), 0);
    /// assert_eq!(Rank::Ace.baccarat_value(), 1);
    /// assert_eq!(Rank::Seven.baccarat_value(), 7);
    /// ```
    #[must_use]
    pub const fn baccarat_value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 0,
            Self::Ace => 1,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::InvalidRank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the baccarat point value of the card.
    #[must_use]
    pub const fn baccarat_value(self) -> u8 {
        self.rank.baccarat_value()
    }

    /// Builds a card from separate rank and suit text.
    ///
    /// ```
    /// use bcrs::{Card, Rank, Suit};
    ///
    /// let card = Card::from_parts("q", "clubs").unwrap();
    /// assert_eq!(card, Card::new(Rank::Queen, Suit::Clubs));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if either part is empty or not recognised.
    pub fn from_parts(rank: &str, suit: &str) -> Result<Self, ParseCardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card written as rank followed by a one-character suit,
    /// e.g. `A♠`, `10h` or `[K♦]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(s);

        let Some((index, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };
        let (rank, suit) = s.split_at(index);
        Self::from_parts(rank, suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// One standard deck: every suit paired with every rank.
pub const DECK: [Card; DECK_SIZE] = build_deck();

const fn build_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Two, Suit::Spades); DECK_SIZE];
    let mut index = 0;
    while index < DECK_SIZE {
        cards[index] = Card::new(Rank::ALL[index % 13], Suit::ALL[index / 13]);
        index += 1;
    }
    cards
}
