//! Table configuration options.

use crate::rules::MAX_ROUND_CARDS;

/// Configuration options for a baccarat table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bcrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_reshuffle_threshold(20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe. Zero is treated as one.
    pub decks: u8,
    /// The shoe is reset before a round when fewer live cards remain.
    /// Never lower than [`MAX_ROUND_CARDS`].
    pub reshuffle_threshold: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            reshuffle_threshold: MAX_ROUND_CARDS,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bcrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold, raised to [`MAX_ROUND_CARDS`] if lower.
    ///
    /// # Example
    ///
    /// ```
    /// use bcrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_threshold(2);
    /// assert_eq!(options.reshuffle_threshold, 6);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = if threshold < MAX_ROUND_CARDS {
            MAX_ROUND_CARDS
        } else {
            threshold
        };
        self
    }
}
