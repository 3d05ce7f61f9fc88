//! Third-card drawing rules and round resolution.
//!
//! Everything here is a pure function of the hands or totals passed in.

use crate::hand::Hand;
use crate::result::Outcome;

/// Most cards a single round can take from the shoe: two per side plus one
/// third card each.
pub const MAX_ROUND_CARDS: usize = 6;

/// Returns whether the player hand draws a third card.
///
/// The player draws on 0 through 5 and stands on 6 or 7.
#[must_use]
pub const fn player_should_draw(player_total: u8) -> bool {
    player_total <= 5
}

/// Returns whether the banker hand draws a third card.
///
/// `player_third_card` is the baccarat value of the player's third card, or
/// `None` if the player stood.
///
/// ```
/// use bcrs::rules::banker_should_draw;
///
/// assert!(banker_should_draw(5, None));
/// assert!(!banker_should_draw(3, Some(8)));
/// assert!(banker_should_draw(6, Some(7)));
/// ```
#[must_use]
pub const fn banker_should_draw(banker_total: u8, player_third_card: Option<u8>) -> bool {
    let Some(third) = player_third_card else {
        return banker_total <= 5;
    };

    match banker_total {
        0..=2 => true,
        3 => third != 8,
        4 => matches!(third, 2..=7),
        5 => matches!(third, 4..=7),
        6 => matches!(third, 6..=7),
        _ => false,
    }
}

/// Checks the first two cards of each hand for a natural 8 or 9.
///
/// Returns `None` when neither hand is a natural.
#[must_use]
pub fn check_natural(player: &Hand, banker: &Hand) -> Option<Outcome> {
    match (player.is_natural(), banker.is_natural()) {
        (true, true) => Some(Outcome::Tie),
        (true, false) => Some(Outcome::Player),
        (false, true) => Some(Outcome::Banker),
        (false, false) => None,
    }
}

/// Compares final totals: the higher total wins, equal totals tie.
#[must_use]
pub fn resolve_result(player: &Hand, banker: &Hand) -> Outcome {
    match player.total().cmp(&banker.total()) {
        core::cmp::Ordering::Greater => Outcome::Player,
        core::cmp::Ordering::Less => Outcome::Banker,
        core::cmp::Ordering::Equal => Outcome::Tie,
    }
}
