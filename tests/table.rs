//! Table integration tests.

use bcrs::{
    BetError, Card, DECK_SIZE, Outcome, PlayError, Player, Rank, RoundEvent, SeatError, Side,
    Suit, Table, TableOptions, TableState, settle,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn single_deck_table(seed: u64, bankroll: usize) -> Table {
    let mut table = Table::new(TableOptions::default().with_decks(1), seed);
    table.seat_player(Player::new(bankroll)).unwrap();
    table
}

#[test]
fn new_table_shuffles_full_shoe() {
    let table = Table::new(TableOptions::default(), 3);
    assert_eq!(table.state(), TableState::NoPlayer);
    assert_eq!(table.cards_remaining(), 8 * DECK_SIZE);
    assert_eq!(table.shoe().num_decks(), 8);
    assert!(table.player_hand().is_none());
    assert!(table.banker_hand().is_none());
    assert_eq!(table.last_result(), None);

    let counts = table.result_counts();
    assert_eq!(counts.len(), 3);
    assert!(counts.values().all(|&count| count == 0));
}

#[test]
fn seating_is_limited_to_one_player() {
    let mut table = Table::new(TableOptions::default(), 1);
    table.seat_player(Player::new(50)).unwrap();
    assert_eq!(table.state(), TableState::PlayerSeated);
    assert_eq!(
        table.seat_player(Player::new(10)).unwrap_err(),
        SeatError::Occupied
    );
    assert_eq!(table.bankroll(), Some(50));
}

#[test]
fn bet_errors() {
    let mut table = Table::new(TableOptions::default(), 1);
    assert_eq!(
        table.place_bet(10, Outcome::Player).unwrap_err(),
        BetError::NoPlayerSeated
    );

    table.seat_player(Player::new(100)).unwrap();
    assert_eq!(
        table.place_bet(0, Outcome::Player).unwrap_err(),
        BetError::ZeroBet
    );
    assert_eq!(
        table.place_bet(150, Outcome::Player).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(table.bankroll(), Some(100));
    assert!(table.pending_bets().is_empty());
    assert_eq!(table.state(), TableState::PlayerSeated);
}

#[test]
fn bets_are_deducted_when_placed() {
    let mut table = single_deck_table(1, 100);
    table.place_bet(30, Outcome::Banker).unwrap();
    table.place_bet(70, Outcome::Tie).unwrap();

    assert_eq!(table.bankroll(), Some(0));
    assert_eq!(table.state(), TableState::BetsPending);
    assert_eq!(table.pending_bets().len(), 2);
    assert_eq!(table.pending_bets()[0].amount(), 30);
    assert_eq!(table.pending_bets()[1].target(), Outcome::Tie);

    assert_eq!(
        table.place_bet(1, Outcome::Player).unwrap_err(),
        BetError::InsufficientFunds
    );
}

#[test]
fn play_without_bets_is_rejected() {
    let mut table = single_deck_table(1, 100);
    assert_eq!(table.play().unwrap_err(), PlayError::NoBetsPending);
    assert_eq!(table.num_games(), 0);
}

#[test]
fn round_settles_every_bet() {
    let mut table = Table::new(TableOptions::default(), 2024);
    table.seat_player(Player::new(100)).unwrap();
    table.place_bet(10, Outcome::Player).unwrap();
    let bet = table.pending_bets()[0];

    let round = table.play().unwrap();

    assert!(table.pending_bets().is_empty());
    assert_eq!(table.state(), TableState::RoundSettled);
    assert_eq!(table.num_games(), 1);
    assert_eq!(table.last_result(), Some(round.outcome));
    assert_eq!(table.result_counts().values().sum::<usize>(), 1);
    assert_eq!(table.result_counts()[&round.outcome], 1);
    assert_eq!(table.bankroll(), Some(100 - 10 + settle(&bet, round.outcome)));
    assert_eq!(round.bankroll, 100 - 10 + round.total_payout);

    let player_cards = table.player_hand().unwrap().num_cards();
    let banker_cards = table.banker_hand().unwrap().num_cards();
    assert!((2..=3).contains(&player_cards));
    assert!((2..=3).contains(&banker_cards));
    assert_eq!(
        table.cards_remaining(),
        8 * DECK_SIZE - player_cards - banker_cards
    );
}

#[test]
fn player_natural_ends_round() {
    let mut table = single_deck_table(5, 100);
    table.place_bet(10, Outcome::Player).unwrap();
    table
        .shoe_mut()
        .stack(&[
            card(Rank::Nine, Suit::Hearts),   // player
            card(Rank::Two, Suit::Clubs),     // banker
            card(Rank::King, Suit::Spades),   // player
            card(Rank::Three, Suit::Diamonds), // banker
        ])
        .unwrap();

    let round = table.play().unwrap();
    assert_eq!(round.outcome, Outcome::Player);
    assert!(round.natural);
    assert!(!round.reshuffled);
    assert_eq!(round.player_total, 9);
    assert_eq!(round.banker_total, 5);
    assert_eq!(round.events.len(), 5);
    assert_eq!(
        round.events[0],
        RoundEvent::Dealt {
            side: Side::Player,
            card: card(Rank::Nine, Suit::Hearts),
        }
    );
    assert_eq!(
        round.events[1],
        RoundEvent::Dealt {
            side: Side::Banker,
            card: card(Rank::Two, Suit::Clubs),
        }
    );
    assert_eq!(
        round.events[4],
        RoundEvent::Natural {
            outcome: Outcome::Player
        }
    );
    assert_eq!(table.banker_hand().unwrap().num_cards(), 2);
    assert_eq!(table.bankroll(), Some(110));
}

#[test]
fn two_naturals_tie() {
    let mut table = single_deck_table(6, 100);
    table.place_bet(10, Outcome::Tie).unwrap();
    table
        .shoe_mut()
        .stack(&[
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Spades),
            card(Rank::Queen, Suit::Diamonds),
        ])
        .unwrap();

    let round = table.play().unwrap();
    assert_eq!(round.outcome, Outcome::Tie);
    assert!(round.natural);
    assert_eq!(round.total_payout, 80);
    assert_eq!(table.bankroll(), Some(170));
}

#[test]
fn banker_stands_on_three_against_player_eight() {
    let mut table = single_deck_table(7, 100);
    table.place_bet(10, Outcome::Player).unwrap();
    table
        .shoe_mut()
        .stack(&[
            card(Rank::Two, Suit::Hearts),    // player
            card(Rank::Three, Suit::Clubs),   // banker
            card(Rank::Three, Suit::Spades),  // player: 5
            card(Rank::King, Suit::Diamonds), // banker: 3
            card(Rank::Eight, Suit::Diamonds), // player third: 3
        ])
        .unwrap();

    let round = table.play().unwrap();
    assert_eq!(round.outcome, Outcome::Tie);
    assert!(!round.natural);
    assert_eq!(
        &round.events[4..],
        &[
            RoundEvent::Drew {
                side: Side::Player,
                card: card(Rank::Eight, Suit::Diamonds),
                total: 3,
            },
            RoundEvent::Stood {
                side: Side::Banker,
                total: 3,
            },
            RoundEvent::Resolved {
                outcome: Outcome::Tie
            },
        ]
    );
    assert_eq!(
        table.player_hand().unwrap().third_card(),
        Some(card(Rank::Eight, Suit::Diamonds))
    );
    // Player bets do not pay on a tie.
    assert_eq!(round.total_payout, 0);
    assert_eq!(table.bankroll(), Some(90));
}

#[test]
fn banker_draws_when_player_stands() {
    let mut table = single_deck_table(8, 100);
    table.place_bet(10, Outcome::Banker).unwrap();
    table
        .shoe_mut()
        .stack(&[
            card(Rank::Three, Suit::Hearts), // player
            card(Rank::Two, Suit::Clubs),    // banker
            card(Rank::Four, Suit::Spades),  // player: 7
            card(Rank::Two, Suit::Diamonds), // banker: 4
            card(Rank::Four, Suit::Clubs),   // banker third: 8
        ])
        .unwrap();

    let round = table.play().unwrap();
    assert_eq!(round.outcome, Outcome::Banker);
    assert_eq!(round.player_total, 7);
    assert_eq!(round.banker_total, 8);
    assert_eq!(
        round.events[4],
        RoundEvent::Stood {
            side: Side::Player,
            total: 7,
        }
    );
    assert_eq!(table.player_hand().unwrap().third_card(), None);
    assert_eq!(round.total_payout, 19);
    assert_eq!(table.bankroll(), Some(109));
}

#[test]
fn both_sides_draw_and_bets_settle_in_order() {
    let mut table = single_deck_table(9, 100);
    table.place_bet(20, Outcome::Player).unwrap();
    table.place_bet(10, Outcome::Banker).unwrap();
    table
        .shoe_mut()
        .stack(&[
            card(Rank::Ace, Suit::Hearts),     // player
            card(Rank::Three, Suit::Clubs),    // banker
            card(Rank::Two, Suit::Spades),     // player: 3
            card(Rank::Three, Suit::Diamonds), // banker: 6
            card(Rank::Six, Suit::Hearts),     // player third: 9
            card(Rank::Two, Suit::Clubs),      // banker third: 8
        ])
        .unwrap();

    let round = table.play().unwrap();
    assert_eq!(round.outcome, Outcome::Player);
    assert_eq!(round.player_total, 9);
    assert_eq!(round.banker_total, 8);
    assert_eq!(table.banker_hand().unwrap().num_cards(), 3);

    assert_eq!(round.settlements.len(), 2);
    assert_eq!(round.settlements[0].bet.target(), Outcome::Player);
    assert_eq!(round.settlements[0].payout, 40);
    assert_eq!(round.settlements[1].bet.target(), Outcome::Banker);
    assert_eq!(round.settlements[1].payout, 0);
    assert_eq!(table.bankroll(), Some(110));
}

#[test]
fn low_shoe_is_reset_before_dealing() {
    let mut table = single_deck_table(10, 100);
    for _ in 0..DECK_SIZE - 1 {
        table.shoe_mut().deal().unwrap();
    }
    assert_eq!(table.cards_remaining(), 1);

    table.place_bet(10, Outcome::Banker).unwrap();
    let round = table.play().unwrap();

    assert!(round.reshuffled);
    assert_eq!(
        round.events[0],
        RoundEvent::Reshuffled { cards: DECK_SIZE }
    );
    let used = table.player_hand().unwrap().num_cards() + table.banker_hand().unwrap().num_cards();
    assert_eq!(table.cards_remaining(), DECK_SIZE - used);
    assert_eq!(table.shoe().discards().len(), used);
}

#[test]
fn reshuffle_threshold_is_configurable() {
    let options = TableOptions::default()
        .with_decks(1)
        .with_reshuffle_threshold(40);
    let mut table = Table::new(options, 11);
    table.seat_player(Player::new(100)).unwrap();
    for _ in 0..13 {
        table.shoe_mut().deal().unwrap();
    }

    table.place_bet(10, Outcome::Player).unwrap();
    assert!(table.play().unwrap().reshuffled);
}

#[test]
fn unseat_refunds_pending_bets() {
    let mut table = single_deck_table(12, 100);
    table.place_bet(10, Outcome::Player).unwrap();

    let unseated = table.unseat_player().unwrap();
    assert_eq!(unseated.bankroll(), 100);
    assert!(table.pending_bets().is_empty());
    assert_eq!(table.state(), TableState::NoPlayer);
    assert_eq!(table.play().unwrap_err(), PlayError::NoBetsPending);
    assert!(table.unseat_player().is_none());
}

#[test]
fn result_counts_track_every_round() {
    let mut table = Table::new(TableOptions::default(), 77);
    table.seat_player(Player::new(1_000)).unwrap();

    for _ in 0..25 {
        table.place_bet(10, Outcome::Banker).unwrap();
        table.play().unwrap();
    }

    let counts = table.result_counts();
    assert_eq!(table.num_games(), 25);
    assert_eq!(table.results().len(), 25);
    assert_eq!(counts.values().sum::<usize>(), 25);
    for outcome in Outcome::ALL {
        let expected = table.results().iter().filter(|&&r| r == outcome).count();
        assert_eq!(counts[&outcome], expected);
    }
}

#[test]
fn equal_seeds_play_equal_rounds() {
    let play = |seed| {
        let mut table = Table::new(TableOptions::default(), seed);
        table.seat_player(Player::new(100)).unwrap();
        table.place_bet(10, Outcome::Player).unwrap();
        table.play().unwrap().events
    };

    assert_eq!(play(31), play(31));
}
