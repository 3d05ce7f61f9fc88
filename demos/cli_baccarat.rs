//! CLI baccarat example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bcrs::{Card, Outcome, Player, RoundEvent, RoundResult, Side, Suit, Table, TableOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("Baccarat CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    if let Err(err) = table.seat_player(Player::new(1_000)) {
        println!("Seat error: {err}");
        return;
    }

    loop {
        let bankroll = table.bankroll().unwrap_or(0);
        if bankroll == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        println!("\nBankroll: {bankroll} | Shoe: {} cards", table.cards_remaining());
        let target = match prompt_line("Bet on Player (p), Banker (b) or Tie (t): ").as_str() {
            "p" | "player" => Outcome::Player,
            "b" | "banker" => Outcome::Banker,
            "t" | "tie" => Outcome::Tie,
            "q" | "quit" => break,
            _ => {
                println!("Invalid choice.");
                continue;
            }
        };

        let Some(amount) = prompt_usize(&format!("Bet amount (1-{bankroll}): ")) else {
            break;
        };

        if let Err(err) = table.place_bet(amount, target) {
            println!("Bet error: {err}");
            continue;
        }

        match table.play() {
            Ok(round) => print_round(&round),
            Err(err) => println!("Round error: {err}"),
        }
    }

    print_summary(&table);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_round(round: &RoundResult) {
    for event in &round.events {
        match event {
            RoundEvent::Reshuffled { cards } => println!("Shoe reshuffled ({cards} cards)."),
            RoundEvent::Dealt { side, card } => println!("{side} is dealt {}", format_card(card)),
            RoundEvent::Natural { outcome } => println!("Natural! {outcome} takes it."),
            RoundEvent::Drew { side, card, total } => {
                println!("{side} draws {} - total {total}", format_card(card));
            }
            RoundEvent::Stood { side, total } => println!("{side} stands on {total}"),
            RoundEvent::Resolved { outcome } => println!("Result: {outcome}"),
        }
    }

    println!(
        "\n{} {} - {} {}",
        side_label(Side::Player),
        round.player_total,
        round.banker_total,
        side_label(Side::Banker)
    );
    for settlement in &round.settlements {
        let bet = settlement.bet;
        if settlement.payout == 0 {
            println!("You lose {} on {}.", bet.amount(), bet.target());
        } else {
            println!(
                "You win {} on {}.",
                colorize(&settlement.payout.to_string(), "32"),
                bet.target()
            );
        }
    }
}

fn print_summary(table: &Table) {
    let counts = table.result_counts();
    println!("\nGames played: {}", table.num_games());
    for outcome in Outcome::ALL {
        println!("  {outcome}: {}", counts.get(&outcome).copied().unwrap_or(0));
    }
    if let Some(bankroll) = table.bankroll() {
        println!("Final bankroll: {bankroll}");
    }
}

fn side_label(side: Side) -> String {
    let code = match side {
        Side::Player => "34",
        Side::Banker => "31",
    };
    colorize(&side.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "90",
    };
    colorize(&card.to_string(), color_code)
}
