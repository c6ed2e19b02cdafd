//! CLI War example: shuffles, deals two stocks, and plays them out.

#![allow(clippy::missing_docs_in_private_items)]

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, Rank, Suit, Variant, War};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    println!("War example (seed {seed})");

    let mut deck = Deck::<War>::new();
    deck.shuffle_seeded(seed);

    let mut first = deck.deal();
    let mut second = deck.deal();
    println!(
        "Dealt {} cards to each player; {} left in the deck.\n",
        first.size(),
        deck.size()
    );

    let mut round = 0u32;
    let mut first_wins = 0u32;
    let mut second_wins = 0u32;
    let mut face_up_announced = false;

    loop {
        let (Some(card_one), Some(card_two)) = (first.play_card(), second.play_card()) else {
            break;
        };
        round += 1;

        let verdict = match battle(card_one, card_two) {
            Ordering::Greater => {
                first_wins += 1;
                "player one takes it"
            }
            Ordering::Less => {
                second_wins += 1;
                "player two takes it"
            }
            Ordering::Equal => "war!",
        };

        println!(
            "Round {round:2}: {} vs {} - {verdict}",
            format_card(card_one),
            format_card(card_two)
        );

        if first.allows_face_up() && !face_up_announced {
            face_up_announced = true;
            println!("          (three or fewer cards left - stocks play face up)");
        }
    }

    println!("\nBattles won: {first_wins} - {second_wins}");
}

/// Compares two cards by War's rank order; suits never break ties.
fn battle(one: Card, two: Card) -> Ordering {
    War::rank_index(one.rank).cmp(&War::rank_index(two.rank))
}

fn format_card(card: Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        pip => pip.to_string(),
    };

    format!("{rank:>2}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
