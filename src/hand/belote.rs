use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::variant::{Belote, Variant};

use super::Hand;

impl Hand<Belote> {
    /// The highest card of `suit` under Belote's rank order, or `None` if
    /// the hand holds no card of that suit.
    ///
    /// Note that 10 outranks the king here.
    #[must_use]
    pub fn highest_of_suit(&self, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .filter(|card| card.suit == suit)
            .max_by_key(|card| Belote::rank_index(card.rank))
            .copied()
    }

    /// Returns whether the hand holds a king and queen of the same suit —
    /// the announceable belote.
    #[must_use]
    pub fn has_belote(&self) -> bool {
        self.has_marriage()
    }

    /// Returns whether some suit holds three rank-consecutive cards.
    #[must_use]
    pub fn has_tierce(&self) -> bool {
        self.has_run(3)
    }

    /// Returns whether some suit holds four rank-consecutive cards.
    #[must_use]
    pub fn has_quarte(&self) -> bool {
        self.has_run(4)
    }

    /// Returns whether some suit holds five rank-consecutive cards.
    #[must_use]
    pub fn has_quint(&self) -> bool {
        self.has_run(5)
    }

    /// Returns whether the hand holds exactly four cards of `rank`.
    #[must_use]
    pub fn has_carre(&self, rank: Rank) -> bool {
        self.cards.iter().filter(|card| card.rank == rank).count() == 4
    }

    /// Returns whether the hand holds all four jacks.
    #[must_use]
    pub fn has_carre_of_jacks(&self) -> bool {
        self.has_carre(Rank::Jack)
    }

    /// Returns whether the hand holds all four nines.
    #[must_use]
    pub fn has_carre_of_nines(&self) -> bool {
        self.has_carre(Rank::Nine)
    }

    /// Returns whether the hand holds all four aces.
    #[must_use]
    pub fn has_carre_of_aces(&self) -> bool {
        self.has_carre(Rank::Ace)
    }

    /// Looks for `len` cards of one suit at consecutive positions in
    /// Belote's rank table.
    ///
    /// Consecutive means adjacent in the table, not numerically: 9 and jack
    /// are consecutive, 9 and 10 are not.
    fn has_run(&self, len: usize) -> bool {
        let mut sorted = self.cards.clone();
        sorted.sort_by(Belote::compare);

        Belote::SUITS.iter().any(|&suit| {
            let group: Vec<Card> = sorted
                .iter()
                .filter(|card| card.suit == suit)
                .copied()
                .collect();
            group
                .windows(len)
                .any(|window| window.windows(2).all(|pair| consecutive(pair[0], pair[1])))
        })
    }
}

/// Sorted order puts the higher rank first, so `first` must sit exactly one
/// position above `second` in the rank table.
fn consecutive(first: Card, second: Card) -> bool {
    match (
        Belote::rank_index(first.rank),
        Belote::rank_index(second.rank),
    ) {
        (Some(high), Some(low)) => high == low + 1,
        _ => false,
    }
}
