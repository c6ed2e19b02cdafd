//! Hands dealt from a deck, and the per-game evaluation predicates.
//!
//! [`Hand`] is generic over the game [`Variant`]; the variant-specific
//! evaluators are inherent impls on `Hand<War>`, `Hand<Belote>`, and
//! `Hand<SixtySix>` in the submodules.

mod belote;
mod sixty_six;
mod war;

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::card::{Card, Rank};
use crate::variant::Variant;

/// Cards held after a deal.
///
/// A hand owns its cards outright; there is no back-reference to the deck it
/// was dealt from. Evaluation predicates are read-only and never fail —
/// a condition that cannot be met (empty hand, missing suit) is simply
/// `false`. War's [`play_card`](Hand::play_card) is the one method that
/// removes a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand<V: Variant> {
    cards: Vec<Card>,
    variant: PhantomData<V>,
}

impl<V: Variant> Hand<V> {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            variant: PhantomData,
        }
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards in the hand.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the hand holds a king and a queen of the same suit.
    #[must_use]
    pub fn has_marriage(&self) -> bool {
        marriage(&self.cards)
    }
}

impl<V: Variant> fmt::Display for Hand<V> {
    /// One card description per line, in deal order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl<'a, V: Variant> IntoIterator for &'a Hand<V> {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<V: Variant> IntoIterator for Hand<V> {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Scans `cards` for a king and a queen sharing a suit.
///
/// The variants reuse this over pre-filtered subsets — Sixty-Six splits the
/// hand around the trump suit before asking.
pub(crate) fn marriage(cards: &[Card]) -> bool {
    cards
        .iter()
        .filter(|card| card.rank == Rank::King)
        .any(|king| {
            cards
                .iter()
                .any(|card| card.rank == Rank::Queen && card.suit == king.suit)
        })
}
