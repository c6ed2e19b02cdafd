//! Deck construction, ordering, and dealing.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;
use crate::variant::Variant;

/// An ordered sequence of cards for one game variant.
///
/// Index 0 is the top of the deck. A deck exclusively owns its cards until
/// they are drawn or dealt, at which point ownership moves to the caller:
/// after a deal, the deck and the hand partition what the deck held before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<V: Variant> {
    cards: Vec<Card>,
    variant: PhantomData<V>,
}

impl<V: Variant> Deck<V> {
    /// Builds the variant's full deck, one card per rank/suit pair, sorted
    /// by the variant comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, SixtySix, War};
    ///
    /// assert_eq!(Deck::<War>::new().size(), 52);
    /// assert_eq!(Deck::<SixtySix>::new().size(), 24);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(V::RANKS.len() * V::SUITS.len());
        for &suit in V::SUITS {
            for &rank in V::RANKS {
                cards.push(Card::new(rank, suit));
            }
        }

        let mut deck = Self::from_cards(cards);
        deck.sort();
        deck
    }

    /// Wraps a caller-supplied card list verbatim — no sort, no validation.
    ///
    /// This is how a deck state that is not the full sorted deck is
    /// constructed, e.g. after cards have been removed elsewhere.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            variant: PhantomData,
        }
    }

    /// Number of cards currently in the deck.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in deck order, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Removes and returns the top card.
    ///
    /// `None` on an empty deck — running out of cards is a normal end state,
    /// not a failure.
    pub fn draw_top(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes and returns the bottom card, or `None` on an empty deck.
    pub fn draw_bottom(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card, without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// The bottom card, without removing it.
    #[must_use]
    pub fn bottom_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Sorts the deck in place: suits in table order, and within a suit the
    /// highest rank first. Sorting an already-sorted deck is a no-op.
    pub fn sort(&mut self) {
        self.cards.sort_by(V::compare);
    }

    /// Shuffles the deck with the thread-local RNG.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the deck with the supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffles the deck with a ChaCha8 RNG seeded from `seed`.
    ///
    /// The same seed over the same cards produces the same order, which is
    /// what replays and tests want.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Deals a hand from the top of the deck.
    ///
    /// Moves `min(HAND_SIZE, size)` cards in top-to-bottom order; dealing
    /// from a short deck silently yields a short hand.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Deck, SixtySix};
    ///
    /// let mut deck = Deck::<SixtySix>::new();
    /// let hand = deck.deal();
    /// assert_eq!(hand.size(), 6);
    /// assert_eq!(deck.size(), 18);
    /// ```
    #[must_use = "dealing removes the cards from the deck"]
    pub fn deal(&mut self) -> Hand<V> {
        let count = V::HAND_SIZE.min(self.cards.len());
        Hand::from_cards(self.cards.drain(..count).collect())
    }
}

impl<V: Variant> Default for Deck<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> fmt::Display for Deck<V> {
    /// One card description per line, top card first.
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

impl<V: Variant> IntoIterator for Deck<V> {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, V: Variant> IntoIterator for &'a Deck<V> {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
