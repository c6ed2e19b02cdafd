use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::variant::SixtySix;

use super::{Hand, marriage};

impl Hand<SixtySix> {
    /// Returns whether the hand holds a marriage outside the trump suit,
    /// worth twenty points.
    #[must_use]
    pub fn has_twenty(&self, trump: Suit) -> bool {
        let side_suits: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| card.suit != trump)
            .copied()
            .collect();
        marriage(&side_suits)
    }

    /// Returns whether the hand holds the trump-suit marriage, worth forty
    /// points.
    #[must_use]
    pub fn has_forty(&self, trump: Suit) -> bool {
        let trumps: Vec<Card> = self
            .cards
            .iter()
            .filter(|card| card.suit == trump)
            .copied()
            .collect();
        marriage(&trumps)
    }
}
