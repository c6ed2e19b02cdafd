use crate::card::Card;
use crate::variant::War;

use super::Hand;

impl Hand<War> {
    /// Removes and returns the bottom card of the stock — the opposite end
    /// from where the deal placed cards.
    ///
    /// `None` once the stock is exhausted; the end-of-game draw-down never
    /// fails.
    pub fn play_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns whether the stock is low enough that cards must now be
    /// played face up: three or fewer remaining.
    #[must_use]
    pub fn allows_face_up(&self) -> bool {
        self.cards.len() <= 3
    }
}
