//! A playing-card deck engine with per-game hand evaluation and optional
//! `no_std` support.
//!
//! The crate models a standard deck as a [`Deck`] parameterized by a game
//! [`Variant`] — [`War`], [`Belote`], or [`SixtySix`]. The variant supplies
//! the rank order, the suit grouping, and the hand size; the deck supplies
//! construction, sorting, shuffling, and dealing; the dealt [`Hand`] exposes
//! the game's evaluation predicates.
//!
//! # Example
//!
//! ```
//! use deckrs::{Belote, Deck};
//!
//! let mut deck = Deck::<Belote>::new();
//! assert_eq!(deck.size(), 32);
//!
//! let hand = deck.deal();
//! assert_eq!(hand.size(), 8);
//! assert_eq!(deck.size(), 24);
//!
//! // The freshly built deck is sorted, so the first eight cards are the
//! // whole spade suit: an eight-card run holding the king-queen pair.
//! assert!(hand.has_quint());
//! assert!(hand.has_belote());
//! ```
//!
//! The [`snake`] and [`sequences`] modules are self-contained utilities that
//! share no state with the card types.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod sequences;
pub mod snake;
pub mod variant;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::ParseCardError;
pub use hand::Hand;
pub use variant::{Belote, SixtySix, Variant, War};
