//! Error types for card parsing.
//!
//! Deck operations themselves do not error: drawing or peeking at an empty
//! deck yields `None`, and dealing from a short deck yields a short hand.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank is not one of 2-10, jack, queen, king, or ace.
    #[error("unknown rank")]
    UnknownRank,
    /// The suit is not spades, hearts, diamonds, or clubs.
    #[error("unknown suit")]
    UnknownSuit,
    /// The `" of "` separator between rank and suit is missing.
    #[error("missing ` of ` separator")]
    MissingSeparator,
}
