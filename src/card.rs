//! Card value types: suit, rank, and the card itself.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in the grouping order decks are sorted by.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| s.eq_ignore_ascii_case(suit.name()))
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank: the pip values 2 through 10 plus the four face values.
///
/// Declaration order is the plain two-to-ace order. Each game plays its
/// ranks in its own order, defined by
/// [`Variant::RANKS`](crate::Variant::RANKS), not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Pip 2.
    Two,
    /// Pip 3.
    Three,
    /// Pip 4.
    Four,
    /// Pip 5.
    Five,
    /// Pip 6.
    Six,
    /// Pip 7.
    Seven,
    /// Pip 8.
    Eight,
    /// Pip 9.
    Nine,
    /// Pip 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks in two-to-ace order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| s.eq_ignore_ascii_case(rank.name()))
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Cards are immutable value objects: two cards are equal iff rank and suit
/// both match, and there is no identity beyond the pair. Any rank/suit
/// combination is accepted here — whether a rank belongs to a given game is
/// the deck's concern, not the card's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses the [`Display`](fmt::Display) form, e.g. `"Queen of Hearts"`.
///
/// Rank and suit names are matched case-insensitively; the `" of "`
/// separator is literal.
///
/// ```
/// use deckrs::{Card, Rank, Suit};
///
/// let card: Card = "10 of Clubs".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Clubs));
/// ```
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s
            .split_once(" of ")
            .ok_or(ParseCardError::MissingSeparator)?;
        Ok(Self::new(rank.trim().parse()?, suit.trim().parse()?))
    }
}
