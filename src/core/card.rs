//! Playing cards and the standard 52-card deck.
//!
//! ## Comparison
//!
//! Only the rank decides who wins a round. Two cards of the same rank tie,
//! whatever their suits, so `Card` deliberately does not implement `Ord`;
//! use [`Card::beats`] and [`Card::ties`] instead.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Card rank, Two low and Ace high.
///
/// The discriminant is the comparison value (2..=14).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Comparison value, 2 for Two up to 14 for Ace.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit. Identity and display only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// True if this card's rank is strictly higher than `other`'s.
    ///
    /// ```
    /// use cards_war::core::{Card, Rank, Suit};
    ///
    /// let nine = Card::new(Rank::Nine, Suit::Clubs);
    /// let two = Card::new(Rank::Two, Suit::Spades);
    /// assert!(nine.beats(&two));
    /// assert!(!two.beats(&nine));
    /// ```
    #[must_use]
    pub fn beats(&self, other: &Card) -> bool {
        self.rank > other.rank
    }

    /// True if both cards share a rank.
    #[must_use]
    pub fn ties(&self, other: &Card) -> bool {
        self.rank == other.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// The full 52-card deck, consumed by the deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a standard deck.
    pub const SIZE: usize = 52;

    /// A new deck in suit-major, rank-ascending order.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// A standard deck permuted by `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True once every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in deck order (index 0 is dealt first).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal every card round-robin to `player_count` hands.
    ///
    /// Card `i` goes to hand `i % player_count`, so each hand keeps the
    /// relative deck order of its cards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlayerCountOutOfRange`] or
    /// [`ConfigError::UnevenDeal`] if the deck cannot be split evenly.
    pub fn deal(self, player_count: usize) -> Result<Vec<Vec<Card>>, ConfigError> {
        ConfigError::check_player_count(player_count)?;

        let mut hands: Vec<Vec<Card>> = (0..player_count)
            .map(|_| Vec::with_capacity(self.cards.len() / player_count))
            .collect();
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[i % player_count].push(card);
        }
        Ok(hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_unique() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), Deck::SIZE);

        let unique: FxHashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(7));
        let b = Deck::shuffled(&mut GameRng::new(7));
        let c = Deck::shuffled(&mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::standard());
    }

    #[test]
    fn test_deal_round_robin() {
        let deck = Deck::standard();
        let order = deck.cards().to_vec();
        let hands = deck.deal(4).unwrap();

        assert_eq!(hands.len(), 4);
        for (seat, hand) in hands.iter().enumerate() {
            assert_eq!(hand.len(), 13);
            assert_eq!(hand[0], order[seat]);
            assert_eq!(hand[1], order[seat + 4]);
        }
    }

    #[test]
    fn test_deal_rejects_bad_counts() {
        assert_eq!(
            Deck::standard().deal(3),
            Err(ConfigError::UnevenDeal { player_count: 3 })
        );
        assert_eq!(
            Deck::standard().deal(1),
            Err(ConfigError::PlayerCountOutOfRange { player_count: 1 })
        );
        assert_eq!(
            Deck::standard().deal(104),
            Err(ConfigError::PlayerCountOutOfRange { player_count: 104 })
        );
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_suit_does_not_break_ties() {
        let a = Card::new(Rank::Seven, Suit::Hearts);
        let b = Card::new(Rank::Seven, Suit::Spades);

        assert!(a.ties(&b));
        assert!(!a.beats(&b));
        assert!(!b.beats(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }
}
