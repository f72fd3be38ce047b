//! Player identification, per-player storage and player hands.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting up to 52 players (one card each).
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A hand played from the front plus a won pile. When the hand runs dry the
//! won pile is shuffled and becomes the new hand.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};
use tracing::trace;

use super::card::Card;
use super::error::WarError;
use super::rng::GameRng;

/// Player seat identifier.
///
/// Indices are 0-based (`PlayerId(0)` is the first seat) but displayed
/// 1-based: `PlayerId(0)` prints as "Player 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use cards_war::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use cards_war::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::from_vec(vec![13usize; 4]);
/// assert_eq!(scores[PlayerId::new(0)], 13);
///
/// scores[PlayerId::new(1)] = 15;
/// assert_eq!(scores[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by applying `f` to every entry.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player: hand, won pile and a running capture count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    /// Unplayed cards; the front is the top.
    hand: VecDeque<Card>,
    /// Captured cards, recycled into the hand when it runs out.
    won: Vec<Card>,
    /// Total cards captured over the whole game.
    cards_won: usize,
}

impl Player {
    /// Seat a player holding `hand` (first card on top).
    pub fn new(id: PlayerId, hand: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            hand: hand.into_iter().collect(),
            won: Vec::new(),
            cards_won: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Unplayed cards, top first.
    pub fn hand(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter()
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Captured cards not yet recycled into the hand.
    #[must_use]
    pub fn won_pile(&self) -> &[Card] {
        &self.won
    }

    /// Cards currently held: hand plus won pile.
    #[must_use]
    pub fn score(&self) -> usize {
        self.hand.len() + self.won.len()
    }

    /// Total cards captured since the deal.
    #[must_use]
    pub fn cards_won(&self) -> usize {
        self.cards_won
    }

    /// A player holding no cards at all is out of the game.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.score() == 0
    }

    /// Refill an empty hand from the shuffled won pile.
    ///
    /// Returns true if the hand was refilled.
    pub fn refill_hand(&mut self, rng: &mut GameRng) -> bool {
        if !self.hand.is_empty() || self.won.is_empty() {
            return false;
        }
        rng.shuffle(&mut self.won);
        self.hand.extend(self.won.drain(..));
        trace!(player = %self.id, cards = self.hand.len(), "refilled hand from won pile");
        true
    }

    /// Remove and return the top card, refilling from the won pile first if
    /// the hand is empty.
    ///
    /// # Errors
    ///
    /// [`WarError::EmptyHandDuringWar`] if the player holds no cards.
    pub fn reveal(&mut self, rng: &mut GameRng) -> Result<Card, WarError> {
        self.refill_hand(rng);
        self.hand
            .pop_front()
            .ok_or(WarError::EmptyHandDuringWar { player: self.id })
    }

    /// Add captured cards to the won pile.
    pub fn take(&mut self, cards: impl IntoIterator<Item = Card>) {
        let before = self.won.len();
        self.won.extend(cards);
        self.cards_won += self.won.len() - before;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(format!("{}", p1), "Player 2");
    }

    #[test]
    fn test_player_map_from_vec() {
        let map = PlayerMap::from_vec(vec![0, 10, 20, 30]);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_from_vec_and_map() {
        let map = PlayerMap::from_vec(vec![1, 2, 3]);
        let doubled = map.map(|_, v| v * 2);

        let pairs: Vec<_> = doubled.iter().collect();
        assert_eq!(
            pairs,
            vec![(PlayerId::new(0), &2), (PlayerId::new(1), &4), (PlayerId::new(2), &6)]
        );
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<i32>> = PlayerMap::from_vec(vec![Vec::new(), Vec::new()]);
        map[PlayerId::new(1)].push(7);

        assert!(map[PlayerId::new(0)].is_empty());
        assert_eq!(map[PlayerId::new(1)], vec![7]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_vec(vec![1, 2]);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::from_vec(Vec::new());
    }

    #[test]
    fn test_reveal_plays_from_front() {
        let mut rng = GameRng::new(1);
        let mut player = Player::new(PlayerId::new(0), [card(Rank::Two), card(Rank::Nine)]);

        assert_eq!(player.reveal(&mut rng), Ok(card(Rank::Two)));
        assert_eq!(player.reveal(&mut rng), Ok(card(Rank::Nine)));
        assert_eq!(
            player.reveal(&mut rng),
            Err(WarError::EmptyHandDuringWar { player: PlayerId::new(0) })
        );
        assert!(player.is_eliminated());
    }

    #[test]
    fn test_take_counts_cards_won() {
        let mut player = Player::new(PlayerId::new(1), [card(Rank::Ace)]);
        player.take([card(Rank::Two), card(Rank::Three)]);
        player.take([card(Rank::Four)]);

        assert_eq!(player.cards_won(), 3);
        assert_eq!(player.score(), 4);
        assert_eq!(player.hand_len(), 1);
        assert_eq!(player.won_pile().len(), 3);
    }

    #[test]
    fn test_refill_from_won_pile() {
        let mut rng = GameRng::new(3);
        let mut player = Player::new(PlayerId::new(0), std::iter::empty());
        player.take([card(Rank::Five), card(Rank::Six), card(Rank::Seven)]);

        let revealed = player.reveal(&mut rng).unwrap();

        assert!([Rank::Five, Rank::Six, Rank::Seven].contains(&revealed.rank));
        assert_eq!(player.hand_len(), 2);
        assert!(player.won_pile().is_empty());
        // Recycling does not count as winning cards again
        assert_eq!(player.cards_won(), 3);
    }

    #[test]
    fn test_refill_skipped_when_hand_not_empty() {
        let mut rng = GameRng::new(3);
        let mut player = Player::new(PlayerId::new(0), [card(Rank::King)]);
        player.take([card(Rank::Queen)]);

        assert!(!player.refill_hand(&mut rng));
        assert_eq!(player.hand_len(), 1);
        assert_eq!(player.won_pile().len(), 1);
    }
}
