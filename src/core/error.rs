//! Error types.
//!
//! - `ConfigError`: the game cannot start with the requested setup.
//! - `WarError`: a recoverable event during war resolution. Never fatal;
//!   the resolver turns it into an elimination from the current war.

use thiserror::Error;

use super::card::Deck;
use super::player::PlayerId;

/// Invalid game configuration. The simulation does not start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count {player_count} is outside 2..=52")]
    PlayerCountOutOfRange { player_count: usize },

    #[error("52 cards cannot be dealt evenly to {player_count} players")]
    UnevenDeal { player_count: usize },

    #[error("face-down count must be at least 1")]
    ZeroFaceDown,

    #[error("expected {expected} hands, got {actual}")]
    HandCountMismatch { expected: usize, actual: usize },

    #[error("hands hold {actual} cards, a full deck has 52")]
    IncompleteDeck { actual: usize },

    #[error("card {card} appears more than once")]
    DuplicateCard { card: String },
}

impl ConfigError {
    /// Check that `player_count` is in 2..=52 and divides 52.
    pub fn check_player_count(player_count: usize) -> Result<(), ConfigError> {
        if !(2..=Deck::SIZE).contains(&player_count) {
            return Err(ConfigError::PlayerCountOutOfRange { player_count });
        }
        if Deck::SIZE % player_count != 0 {
            return Err(ConfigError::UnevenDeal { player_count });
        }
        Ok(())
    }
}

/// Recoverable events raised while resolving a war.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WarError {
    #[error("{player} has no cards left to put into the war")]
    EmptyHandDuringWar { player: PlayerId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_player_counts() {
        for count in [2, 4, 13, 26, 52] {
            assert!(ConfigError::check_player_count(count).is_ok(), "{count} should be valid");
        }
    }

    #[test]
    fn test_invalid_player_counts() {
        for count in [0, 1, 53, 100] {
            assert_eq!(
                ConfigError::check_player_count(count),
                Err(ConfigError::PlayerCountOutOfRange { player_count: count })
            );
        }
        for count in [3, 5, 6, 7, 8, 14, 51] {
            assert_eq!(
                ConfigError::check_player_count(count),
                Err(ConfigError::UnevenDeal { player_count: count })
            );
        }
    }

    #[test]
    fn test_messages() {
        let err = ConfigError::UnevenDeal { player_count: 3 };
        assert_eq!(err.to_string(), "52 cards cannot be dealt evenly to 3 players");

        let err = WarError::EmptyHandDuringWar { player: PlayerId::new(1) };
        assert_eq!(err.to_string(), "Player 2 has no cards left to put into the war");
    }
}
