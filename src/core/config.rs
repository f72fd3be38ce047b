//! Game configuration.
//!
//! `WarConfig` is the whole setup of a game: how many seats, how many cards
//! go face-down in each war step, and an optional round cap. Build it through
//! `WarGameBuilder` or directly, then call [`WarConfig::validate`].

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Number of players. Must be in 2..=52 and divide 52.
    pub player_count: usize,

    /// Cards each tied player puts face-down before the face-up card.
    pub face_down_count: usize,

    /// Stop after this many rounds. `None` for unlimited, in which case the
    /// game's round history grows without bound until the game ends.
    pub max_rounds: Option<u32>,
}

impl WarConfig {
    /// Default number of face-down cards per war step.
    pub const DEFAULT_FACE_DOWN: usize = 3;

    /// Default round cap.
    pub const DEFAULT_MAX_ROUNDS: u32 = 100_000;

    /// Create a configuration with default war rules.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            face_down_count: Self::DEFAULT_FACE_DOWN,
            max_rounds: Some(Self::DEFAULT_MAX_ROUNDS),
        }
    }

    /// Set the face-down count.
    #[must_use]
    pub fn with_face_down_count(mut self, count: usize) -> Self {
        self.face_down_count = count;
        self
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Check the configuration before a game starts.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::PlayerCountOutOfRange`] / [`ConfigError::UnevenDeal`]
    ///   for a player count that cannot split the deck.
    /// - [`ConfigError::ZeroFaceDown`] if no cards would go face-down.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_player_count(self.player_count)?;
        if self.face_down_count == 0 {
            return Err(ConfigError::ZeroFaceDown);
        }
        Ok(())
    }

    /// Cards each player holds right after the deal.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        super::card::Deck::SIZE / self.player_count
    }
}

impl Default for WarConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WarConfig::default();

        assert_eq!(config.player_count, 2);
        assert_eq!(config.face_down_count, 3);
        assert_eq!(config.max_rounds, Some(100_000));
        assert_eq!(config.hand_size(), 26);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = WarConfig::new(4)
            .with_face_down_count(1)
            .with_max_rounds(None);

        assert_eq!(config.face_down_count, 1);
        assert_eq!(config.max_rounds, None);
        assert_eq!(config.hand_size(), 13);
    }

    #[test]
    fn test_validate_rejects_bad_setups() {
        assert_eq!(
            WarConfig::new(5).validate(),
            Err(ConfigError::UnevenDeal { player_count: 5 })
        );
        assert_eq!(
            WarConfig::new(1).validate(),
            Err(ConfigError::PlayerCountOutOfRange { player_count: 1 })
        );
        assert_eq!(
            WarConfig::new(2).with_face_down_count(0).validate(),
            Err(ConfigError::ZeroFaceDown)
        );
    }
}
