//! Core types: cards, players, RNG, configuration and errors.
//!
//! Everything here is independent of the round/war rules in `games::war`.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{Card, Deck, Rank, Suit};
pub use config::WarConfig;
pub use error::{ConfigError, WarError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
