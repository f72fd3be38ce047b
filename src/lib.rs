//! # cards-war
//!
//! A deterministic simulation of the card game War.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every shuffle draws from a `GameRng` the caller
//!    provides. The same seed replays the same game.
//!
//! 2. **N-Player**: Any player count that splits the deck evenly (2, 4, 13,
//!    26 or 52). Wars between more than two players are first-class.
//!
//! 3. **Conservation**: Cards only move between hands, won piles and the pot;
//!    the total is 52 after every round.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, players, RNG, configuration, errors
//! - `rules`: `RulesEngine` trait and `GameResult`
//! - `games`: The War game itself
//!
//! ## Example
//!
//! ```
//! use cards_war::{RulesEngine, WarGameBuilder};
//!
//! let mut game = WarGameBuilder::new().player_count(2).build(42).unwrap();
//! let result = game.run_to_completion();
//!
//! let summary = game.summary().unwrap();
//! assert_eq!(summary.result, result);
//! ```

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, ConfigError, Deck, GameRng, Player, PlayerId, PlayerMap, Rank, Suit,
    WarConfig, WarError,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::war::{
    GameSummary, PlayerSummary, RoundOutcome, RoundReport, WarGame, WarGameBuilder, WarStep,
};
