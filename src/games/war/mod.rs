//! The card game War for 2 to 52 players.
//!
//! - A shuffled 52-card deck is dealt round-robin
//! - Each round every player with cards reveals their top card; the highest
//!   rank takes them all
//! - Tied players go to war: face-down cards, then one face-up card, repeated
//!   until a single highest face-up card emerges
//! - Captured cards are shuffled back into a player's hand when it runs out
//! - The game ends when one player holds all 52 cards, or in a draw when the
//!   last players run dry during a war

mod game;
mod report;
mod resolution;

pub use game::{WarGame, WarGameBuilder};
pub use report::{GameSummary, PlayerSummary, RoundOutcome, RoundReport, WarStep};
