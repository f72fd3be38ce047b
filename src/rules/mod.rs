//! Rules engine trait and game results.
//!
//! Games implement `RulesEngine` to define:
//! - How a round modifies state
//! - Win/draw conditions

pub mod engine;

pub use engine::{GameResult, RulesEngine};
