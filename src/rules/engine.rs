//! Rules engine trait for round-based games.
//!
//! A game implements `RulesEngine` to define:
//! - How a single round modifies state
//! - When the game is over and with what result
//!
//! `run_to_completion` is provided on top of those two.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner holding every card.
    Winner(PlayerId),
    /// The last players standing ran out of cards together in a war.
    Draw(Vec<PlayerId>),
    /// The round cap was reached; `leader` held the most cards.
    Abandoned { rounds: u32, leader: PlayerId },
}

impl GameResult {
    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw(_) | GameResult::Abandoned { .. } => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} won the game"),
            GameResult::Draw(players) => {
                let names: Vec<String> = players.iter().map(ToString::to_string).collect();
                write!(f, "draw: {} ran out of cards in a war", names.join(", "))
            }
            GameResult::Abandoned { rounds, leader } => {
                write!(f, "abandoned after {rounds} rounds with {leader} ahead")
            }
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `play_round`: Return `None` once the game is over; must be deterministic
///   for a given RNG seed
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Per-round record produced by `play_round`.
    type Round;

    /// Play one round.
    fn play_round(&mut self) -> Option<Self::Round>;

    /// Check if the game is over.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Play rounds until the game ends and return the result.
    fn run_to_completion(&mut self) -> GameResult {
        loop {
            if let Some(result) = self.is_terminal() {
                return result;
            }
            self.play_round();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_winner() {
        assert_eq!(GameResult::Winner(PlayerId::new(1)).winner(), Some(PlayerId::new(1)));

        let draw = GameResult::Draw(vec![PlayerId::new(0), PlayerId::new(1)]);
        assert_eq!(draw.winner(), None);

        let abandoned = GameResult::Abandoned { rounds: 10, leader: PlayerId::new(0) };
        assert_eq!(abandoned.winner(), None);
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::Winner(PlayerId::new(0)).to_string(), "Player 1 won the game");
        assert_eq!(
            GameResult::Draw(vec![PlayerId::new(0), PlayerId::new(2)]).to_string(),
            "draw: Player 1, Player 3 ran out of cards in a war"
        );
    }

    #[test]
    fn test_game_result_serde() {
        let result = GameResult::Abandoned { rounds: 7, leader: PlayerId::new(3) };
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
