//! Round records and the end-of-game summary.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId, PlayerMap};
use crate::rules::GameResult;

/// One face-down/face-up pass of a war.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarStep {
    /// Tied players asked to contribute, in seat order.
    pub contenders: Vec<PlayerId>,
    /// Face-down cards added to the pot by all contenders.
    pub face_down: usize,
    /// Face-up cards, one per contender that could still play.
    pub face_up: Vec<(PlayerId, Card)>,
    /// Contenders that ran out of cards and forfeit this war.
    pub eliminated: Vec<PlayerId>,
}

impl WarStep {
    /// Cards this step moved into the pot.
    #[must_use]
    pub fn cards_contributed(&self) -> usize {
        self.face_down + self.face_up.len()
    }
}

/// How the pot left the table at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A single player took the whole pot.
    Won { winner: PlayerId },
    /// Every tied player dropped out together; the pot went round-robin to
    /// the players still holding cards.
    Split { recipients: Vec<PlayerId> },
    /// Every tied player dropped out and nobody else holds cards.
    Draw { exhausted: Vec<PlayerId> },
}

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: u32,
    /// Opening cards, one per active player.
    pub revealed: Vec<(PlayerId, Card)>,
    /// War passes, empty when the opening reveal had a unique winner.
    pub war_steps: Vec<WarStep>,
    pub outcome: RoundOutcome,
    /// Cards at stake when the round was settled.
    pub pot_size: usize,
    /// Cards held by each player after the round.
    pub scores: PlayerMap<usize>,
}

impl RoundReport {
    /// True if the round went to war.
    #[must_use]
    pub fn is_war(&self) -> bool {
        !self.war_steps.is_empty()
    }

    /// The player who took the pot, if one did.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            RoundOutcome::Won { winner } => Some(winner),
            RoundOutcome::Split { .. } | RoundOutcome::Draw { .. } => None,
        }
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}:", self.round)?;
        for (i, (player, card)) in self.revealed.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{player} {card}")?;
        }
        if self.is_war() {
            write!(f, " | war x{}", self.war_steps.len())?;
        }
        match &self.outcome {
            RoundOutcome::Won { winner } => write!(f, " | {winner} takes {} cards", self.pot_size),
            RoundOutcome::Split { recipients } => write!(
                f,
                " | {} cards split between {} players",
                self.pot_size,
                recipients.len()
            ),
            RoundOutcome::Draw { exhausted } => write!(
                f,
                " | {} players exhausted, {} cards left on the table",
                exhausted.len(),
                self.pot_size
            ),
        }
    }
}

/// Final standing of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player: PlayerId,
    /// Cards held at the end.
    pub score: usize,
    /// Cards captured over the whole game.
    pub cards_won: usize,
}

/// End-of-game summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Seed that reproduces this game.
    pub seed: u64,
    pub result: GameResult,
    pub rounds: u32,
    /// Rounds that went to war.
    pub wars: u32,
    pub players: Vec<PlayerSummary>,
}

impl GameSummary {
    /// Summary line for `player`, if seated.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.player == player)
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} after {} rounds ({} wars), seed {}",
            self.result, self.rounds, self.wars, self.seed
        )?;
        if let Some(winner) = self.result.winner().and_then(|w| self.player(w)) {
            writeln!(
                f,
                "{} holds {} cards and captured {} cards in total",
                winner.player, winner.score, winner.cards_won
            )?;
        }
        for p in &self.players {
            let name = p.player.to_string();
            writeln!(f, "  {name:<10} score {:>2}  won {:>5}", p.score, p.cards_won)?;
        }
        Ok(())
    }
}
