//! Round and war resolution.
//!
//! `Table` borrows the players, the pot and the RNG for the duration of one
//! round. Every card it removes from a player goes into the pot, and the pot
//! is emptied before `resolve` returns unless the round ends in a draw.

use smallvec::SmallVec;
use tracing::debug;

use super::report::{RoundOutcome, WarStep};
use crate::core::{Card, GameRng, Player, PlayerId, PlayerMap, WarError};

/// Players still in contention. Wars rarely involve more than 4.
pub(crate) type Contenders = SmallVec<[PlayerId; 4]>;

/// Players whose card has the strictly greatest rank, in input order.
pub(crate) fn highest(cards: &[(PlayerId, Card)]) -> Contenders {
    let Some(top) = cards
        .iter()
        .map(|(_, card)| card)
        .reduce(|best, card| if card.beats(best) { card } else { best })
    else {
        return Contenders::new();
    };
    cards
        .iter()
        .filter(|(_, card)| card.ties(top))
        .map(|&(player, _)| player)
        .collect()
}

/// Everything a settled round produced, minus the score snapshot.
pub(crate) struct Resolution {
    pub revealed: Vec<(PlayerId, Card)>,
    pub war_steps: Vec<WarStep>,
    pub outcome: RoundOutcome,
    pub pot_size: usize,
}

pub(crate) struct Table<'a> {
    pub players: &'a mut PlayerMap<Player>,
    pub pot: &'a mut Vec<Card>,
    pub rng: &'a mut GameRng,
    pub face_down_count: usize,
}

impl Table<'_> {
    /// Play one round between `active` players (seat order).
    pub fn resolve(&mut self, active: &[PlayerId]) -> Resolution {
        let mut revealed = Vec::with_capacity(active.len());
        for &player in active {
            if let Ok(card) = self.players[player].reveal(self.rng) {
                self.pot.push(card);
                revealed.push((player, card));
            }
        }

        let mut contenders = highest(&revealed);
        let mut war_steps = Vec::new();
        while contenders.len() > 1 {
            let step = self.war_step(&contenders);
            contenders = highest(&step.face_up);
            war_steps.push(step);
        }

        let pot_size = self.pot.len();
        let outcome = match contenders.first() {
            Some(&winner) => {
                self.players[winner].take(self.pot.drain(..));
                RoundOutcome::Won { winner }
            }
            None => {
                let exhausted = war_steps
                    .last()
                    .map(|step| step.eliminated.clone())
                    .unwrap_or_default();
                self.settle_exhausted_war(exhausted)
            }
        };

        Resolution {
            revealed,
            war_steps,
            outcome,
            pot_size,
        }
    }

    /// One face-down/face-up pass for every tied player.
    fn war_step(&mut self, contenders: &[PlayerId]) -> WarStep {
        let mut step = WarStep {
            contenders: contenders.to_vec(),
            ..WarStep::default()
        };

        for &player in contenders {
            match self.contribute(player, &mut step.face_down) {
                Ok(card) => step.face_up.push((player, card)),
                Err(err @ WarError::EmptyHandDuringWar { .. }) => {
                    debug!(%err, "forfeiting war");
                    step.eliminated.push(player);
                }
            }
        }

        step
    }

    /// Move up to `face_down_count` cards then one face-up card into the pot.
    ///
    /// Cards already moved stay in the pot when the player runs out.
    fn contribute(&mut self, player: PlayerId, face_down: &mut usize) -> Result<Card, WarError> {
        let seat = &mut self.players[player];
        for _ in 0..self.face_down_count {
            let card = seat.reveal(self.rng)?;
            self.pot.push(card);
            *face_down += 1;
        }
        let card = seat.reveal(self.rng)?;
        self.pot.push(card);
        Ok(card)
    }

    /// Every tied player ran dry in the same step.
    ///
    /// The pot goes round-robin (seat order) to whoever still holds cards.
    /// If nobody does, the game is drawn and the pot stays on the table.
    fn settle_exhausted_war(&mut self, exhausted: Vec<PlayerId>) -> RoundOutcome {
        let holders: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(id, _)| id)
            .collect();

        if holders.is_empty() {
            return RoundOutcome::Draw { exhausted };
        }

        for (i, card) in self.pot.drain(..).enumerate() {
            self.players[holders[i % holders.len()]].take([card]);
        }
        RoundOutcome::Split { recipients: holders }
    }
}
