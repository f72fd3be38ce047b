//! War game state, builder and rules.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::field::display;
use tracing::{debug, info};

use super::report::{GameSummary, PlayerSummary, RoundOutcome, RoundReport};
use super::resolution::Table;
use crate::core::{Card, ConfigError, Deck, GameRng, Player, PlayerId, PlayerMap, WarConfig};
use crate::rules::{GameResult, RulesEngine};

/// A game of War in progress.
///
/// Cloning is cheap enough to snapshot a game mid-way: the round history
/// is a persistent `im::Vector`.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: WarConfig,
    players: PlayerMap<Player>,
    /// Cards on the table. Empty between rounds unless the game was drawn.
    pot: Vec<Card>,
    /// Stream used to shuffle won piles back into hands.
    rng: GameRng,
    seed: u64,
    round: u32,
    wars: u32,
    /// Set when a round ends with every remaining player exhausted.
    draw: Option<Vec<PlayerId>>,
    history: Vector<RoundReport>,
}

/// Builder for creating a WarGame.
///
/// ```
/// use cards_war::games::war::WarGameBuilder;
///
/// let game = WarGameBuilder::new()
///     .player_count(4)
///     .face_down_count(3)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.players().player_count(), 4);
/// assert_eq!(game.total_cards(), 52);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WarGameBuilder {
    config: WarConfig,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn face_down_count(mut self, count: usize) -> Self {
        self.config.face_down_count = count;
        self
    }

    /// Round cap; `None` plays until a winner or a draw.
    ///
    /// Every round is kept in [`WarGame::history`], so an uncapped game
    /// holds one report per round for as long as it runs.
    pub fn max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.config.max_rounds = max_rounds;
        self
    }

    /// Deal a shuffled deck seeded with `seed`.
    pub fn build(self, seed: u64) -> Result<WarGame, ConfigError> {
        WarGame::initialize(self.config, GameRng::new(seed))
    }

    /// Deal explicit hands instead of a shuffled deck.
    pub fn build_with_hands(
        self,
        hands: Vec<Vec<Card>>,
        seed: u64,
    ) -> Result<WarGame, ConfigError> {
        WarGame::from_hands(self.config, hands, GameRng::new(seed))
    }
}

impl WarGame {
    /// Shuffle a standard deck with `rng` and deal it round-robin.
    ///
    /// The deal uses the `"deal"` context stream of `rng`; won-pile refills
    /// use `rng` itself.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`WarConfig::validate`].
    pub fn initialize(config: WarConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut deal_rng = rng.for_context("deal");
        let hands = Deck::shuffled(&mut deal_rng).deal(config.player_count)?;

        info!(
            players = config.player_count,
            hand_size = config.hand_size(),
            seed = rng.seed(),
            "dealt a shuffled deck"
        );
        Ok(Self::seat(config, hands, rng))
    }

    /// Start from explicit hands (top card first).
    ///
    /// Hands may differ in size but together must form one full deck.
    ///
    /// # Errors
    ///
    /// - Any [`WarConfig::validate`] error
    /// - [`ConfigError::HandCountMismatch`] if there is not one hand per player
    /// - [`ConfigError::IncompleteDeck`] / [`ConfigError::DuplicateCard`] if the
    ///   hands are not exactly the 52 distinct cards
    pub fn from_hands(
        config: WarConfig,
        hands: Vec<Vec<Card>>,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if hands.len() != config.player_count {
            return Err(ConfigError::HandCountMismatch {
                expected: config.player_count,
                actual: hands.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for card in hands.iter().flatten() {
            if !seen.insert(*card) {
                return Err(ConfigError::DuplicateCard { card: card.to_string() });
            }
        }
        if seen.len() != Deck::SIZE {
            return Err(ConfigError::IncompleteDeck { actual: seen.len() });
        }

        Ok(Self::seat(config, hands, rng))
    }

    fn seat(config: WarConfig, hands: Vec<Vec<Card>>, rng: GameRng) -> Self {
        let players = PlayerMap::from_vec(
            hands
                .into_iter()
                .enumerate()
                .map(|(i, hand)| Player::new(PlayerId::new(i as u8), hand))
                .collect(),
        );

        Self {
            config,
            players,
            pot: Vec::new(),
            seed: rng.seed(),
            rng,
            round: 0,
            wars: 0,
            draw: None,
            history: Vector::new(),
        }
    }

    /// All seats, including eliminated players.
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Cards on the table.
    pub fn pot(&self) -> &[Card] {
        &self.pot
    }

    /// Rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds that went to war so far.
    pub fn wars(&self) -> u32 {
        self.wars
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reports of every round played, oldest first.
    pub fn history(&self) -> &Vector<RoundReport> {
        &self.history
    }

    /// Players still holding cards, in seat order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| !p.is_eliminated())
            .map(|(id, _)| id)
            .collect()
    }

    /// Cards held by all players plus the pot. Always 52.
    pub fn total_cards(&self) -> usize {
        self.players.values().map(Player::score).sum::<usize>() + self.pot.len()
    }

    /// Highest score, lowest seat on ties.
    fn leader(&self) -> PlayerId {
        self.players
            .iter()
            .max_by(|(a_id, a), (b_id, b)| a.score().cmp(&b.score()).then(b_id.cmp(a_id)))
            .map_or(PlayerId::new(0), |(id, _)| id)
    }

    /// Snapshot of the game so far; `result` is `None` until it ends.
    pub fn summary(&self) -> Option<GameSummary> {
        let result = self.is_terminal()?;
        Some(GameSummary {
            seed: self.seed,
            result,
            rounds: self.round,
            wars: self.wars,
            players: self
                .players
                .iter()
                .map(|(id, p)| PlayerSummary {
                    player: id,
                    score: p.score(),
                    cards_won: p.cards_won(),
                })
                .collect(),
        })
    }
}

impl RulesEngine for WarGame {
    type Round = RoundReport;

    fn play_round(&mut self) -> Option<RoundReport> {
        if self.is_terminal().is_some() {
            return None;
        }

        let active = self.active_players();
        self.round += 1;

        let resolution = Table {
            players: &mut self.players,
            pot: &mut self.pot,
            rng: &mut self.rng,
            face_down_count: self.config.face_down_count,
        }
        .resolve(&active);

        let report = RoundReport {
            round: self.round,
            revealed: resolution.revealed,
            war_steps: resolution.war_steps,
            outcome: resolution.outcome,
            pot_size: resolution.pot_size,
            scores: self.players.map(|_, p| p.score()),
        };

        if report.is_war() {
            self.wars += 1;
            debug!(
                round = self.round,
                steps = report.war_steps.len(),
                pot = report.pot_size,
                winner = report.winner().map(display),
                "war resolved"
            );
        }
        info!("{report}");

        let drawn = matches!(report.outcome, RoundOutcome::Draw { .. });
        for &player in &active {
            if self.players[player].is_eliminated() && !drawn {
                info!(round = self.round, %player, "player is out of cards");
            }
        }

        if let RoundOutcome::Draw { exhausted } = &report.outcome {
            info!(
                round = self.round,
                players = ?exhausted,
                left_on_table = self.pot.len(),
                "game drawn"
            );
            self.draw = Some(exhausted.clone());
        }

        debug_assert_eq!(
            self.total_cards(),
            Deck::SIZE,
            "cards lost in round {}",
            self.round
        );

        self.history.push_back(report.clone());
        Some(report)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if let Some(exhausted) = &self.draw {
            return Some(GameResult::Draw(exhausted.clone()));
        }

        let active = self.active_players();
        if let [winner] = active.as_slice() {
            return Some(GameResult::Winner(*winner));
        }

        match self.config.max_rounds {
            Some(max) if self.round >= max => Some(GameResult::Abandoned {
                rounds: self.round,
                leader: self.leader(),
            }),
            _ => None,
        }
    }
}
