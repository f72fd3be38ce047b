//! cards-war - run a full game of War from the command line.
//!
//! Round-by-round results are logged through `tracing` to stderr: every
//! round and elimination at `info`, war details at `debug`. The final
//! summary goes to stdout, as text or as JSON with `--json`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cards_war::{GameRng, RulesEngine, WarConfig, WarGame};

#[derive(Parser, Debug, Clone)]
#[command(name = "cards-war")]
#[command(version, about = "Simulate a game of War between 2 to 52 players")]
#[command(
    long_about = "Deals a shuffled 52-card deck and plays War until one player holds every card
or the last players run out of cards in a war.

Every flag can also be set through its CARDS_WAR_* environment variable.
RUST_LOG overrides --log-level."
)]
struct Args {
    /// Number of players (2, 4, 13, 26 or 52)
    #[arg(short, long, env = "CARDS_WAR_PLAYERS", default_value_t = 2)]
    players: usize,

    /// Shuffle seed; a random one is picked and logged when omitted
    #[arg(short, long, env = "CARDS_WAR_SEED")]
    seed: Option<u64>,

    /// Cards each tied player puts face-down in a war
    #[arg(long, env = "CARDS_WAR_FACE_DOWN", default_value_t = WarConfig::DEFAULT_FACE_DOWN)]
    face_down: usize,

    /// Stop after this many rounds (0 for unlimited)
    #[arg(long, env = "CARDS_WAR_MAX_ROUNDS", default_value_t = WarConfig::DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CARDS_WAR_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn war_config(&self) -> WarConfig {
        let max_rounds = (self.max_rounds > 0).then_some(self.max_rounds);
        WarConfig::new(self.players)
            .with_face_down_count(self.face_down)
            .with_max_rounds(max_rounds)
    }
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(level))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), players = args.players, "starting game");

    let mut game = WarGame::initialize(args.war_config(), rng)
        .with_context(|| format!("cannot start a game with {} players", args.players))?;

    let result = game.run_to_completion();
    info!(%result, rounds = game.round(), wars = game.wars(), "game over");

    let summary = game
        .summary()
        .context("game finished without a result")?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        println!("{json}");
    } else {
        print!("{summary}");
    }

    Ok(())
}
