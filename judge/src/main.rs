use clap::Parser;
use heuristic_bot::HeuristicBot;
use judge::{play_game, Config, ConsoleHuman, ConsoleSpectator, GameResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed, which decides the board size, the first player and the AI's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// How many illegal moves in a row a player may make before losing the game
    #[arg(short, long, default_value_t = judge::DEFAULT_MAX_ILLEGAL_ATTEMPTS)]
    max_illegal_attempts: usize,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut config = Config::from_seed(seed);
    config.max_illegal_attempts = args.max_illegal_attempts.max(1);

    let mut computer = HeuristicBot::new(StdRng::seed_from_u64(config.rng.gen()));
    let mut human = ConsoleHuman::new(std::io::stdin().lock(), std::io::stdout());
    let mut spectator = ConsoleSpectator::new(std::io::stdout());

    match play_game(&mut config, &mut human, &mut computer, &mut spectator)? {
        GameResult::Finished(outcome) => info!(%outcome, "Game finished"),
        GameResult::IllegalMoveByPlayer { player, err } => {
            warn!(%player, %err, "Game lost through illegal moves");
            println!("{} made too many illegal moves and loses the game.", player);
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Standard output belongs to the game itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
