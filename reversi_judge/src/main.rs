use std::time::Duration;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi::{Greedy, RandomMover, Strategy};
use reversi_judge::{play_interactive, play_matchup, Config};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How long the opponent "thinks" before moving, in milliseconds
    #[arg(long, default_value_t = 1000)]
    think_ms: u64,

    /// Let a stand-in strategy play the human side instead of reading moves from stdin
    #[arg(long, default_value_t = false)]
    autoplay: bool,

    /// The strategy that plays the human side in autoplay mode
    #[arg(long, value_enum, default_value_t = StandIn::Random)]
    stand_in: StandIn,

    /// How many games to play in autoplay mode
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print final game states (or the match score) as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum StandIn {
    Random,
    Greedy,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        think_delay: Duration::from_millis(args.think_ms),
        json: args.json,
    };

    if !args.autoplay {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        return play_interactive(&config, stdin, stdout);
    }

    let mut stand_in: Box<dyn Strategy> = match args.stand_in {
        StandIn::Random => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed);
            Box::new(RandomMover::new(StdRng::seed_from_u64(seed)))
        }
        StandIn::Greedy => Box::new(Greedy),
    };

    let match_score = play_matchup(stand_in.as_mut(), args.num_games)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&match_score)?);
    } else {
        println!("{}", match_score.summary(stand_in.name()));
    }

    Ok(())
}

// Logs go to stderr so they do not interleave with the board on stdout.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
