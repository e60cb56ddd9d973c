use anyhow::Result;
use cavern_core::{ContentPack, GameConfig};
use cavern_tools::{fuzz_session, init_tracing};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Drive games with random keys and check invariants")]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of games, seeded `seed`, `seed + 1`, ...
    #[arg(short, long, default_value_t = 16)]
    runs: u64,
    /// Key presses per game
    #[arg(short, long, default_value_t = 1000)]
    presses: usize,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let content = ContentPack::default();
    let config = GameConfig::default();
    tracing::info!(seed = args.seed, runs = args.runs, presses = args.presses, "fuzzing");

    let mut total_turns = 0;
    for offset in 0..args.runs {
        let run = fuzz_session(args.seed.wrapping_add(offset), args.presses, &content, &config)?;
        total_turns += run.turns;
    }

    println!("fuzzed {} games, {} turns, no invariant broken", args.runs, total_turns);
    Ok(())
}
