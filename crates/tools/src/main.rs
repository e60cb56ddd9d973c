use std::path::PathBuf;

use anyhow::{Context, Result};
use cavern_core::config_file::load_startup_config;
use cavern_core::{ContentPack, format_snapshot_hash, load_journal_from_file, replay};
use cavern_tools::init_tracing;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded session journal", long_about = None)]
struct Args {
    /// Path to the JSONL journal to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// TOML config the session was played with. Defaults to the file the
    /// desktop app would load: `CAVERN_CONFIG`, then the platform config dir.
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let journal = load_journal_from_file(&args.journal)
        .with_context(|| format!("failed to load journal {}", args.journal.display()))?;
    let (config, source) = load_startup_config(args.config.as_deref())?;
    tracing::info!(?source, "replaying under config");
    let content = ContentPack::default();

    let result = replay(&content, &config, &journal).context("replay failed")?;

    println!("seed: {}", journal.seed);
    println!("keys: {} of {}", result.keys_consumed, journal.len());
    println!("turns: {}", result.turns);
    println!("quit: {}", result.quit);
    println!("snapshot_hash: {}", format_snapshot_hash(result.snapshot_hash));
    Ok(())
}
