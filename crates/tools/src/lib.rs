//! Shared pieces of the offline tools.

use std::io;

use anyhow::{Context, Result, bail};
use cavern_core::{ContentPack, Game, GameConfig, Key, TurnOutcome};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

/// Keys the fuzzer presses. `Close` is left out; quitting through the title
/// screen with `Escape` is still reachable.
pub const FUZZ_KEYS: [Key; 11] = [
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::H,
    Key::J,
    Key::K,
    Key::L,
    Key::Z,
    Key::Escape,
    Key::Other,
];

pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuzzRun {
    pub seed: u64,
    pub presses: usize,
    pub turns: u64,
    pub quit: bool,
    pub snapshot_hash: u64,
}

/// Plays one game with random keys, checking world invariants after every
/// press. Stops early if the game quits.
pub fn fuzz_session(
    seed: u64,
    max_presses: usize,
    content: &ContentPack,
    config: &GameConfig,
) -> Result<FuzzRun> {
    let mut game = Game::new(seed, content, config)
        .with_context(|| format!("failed to start game with seed {seed}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed_f022);

    let mut presses = 0;
    let mut quit = false;
    while presses < max_presses {
        let key = choose(&mut rng, &FUZZ_KEYS);
        presses += 1;
        let outcome = game.handle_key(key);
        if let Err(reason) = game.check_invariants() {
            bail!("seed {seed}: invariant broken after press {presses} ({key:?}): {reason}");
        }
        if outcome == TurnOutcome::Quit {
            quit = true;
            break;
        }
    }

    tracing::debug!(seed, presses, turns = game.turn(), quit, "fuzz session finished");
    Ok(FuzzRun { seed, presses, turns: game.turn(), quit, snapshot_hash: game.snapshot_hash() })
}
