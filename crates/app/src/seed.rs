//! Command-line arguments and world seed selection.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cavern", about = "Explore a procedurally generated cavern")]
pub struct AppArgs {
    /// World seed. A fresh one is generated when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

impl AppArgs {
    pub fn seed_choice(&self, generated_seed: u64) -> SeedChoice {
        match self.seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> Result<AppArgs, clap::Error> {
        AppArgs::try_parse_from(parts)
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let args = parse(&["cavern"]).expect("no flags is valid");
        assert_eq!(args.seed_choice(9_876_543), SeedChoice::Generated(9_876_543));
        assert!(!args.verbose);
    }

    #[test]
    fn parses_seed_flag_with_separate_or_inline_value() {
        let separate = parse(&["cavern", "--seed", "4242"]).expect("valid --seed should parse");
        assert_eq!(separate.seed_choice(1), SeedChoice::Cli(4_242));

        let inline = parse(&["cavern", "--seed=2026", "--verbose"]).expect("inline seed");
        assert_eq!(inline.seed_choice(1).value(), 2_026);
        assert!(inline.verbose);
    }

    #[test]
    fn rejects_missing_non_numeric_or_repeated_seeds() {
        assert!(parse(&["cavern", "--seed"]).is_err());
        assert!(parse(&["cavern", "--seed=abc"]).is_err());
        assert!(parse(&["cavern", "--seed=1", "--seed", "2"]).is_err());
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
