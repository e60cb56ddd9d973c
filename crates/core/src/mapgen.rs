//! Procedural cavern generation split into seed, grid and generator parts.

pub mod model;

mod generator;
mod grid;
mod seed;

pub use generator::CavernGenerator;
pub use model::GeneratedCavern;

use crate::config::MapgenConfig;

pub fn generate_cavern(
    run_seed: u64,
    width: usize,
    height: usize,
    settings: &MapgenConfig,
) -> GeneratedCavern {
    CavernGenerator::new(run_seed, width, height, settings).generate()
}

#[cfg(test)]
mod tests {
    use super::{CavernGenerator, MapgenConfig};

    #[test]
    fn generate_cavern_matches_generator_output() {
        let settings = MapgenConfig::default();
        let from_helper = super::generate_cavern(123, 40, 20, &settings);
        let from_generator = CavernGenerator::new(123, 40, 20, &settings).generate();
        assert_eq!(from_helper, from_generator);
    }
}
