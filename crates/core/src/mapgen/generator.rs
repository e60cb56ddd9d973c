//! Cellular-automaton cavern generation: random fill, smoothing, then
//! pruning to the single largest open region.

use crate::config::MapgenConfig;
use crate::map::TileKind;

use super::grid::{is_border, keep_largest_region, wall_neighbors};
use super::model::GeneratedCavern;
use super::seed::{derive_attempt_seed, roll_percent};

pub struct CavernGenerator<'a> {
    run_seed: u64,
    width: usize,
    height: usize,
    settings: &'a MapgenConfig,
}

impl<'a> CavernGenerator<'a> {
    pub fn new(run_seed: u64, width: usize, height: usize, settings: &'a MapgenConfig) -> Self {
        Self { run_seed, width, height, settings }
    }

    pub fn generate(&self) -> GeneratedCavern {
        let max_attempts = self.settings.max_attempts.max(1);
        let interior = self.width.saturating_sub(2) * self.height.saturating_sub(2);
        let required_open = interior * usize::from(self.settings.min_open_percent);

        let mut attempt = 0;
        loop {
            let seed = derive_attempt_seed(self.run_seed, attempt);
            let mut tiles = self.random_fill(seed);
            for _ in 0..self.settings.smoothing_passes {
                tiles = self.smooth(&tiles);
            }
            let open = keep_largest_region(&mut tiles, self.width, self.height);
            attempt += 1;

            if open * 100 >= required_open || attempt >= max_attempts {
                tracing::info!(
                    seed = self.run_seed,
                    attempts = attempt,
                    open,
                    interior,
                    "cavern generated"
                );
                return GeneratedCavern {
                    width: self.width,
                    height: self.height,
                    tiles,
                    attempts: attempt,
                };
            }
            tracing::warn!(attempt, open, interior, "cavern too small, regenerating");
        }
    }

    fn random_fill(&self, seed: u64) -> Vec<TileKind> {
        let mut tiles = vec![TileKind::Wall; self.width * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                if is_border(self.width, self.height, x, y) {
                    continue;
                }
                let idx = y * self.width + x;
                if roll_percent(seed, idx as u64) >= self.settings.fill_percent {
                    tiles[idx] = TileKind::Floor;
                }
            }
        }
        tiles
    }

    /// One automaton step: five or more wall neighbours make a wall, four
    /// keep the cell as it was, fewer open it.
    fn smooth(&self, tiles: &[TileKind]) -> Vec<TileKind> {
        let mut next = tiles.to_vec();
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                if is_border(self.width, self.height, x, y) {
                    next[idx] = TileKind::Wall;
                    continue;
                }
                let walls = wall_neighbors(tiles, self.width, self.height, x, y);
                next[idx] = match walls {
                    5.. => TileKind::Wall,
                    4 => tiles[idx],
                    _ => TileKind::Floor,
                };
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::types::Pos;

    fn generate(seed: u64, width: usize, height: usize) -> GeneratedCavern {
        CavernGenerator::new(seed, width, height, &MapgenConfig::default()).generate()
    }

    #[test]
    fn same_inputs_produce_byte_identical_caverns() {
        let a = generate(123_456, 60, 30);
        let b = generate(123_456, 60, 30);
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a.attempts, b.attempts);
    }

    #[test]
    fn different_seeds_produce_different_caverns() {
        let a = generate(1, 60, 30);
        let b = generate(2, 60, 30);
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn default_settings_meet_the_open_area_target() {
        for seed in [1_u64, 7, 42, 999, 31_337] {
            let cavern = generate(seed, 80, 40);
            let interior = 78 * 38;
            assert!(
                cavern.open_tiles() * 100 >= interior * 35 || cavern.attempts == 8,
                "seed={seed} accepted a small cavern before exhausting attempts"
            );
            assert!(cavern.open_tiles() > 0, "seed={seed} produced no floor");
        }
    }

    #[test]
    fn unreachable_target_exhausts_every_attempt() {
        let settings =
            MapgenConfig { fill_percent: 100, max_attempts: 3, ..MapgenConfig::default() };
        let cavern = CavernGenerator::new(5, 20, 12, &settings).generate();
        assert_eq!(cavern.attempts, 3);
        assert_eq!(cavern.open_tiles(), 0);
    }

    #[test]
    fn zero_open_target_accepts_first_attempt() {
        let settings = MapgenConfig { min_open_percent: 0, ..MapgenConfig::default() };
        let cavern = CavernGenerator::new(5, 20, 12, &settings).generate();
        assert_eq!(cavern.attempts, 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn caverns_are_walled_and_connected(
            seed in any::<u64>(),
            width in 8_usize..60,
            height in 8_usize..40,
        ) {
            let cavern = generate(seed, width, height);
            prop_assert!(border_is_solid(&cavern), "seed={seed} left a hole in the border");
            prop_assert!(all_floor_connected(&cavern), "seed={seed} produced disjoint caves");
        }
    }

    fn border_is_solid(cavern: &GeneratedCavern) -> bool {
        (0..cavern.height).all(|y| {
            (0..cavern.width).all(|x| {
                !is_border(cavern.width, cavern.height, x, y)
                    || cavern.tile_at(Pos { y: y as i32, x: x as i32 }) == TileKind::Wall
            })
        })
    }

    fn all_floor_connected(cavern: &GeneratedCavern) -> bool {
        let mut floor = Vec::new();
        for y in 0..cavern.height {
            for x in 0..cavern.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                if cavern.tile_at(pos) == TileKind::Floor {
                    floor.push(pos);
                }
            }
        }
        let Some(start) = floor.first().copied() else {
            return true;
        };

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in [pos.offset(0, -1), pos.offset(1, 0), pos.offset(0, 1), pos.offset(-1, 0)] {
                if cavern.tile_at(next) == TileKind::Floor && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen.len() == floor.len()
    }
}
