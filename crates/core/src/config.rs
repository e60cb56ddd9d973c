//! Tunable game settings. Every field has a default so a config file only
//! needs to name what it changes.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::GameError;

pub const MIN_MAP_SIDE: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapgenConfig {
    pub fill_percent: u8,
    pub smoothing_passes: u8,
    pub min_open_percent: u8,
    pub max_attempts: u32,
}

impl Default for MapgenConfig {
    fn default() -> Self {
        Self { fill_percent: 45, smoothing_passes: 4, min_open_percent: 35, max_attempts: 8 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: usize,
    pub window_height: usize,
    pub map_width: usize,
    pub map_height: usize,
    pub fov_radius: u32,
    pub creature_count: usize,
    pub title: String,
    pub mapgen: MapgenConfig,
    pub font_path: Option<String>,
    pub cell_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 50,
            window_height: 25,
            map_width: 80,
            map_height: 40,
            fov_radius: 8,
            creature_count: 12,
            title: "Gogue Roguelike".to_string(),
            mapgen: MapgenConfig::default(),
            font_path: None,
            cell_size: 16,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, GameError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(invalid("window size must be non-zero"));
        }
        if self.map_width < MIN_MAP_SIDE || self.map_height < MIN_MAP_SIDE {
            return Err(invalid(&format!("map must be at least {MIN_MAP_SIDE}x{MIN_MAP_SIDE}")));
        }
        if self.cell_size == 0 {
            return Err(invalid("cell_size must be non-zero"));
        }
        let mapgen = &self.mapgen;
        if mapgen.fill_percent > 100 || mapgen.min_open_percent > 100 {
            return Err(invalid("mapgen percentages must be at most 100"));
        }
        if mapgen.max_attempts == 0 {
            return Err(invalid("mapgen.max_attempts must be non-zero"));
        }
        Ok(())
    }

    /// Fingerprint of every setting, recorded in journals so a session is
    /// only replayed under the config it was played with.
    pub fn config_hash(&self) -> u64 {
        match serde_json::to_vec(self) {
            Ok(bytes) => xxh3_64(&bytes),
            Err(_) => 0,
        }
    }
}

fn invalid(reason: &str) -> GameError {
    GameError::InvalidConfig(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = GameConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let raw = r#"
            window_width = 60
            title = "Deep Caves"

            [mapgen]
            fill_percent = 40
        "#;
        let config = GameConfig::from_toml_str(raw).expect("partial config");
        assert_eq!(config.window_width, 60);
        assert_eq!(config.window_height, 25);
        assert_eq!(config.title, "Deep Caves");
        assert_eq!(config.mapgen.fill_percent, 40);
        assert_eq!(config.mapgen.smoothing_passes, 4);
    }

    #[test]
    fn validation_rejects_degenerate_settings() {
        let tiny_map = GameConfig { map_width: 4, ..GameConfig::default() };
        assert!(matches!(tiny_map.validate(), Err(GameError::InvalidConfig(_))));

        let mut overfilled = GameConfig::default();
        overfilled.mapgen.fill_percent = 101;
        assert!(overfilled.validate().is_err());

        let err = GameConfig::from_toml_str("window_height = 0").expect_err("zero height");
        assert!(err.to_string().contains("window size"), "unexpected error: {err}");
    }

    #[test]
    fn config_hash_tracks_every_setting() {
        let base = GameConfig::default();
        assert_eq!(base.config_hash(), GameConfig::default().config_hash());

        let fewer = GameConfig { creature_count: 3, ..GameConfig::default() };
        assert_ne!(fewer.config_hash(), base.config_hash());

        let mut smoother = GameConfig::default();
        smoother.mapgen.smoothing_passes = 2;
        assert_ne!(smoother.config_hash(), base.config_hash());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("window_width = \"wide\"").expect_err("bad type");
        assert!(matches!(err, GameError::ConfigParse(_)));
    }
}
