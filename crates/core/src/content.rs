//! Data-driven creature definitions.

use std::collections::BTreeSet;
use std::iter;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::components::Appearance;
use crate::console::LAYER_COUNT;
use crate::error::GameError;
use crate::types::{Glyph, Rgb};

const DEFAULT_CONTENT_JSON: &str = include_str!("../content/creatures.json");

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub glyph: char,
    pub color: Rgb,
    #[serde(default = "default_layer")]
    pub layer: usize,
    #[serde(default)]
    pub spawn_weight: u32,
    #[serde(default)]
    pub movement: bool,
    #[serde(default)]
    pub blocking: bool,
    #[serde(default)]
    pub simple_ai: bool,
}

fn default_layer() -> usize {
    1
}

impl CreatureDef {
    pub fn appearance(&self) -> Appearance {
        Appearance {
            glyph: Glyph::new(self.glyph, self.color),
            layer: self.layer,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    pub player: CreatureDef,
    pub creatures: Vec<CreatureDef>,
}

impl ContentPack {
    pub fn from_json_str(raw: &str) -> Result<Self, GameError> {
        let pack: Self = serde_json::from_str(raw)?;
        pack.validate()?;
        Ok(pack)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let mut ids = BTreeSet::new();
        for def in iter::once(&self.player).chain(&self.creatures) {
            if def.layer >= LAYER_COUNT {
                return Err(GameError::InvalidContent(format!(
                    "'{}' uses layer {} but only {LAYER_COUNT} layers exist",
                    def.id, def.layer
                )));
            }
            if def.glyph.is_whitespace() {
                return Err(GameError::InvalidContent(format!("'{}' has a blank glyph", def.id)));
            }
            if !ids.insert(def.id.as_str()) {
                return Err(GameError::InvalidContent(format!("duplicate id '{}'", def.id)));
            }
        }
        if !self.creatures.is_empty() && self.total_spawn_weight() == 0 {
            return Err(GameError::InvalidContent("every creature has zero spawn weight".into()));
        }
        Ok(())
    }

    pub fn total_spawn_weight(&self) -> u64 {
        self.creatures.iter().map(|def| u64::from(def.spawn_weight)).sum()
    }

    /// Picks a creature by spawn weight from a raw random roll.
    pub fn pick_weighted(&self, roll: u64) -> Option<&CreatureDef> {
        let total = self.total_spawn_weight();
        if total == 0 {
            return None;
        }
        let mut remaining = roll % total;
        for def in &self.creatures {
            let weight = u64::from(def.spawn_weight);
            if remaining < weight {
                return Some(def);
            }
            remaining -= weight;
        }
        None
    }

    pub fn content_hash(&self) -> u64 {
        match serde_json::to_vec(self) {
            Ok(bytes) => xxh3_64(&bytes),
            Err(_) => 0,
        }
    }
}

impl Default for ContentPack {
    fn default() -> Self {
        match Self::from_json_str(DEFAULT_CONTENT_JSON) {
            Ok(pack) => pack,
            Err(err) => panic!("embedded creature data is invalid: {err}"),
        }
    }
}
