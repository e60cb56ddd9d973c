//! Structural checks fuzzers run after every key.

use std::collections::BTreeSet;

use super::*;
use crate::components::Blocking;
use crate::map::TileKind;
use crate::screens::GAME_SCREEN;

impl Game {
    pub fn check_invariants(&self) -> Result<(), String> {
        let Some(player_pos) = self.player_pos() else {
            return Err("player lost its position".to_string());
        };

        let mut blocked = BTreeSet::new();
        for id in self.world.entities_with::<Position>() {
            let Some(pos) = self.world.get::<Position>(id).map(|position| position.pos()) else {
                continue;
            };
            if self.map.tile_at(pos) != TileKind::Floor {
                return Err(format!("entity at ({}, {}) is not on floor", pos.x, pos.y));
            }
            if self.world.has::<Blocking>(id) && !blocked.insert(pos) {
                return Err(format!("two blocking entities share ({}, {})", pos.x, pos.y));
            }
        }

        if self.map.visible.iter().zip(&self.map.explored).any(|(&visible, &explored)| {
            visible && !explored
        }) {
            return Err("a visible tile is not marked explored".to_string());
        }

        if self.current_screen() == Some(GAME_SCREEN) && !self.quit {
            if !self.map.is_visible_to_player(player_pos) {
                return Err("player cannot see its own tile".to_string());
            }
            if self.camera.to_camera_coordinates(player_pos.x, player_pos.y).is_none() {
                return Err("camera lost the player".to_string());
            }
        }
        Ok(())
    }
}
