//! Output of cavern generation.

use crate::map::{GameMap, TileKind};
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCavern {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    /// How many generation attempts ran before this layout was accepted.
    pub attempts: u32,
}

impl GeneratedCavern {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }
        bytes
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y * self.width + x]
    }

    pub fn open_tiles(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile == TileKind::Floor).count()
    }

    pub fn into_map(self) -> GameMap {
        GameMap::from_tiles(self.width, self.height, self.tiles)
    }
}
