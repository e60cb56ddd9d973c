use crate::types::{Glyph, Pos, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

const VISIBLE_WALL: Glyph = Glyph::new('#', Rgb::LIGHT_GRAY);
const EXPLORED_WALL: Glyph = Glyph::new('#', Rgb::DARK_GRAY);
const VISIBLE_FLOOR: Glyph = Glyph::new('.', Rgb::GRAY);
const EXPLORED_FLOOR: Glyph = Glyph::new('.', Rgb::DARK_GRAY);

#[derive(Clone)]
pub struct GameMap {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub visible: Vec<bool>,
    pub explored: Vec<bool>,
}

impl GameMap {
    /// An open room: floor everywhere except a one-tile wall border.
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = vec![TileKind::Floor; width * height];
        for x in 0..width {
            tiles[x] = TileKind::Wall;
            tiles[(height - 1) * width + x] = TileKind::Wall;
        }
        for y in 0..height {
            tiles[y * width] = TileKind::Wall;
            tiles[y * width + (width - 1)] = TileKind::Wall;
        }
        Self::from_tiles(width, height, tiles)
    }

    pub fn from_tiles(width: usize, height: usize, tiles: Vec<TileKind>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self {
            width,
            height,
            tiles,
            visible: vec![false; width * height],
            explored: vec![false; width * height],
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        match self.index(pos) {
            Some(idx) => self.tiles[idx],
            None => TileKind::Wall,
        }
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if let Some(idx) = self.index(pos) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_blocked(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Wall
    }

    pub fn blocks_sight(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Wall
    }

    pub fn is_visible_to_player(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.visible[idx])
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.explored[idx])
    }

    /// Seeing a tile also explores it.
    pub fn set_visible(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.visible[idx] = true;
            self.explored[idx] = true;
        }
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    pub fn make_all_visible(&mut self) {
        self.visible.fill(true);
        self.explored.fill(true);
    }

    pub fn walkable_tiles(&self) -> Vec<Pos> {
        let mut tiles = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                if !self.is_blocked(pos) {
                    tiles.push(pos);
                }
            }
        }
        tiles
    }

    /// Glyph used to draw a tile, dimmed once it leaves view. Unexplored
    /// tiles draw nothing.
    pub fn tile_glyph(&self, pos: Pos) -> Option<Glyph> {
        let idx = self.index(pos)?;
        if !self.explored[idx] {
            return None;
        }
        let lit = self.visible[idx];
        Some(match (self.tiles[idx], lit) {
            (TileKind::Wall, true) => VISIBLE_WALL,
            (TileKind::Wall, false) => EXPLORED_WALL,
            (TileKind::Floor, true) => VISIBLE_FLOOR,
            (TileKind::Floor, false) => EXPLORED_FLOOR,
        })
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as usize) * self.width + (pos.x as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_blocked_and_invisible() {
        let map = GameMap::new(5, 5);
        for pos in [Pos::new(-1, 2), Pos::new(2, -1), Pos::new(5, 2), Pos::new(2, 5)] {
            assert!(map.is_blocked(pos));
            assert!(map.blocks_sight(pos));
            assert!(!map.is_visible_to_player(pos));
            assert!(!map.is_explored(pos));
        }
    }

    #[test]
    fn border_is_wall_and_interior_is_floor() {
        let map = GameMap::new(5, 4);
        assert!(map.is_blocked(Pos::new(0, 0)));
        assert!(map.is_blocked(Pos::new(4, 3)));
        assert!(!map.is_blocked(Pos::new(1, 1)));
        assert_eq!(map.walkable_tiles().len(), 3 * 2);
    }

    #[test]
    fn explored_tiles_stay_explored_after_visibility_clears() {
        let mut map = GameMap::new(5, 5);
        let pos = Pos::new(2, 2);
        map.set_visible(pos);
        assert_eq!(map.tile_glyph(pos), Some(VISIBLE_FLOOR));

        map.clear_visible();
        assert!(!map.is_visible_to_player(pos));
        assert!(map.is_explored(pos));
        assert_eq!(map.tile_glyph(pos), Some(EXPLORED_FLOOR));
        assert_eq!(map.tile_glyph(Pos::new(1, 1)), None);
    }

    #[test]
    fn make_all_visible_reveals_every_tile() {
        let mut map = GameMap::new(6, 6);
        map.make_all_visible();
        assert!(map.visible.iter().all(|&v| v));
        assert!(map.explored.iter().all(|&e| e));
        assert_eq!(map.tile_glyph(Pos::new(0, 0)), Some(VISIBLE_WALL));
    }
}
