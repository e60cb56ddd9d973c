//! Per-turn systems and the context they share.
//! Each system reads the pending key and mutates the world through a
//! [`TurnContext`]; the scheduler decides which ones run and in what order.

mod input;
mod render;
mod simple_ai;

#[cfg(test)]
pub(crate) mod test_support;

use rand_chacha::ChaCha8Rng;

use crate::camera::Camera;
use crate::components::{Blocking, Position};
use crate::console::Console;
use crate::ecs::World;
use crate::map::GameMap;
use crate::types::{EntityId, Key, LogEvent, Pos};

pub use input::InputSystem;
pub use render::RenderSystem;
pub use simple_ai::SimpleAiSystem;

pub const INPUT_SYSTEM: &str = "input";
pub const SIMPLE_AI_SYSTEM: &str = "simple_ai";
pub const RENDER_SYSTEM: &str = "render";

pub const INPUT_PRIORITY: i32 = 100;
pub const SIMPLE_AI_PRIORITY: i32 = 50;
pub const RENDER_PRIORITY: i32 = 0;

pub struct TurnContext<'a> {
    pub world: &'a mut World,
    pub map: &'a mut GameMap,
    pub camera: &'a Camera,
    pub console: &'a mut Console,
    pub rng: &'a mut ChaCha8Rng,
    pub player: EntityId,
    pub key: Option<Key>,
    /// Set once the player has spent the turn; creatures only act after it.
    pub turn_taken: bool,
    pub screen_request: Option<String>,
    pub quit_requested: bool,
    pub log: &'a mut Vec<LogEvent>,
}

/// True when any positioned entity carrying the blocking flag stands at (x, y).
pub fn blocking_entity_at(world: &World, x: i32, y: i32) -> bool {
    world.entities_with::<Blocking>().into_iter().any(|id| {
        world.get::<Position>(id).is_some_and(|position| position.x == x && position.y == y)
    })
}

/// True when `pos` is open floor with no blocking entity in it.
pub fn is_free(world: &World, map: &GameMap, pos: Pos) -> bool {
    !map.is_blocked(pos) && !blocking_entity_at(world, pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Movement;

    #[test]
    fn blocking_lookup_ignores_non_blocking_entities() {
        let mut world = World::new();
        let ghost = world.create_entity();
        world.insert(ghost, Position { x: 3, y: 3 });
        world.insert(ghost, Movement);
        assert!(!blocking_entity_at(&world, 3, 3));

        let wall = world.create_entity();
        world.insert(wall, Position { x: 3, y: 3 });
        world.insert(wall, Blocking);
        assert!(blocking_entity_at(&world, 3, 3));
        assert!(!blocking_entity_at(&world, 4, 3));
    }

    #[test]
    fn free_cells_need_floor_and_no_blocker() {
        let mut world = World::new();
        let map = GameMap::new(6, 6);
        assert!(is_free(&world, &map, Pos::new(2, 2)));
        assert!(!is_free(&world, &map, Pos::new(0, 2)));
        assert!(!is_free(&world, &map, Pos::new(-1, 2)));

        let rock = world.create_entity();
        world.insert(rock, Position { x: 2, y: 2 });
        world.insert(rock, Blocking);
        assert!(!is_free(&world, &map, Pos::new(2, 2)));
    }
}
