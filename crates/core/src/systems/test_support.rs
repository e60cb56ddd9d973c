//! Shared fixtures for system tests.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::TurnContext;
use crate::camera::Camera;
use crate::components::{Appearance, Blocking, Movement, Player, Position, SimpleAi};
use crate::console::{Console, ENTITY_LAYER, TOP_LAYER};
use crate::ecs::World;
use crate::map::GameMap;
use crate::types::{EntityId, Glyph, Key, LogEvent, Pos, Rgb};

pub(crate) struct TurnFixture {
    pub world: World,
    pub map: GameMap,
    pub camera: Camera,
    pub console: Console,
    pub rng: ChaCha8Rng,
    pub player: EntityId,
    pub log: Vec<LogEvent>,
}

impl TurnFixture {
    /// Walled room with the player standing in its centre. The camera
    /// covers the whole room.
    pub fn open_room(width: usize, height: usize) -> Self {
        let mut world = World::new();
        let player = world.create_entity();
        let centre = Pos::new(width as i32 / 2, height as i32 / 2);
        world.insert(player, Position::from(centre));
        world.insert(player, appearance('@', TOP_LAYER));
        world.insert(player, Movement);
        world.insert(player, Blocking);
        world.insert(player, Player);

        Self {
            world,
            map: GameMap::new(width, height),
            camera: Camera::new(width as i32, height as i32),
            console: Console::new(width, height),
            rng: ChaCha8Rng::seed_from_u64(7),
            player,
            log: Vec::new(),
        }
    }

    pub fn context(&mut self, key: Option<Key>) -> TurnContext<'_> {
        TurnContext {
            world: &mut self.world,
            map: &mut self.map,
            camera: &self.camera,
            console: &mut self.console,
            rng: &mut self.rng,
            player: self.player,
            key,
            turn_taken: false,
            screen_request: None,
            quit_requested: false,
            log: &mut self.log,
        }
    }

    pub fn player_pos(&self) -> Pos {
        self.world
            .get::<Position>(self.player)
            .map(|position| position.pos())
            .unwrap_or(Pos::new(-1, -1))
    }

    pub fn place_player(&mut self, pos: Pos) {
        self.world.update(self.player, Position::from(pos));
    }

    pub fn spawn_wanderer(&mut self, pos: Pos, ch: char) -> EntityId {
        let id = self.world.create_entity();
        self.world.insert(id, Position::from(pos));
        self.world.insert(id, appearance(ch, ENTITY_LAYER));
        self.world.insert(id, Movement);
        self.world.insert(id, Blocking);
        self.world.insert(id, SimpleAi);
        id
    }
}

pub(crate) fn appearance(ch: char, layer: usize) -> Appearance {
    Appearance {
        glyph: Glyph::new(ch, Rgb::WHITE),
        layer,
        name: ch.to_string(),
        description: String::new(),
    }
}
