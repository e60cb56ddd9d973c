//! World construction for a new run: cavern, player, creatures, systems
//! and screens.

use rand_chacha::rand_core::{Rng, SeedableRng};

use super::*;
use crate::components::{Blocking, Movement, Player, SimpleAi};
use crate::content::{ContentPack, CreatureDef};
use crate::error::GameError;
use crate::mapgen::generate_cavern;
use crate::screens::{GAME_SCREEN, GameScreen, TITLE_SCREEN, TitleScreen};
use crate::systems::{
    INPUT_PRIORITY, InputSystem, RENDER_PRIORITY, RenderSystem, SIMPLE_AI_PRIORITY, SimpleAiSystem,
};

impl Game {
    pub fn new(seed: u64, content: &ContentPack, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        content.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cavern = generate_cavern(seed, config.map_width, config.map_height, &config.mapgen);
        let attempts = cavern.attempts;
        let map = cavern.into_map();

        let mut open = map.walkable_tiles();
        if open.is_empty() {
            return Err(GameError::InvalidConfig("generated cavern has no open floor".into()));
        }

        let mut world = World::new();
        let player_pos = take_random(&mut open, &mut rng);
        let player = spawn(&mut world, &content.player, player_pos);
        world.insert(player, Player);

        let mut spawned = 0;
        while spawned < config.creature_count && !open.is_empty() {
            let Some(def) = content.pick_weighted(rng.next_u64()) else {
                break;
            };
            let pos = take_random(&mut open, &mut rng);
            spawn(&mut world, def, pos);
            spawned += 1;
        }

        let mut scheduler = Scheduler::new();
        scheduler.add_system(Box::new(InputSystem), INPUT_PRIORITY);
        scheduler.add_system(Box::new(SimpleAiSystem), SIMPLE_AI_PRIORITY);
        scheduler.add_system(Box::new(RenderSystem), RENDER_PRIORITY);

        let mut screens = ScreenManager::new();
        screens.add_screen(TITLE_SCREEN, Box::new(TitleScreen))?;
        screens.add_screen(GAME_SCREEN, Box::new(GameScreen))?;
        screens.set_screen_by_name(TITLE_SCREEN)?;

        tracing::info!(
            seed,
            width = map.width,
            height = map.height,
            creatures = spawned,
            attempts,
            "game created"
        );

        let mut game = Self {
            seed,
            turn: 0,
            rng,
            title: config.title.clone(),
            world,
            map,
            camera: Camera::new(config.window_width as i32, config.window_height as i32),
            console: Console::new(config.window_width, config.window_height),
            fov: FieldOfVision::new(config.fov_radius),
            scheduler,
            screens,
            player,
            log: Vec::new(),
            quit: false,
        };
        game.update_view();
        game.refresh();
        Ok(game)
    }
}

fn take_random(open: &mut Vec<Pos>, rng: &mut ChaCha8Rng) -> Pos {
    let idx = rng.next_u64() as usize % open.len();
    open.swap_remove(idx)
}

fn spawn(world: &mut World, def: &CreatureDef, pos: Pos) -> EntityId {
    let id = world.create_entity();
    world.insert(id, Position::from(pos));
    world.insert(id, def.appearance());
    if def.movement {
        world.insert(id, Movement);
    }
    if def.blocking {
        world.insert(id, Blocking);
    }
    if def.simple_ai {
        world.insert(id, SimpleAi);
    }
    id
}
