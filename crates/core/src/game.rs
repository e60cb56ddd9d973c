//! The game shell: owns the world, map, screens and systems, and turns one
//! key press into one step of the simulation.

mod bootstrap;
mod hash;
mod invariants;

pub use hash::format_snapshot_hash;

use rand_chacha::ChaCha8Rng;

use crate::camera::Camera;
use crate::components::Position;
use crate::config::GameConfig;
use crate::console::Console;
use crate::ecs::{Scheduler, World};
use crate::fov::FieldOfVision;
use crate::map::GameMap;
use crate::screens::{ScreenCommand, ScreenManager, ScreenView};
use crate::systems::{RENDER_SYSTEM, TurnContext};
use crate::types::{EntityId, Key, LogEvent, Pos, TurnOutcome};

pub struct Game {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    title: String,
    world: World,
    map: GameMap,
    camera: Camera,
    console: Console,
    fov: FieldOfVision,
    scheduler: Scheduler,
    screens: ScreenManager,
    player: EntityId,
    log: Vec<LogEvent>,
    quit: bool,
}

/// Results a systems pass hands back to the game shell.
struct TurnResult {
    turn_taken: bool,
    screen_request: Option<String>,
    quit_requested: bool,
}

impl Game {
    pub fn handle_key(&mut self, key: Key) -> TurnOutcome {
        if self.quit {
            return TurnOutcome::Quit;
        }
        if self.current_uses_systems() {
            self.systems_turn(key)
        } else {
            self.screen_turn(key)
        }
    }

    fn systems_turn(&mut self, key: Key) -> TurnOutcome {
        let result = self.run_systems(key);
        if result.turn_taken {
            self.turn += 1;
        }
        if result.quit_requested {
            return self.finish();
        }
        if let Some(name) = result.screen_request {
            self.switch_screen(&name);
            return TurnOutcome::Continue;
        }
        self.refresh();
        TurnOutcome::Continue
    }

    fn screen_turn(&mut self, key: Key) -> TurnOutcome {
        let command = match self.screens.current_mut() {
            Some(screen) => screen.handle_key(key),
            None => ScreenCommand::Stay,
        };
        match command {
            ScreenCommand::Stay => {
                self.refresh();
                TurnOutcome::Continue
            }
            ScreenCommand::Switch(name) => {
                self.switch_screen(&name);
                TurnOutcome::Continue
            }
            ScreenCommand::Quit => {
                self.log.push(LogEvent::QuitRequested);
                self.finish()
            }
        }
    }

    fn finish(&mut self) -> TurnOutcome {
        tracing::info!(turn = self.turn, "quit requested");
        self.quit = true;
        TurnOutcome::Quit
    }

    fn run_systems(&mut self, key: Key) -> TurnResult {
        let mut ctx = TurnContext {
            world: &mut self.world,
            map: &mut self.map,
            camera: &self.camera,
            console: &mut self.console,
            rng: &mut self.rng,
            player: self.player,
            key: Some(key),
            turn_taken: false,
            screen_request: None,
            quit_requested: false,
            log: &mut self.log,
        };
        self.scheduler.run_excluding(&mut ctx, &[RENDER_SYSTEM]);
        TurnResult {
            turn_taken: ctx.turn_taken,
            screen_request: ctx.screen_request,
            quit_requested: ctx.quit_requested,
        }
    }

    fn switch_screen(&mut self, name: &str) {
        let from = self.current_screen().unwrap_or_default().to_string();
        match self.screens.set_screen_by_name(name) {
            Ok(true) => {
                self.log.push(LogEvent::ScreenChanged { from, to: name.to_string() });
            }
            Ok(false) => {}
            Err(err) => tracing::warn!(%err, "screen switch failed"),
        }
        self.refresh();
    }

    /// Redraws the console for the current screen. Screens that use systems
    /// first follow the player with the camera and recompute FOV, then draw
    /// the map and run the render system over it.
    fn refresh(&mut self) {
        let uses_systems = self.current_uses_systems();
        if uses_systems {
            self.console.clear_all();
            self.update_view();
        }

        if let Some(screen) = self.screens.current_mut() {
            let mut view = ScreenView {
                console: &mut self.console,
                map: &self.map,
                camera: &self.camera,
                title: &self.title,
            };
            screen.render(&mut view);
        }

        if uses_systems {
            let mut ctx = TurnContext {
                world: &mut self.world,
                map: &mut self.map,
                camera: &self.camera,
                console: &mut self.console,
                rng: &mut self.rng,
                player: self.player,
                key: None,
                turn_taken: false,
                screen_request: None,
                quit_requested: false,
                log: &mut self.log,
            };
            self.scheduler.run_only(&mut ctx, RENDER_SYSTEM);
        }
    }

    fn update_view(&mut self) {
        let Some(pos) = self.player_pos() else {
            return;
        };
        self.camera.move_to(pos.x, pos.y, self.map.width as i32, self.map.height as i32);
        self.fov.ray_cast(&mut self.map, pos);
    }

    fn current_uses_systems(&self) -> bool {
        self.screens.current().is_some_and(|screen| screen.uses_systems())
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn player_pos(&self) -> Option<Pos> {
        self.world.get::<Position>(self.player).map(|position| position.pos())
    }

    pub fn current_screen(&self) -> Option<&str> {
        self.screens.current_name()
    }

    /// Turns the player has spent moving.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }
}
