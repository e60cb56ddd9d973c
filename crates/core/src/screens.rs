//! Title/game screen state machine.

use crate::camera::Camera;
use crate::console::{Console, MAP_LAYER};
use crate::error::GameError;
use crate::map::GameMap;
use crate::types::{Key, Pos, Rgb};

pub const TITLE_SCREEN: &str = "title";
pub const GAME_SCREEN: &str = "game";

const INSTRUCTION: &str = "Press {Up Arrow} to begin! Or Press {ESC} to exit";

/// What a screen may read and draw while rendering.
pub struct ScreenView<'a> {
    pub console: &'a mut Console,
    pub map: &'a GameMap,
    pub camera: &'a Camera,
    pub title: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenCommand {
    Stay,
    Switch(String),
    Quit,
}

pub trait Screen {
    fn enter(&mut self) {}
    fn exit(&mut self) {}
    /// Screens that use systems hand keys to the scheduler instead of
    /// [`Screen::handle_key`].
    fn uses_systems(&self) -> bool;
    fn render(&mut self, view: &mut ScreenView<'_>);
    fn handle_key(&mut self, key: Key) -> ScreenCommand;
}

#[derive(Debug, Default)]
pub struct TitleScreen;

impl Screen for TitleScreen {
    fn uses_systems(&self) -> bool {
        false
    }

    fn render(&mut self, view: &mut ScreenView<'_>) {
        view.console.clear_all();
        let centre_x = view.console.width() as i32 / 2;
        let centre_y = view.console.height() as i32 / 2;
        print_centred(view.console, centre_x, centre_y, view.title);
        print_centred(view.console, centre_x, centre_y + 2, INSTRUCTION);
    }

    fn handle_key(&mut self, key: Key) -> ScreenCommand {
        match key {
            Key::Escape | Key::Close => ScreenCommand::Quit,
            Key::Up => ScreenCommand::Switch(GAME_SCREEN.to_string()),
            _ => ScreenCommand::Stay,
        }
    }
}

fn print_centred(console: &mut Console, centre_x: i32, y: i32, text: &str) {
    let half = text.chars().count() as i32 / 2;
    console.print_text(centre_x - half, y, text, Rgb::WHITE, MAP_LAYER);
}

#[derive(Debug, Default)]
pub struct GameScreen;

impl Screen for GameScreen {
    fn uses_systems(&self) -> bool {
        true
    }

    /// Draws every explored tile the camera covers onto the map layer.
    fn render(&mut self, view: &mut ScreenView<'_>) {
        let camera = view.camera;
        for cy in 0..camera.height {
            for cx in 0..camera.width {
                let (mx, my) = camera.to_map_coordinates(cx, cy);
                if let Some(glyph) = view.map.tile_glyph(Pos::new(mx, my)) {
                    view.console.print_glyph(cx, cy, glyph, MAP_LAYER);
                }
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> ScreenCommand {
        match key {
            Key::Escape | Key::Close => ScreenCommand::Quit,
            Key::Down => ScreenCommand::Switch(TITLE_SCREEN.to_string()),
            _ => ScreenCommand::Stay,
        }
    }
}

struct NamedScreen {
    name: String,
    screen: Box<dyn Screen>,
}

#[derive(Default)]
pub struct ScreenManager {
    screens: Vec<NamedScreen>,
    current: Option<usize>,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_screen(&mut self, name: &str, screen: Box<dyn Screen>) -> Result<(), GameError> {
        if self.position(name).is_some() {
            return Err(GameError::DuplicateScreen(name.to_string()));
        }
        self.screens.push(NamedScreen { name: name.to_string(), screen });
        Ok(())
    }

    /// Makes `name` the current screen. Returns whether the current screen
    /// actually changed.
    pub fn set_screen_by_name(&mut self, name: &str) -> Result<bool, GameError> {
        let Some(next) = self.position(name) else {
            tracing::warn!(screen = name, "rejected switch to unknown screen");
            return Err(GameError::UnknownScreen(name.to_string()));
        };
        if self.current == Some(next) {
            return Ok(false);
        }
        if let Some(previous) = self.current {
            self.screens[previous].screen.exit();
        }
        self.screens[next].screen.enter();
        self.current = Some(next);
        tracing::info!(screen = name, "screen changed");
        Ok(true)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.map(|idx| self.screens[idx].name.as_str())
    }

    pub fn current(&self) -> Option<&dyn Screen> {
        self.current.map(|idx| self.screens[idx].screen.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        let idx = self.current?;
        Some(self.screens[idx].screen.as_mut())
    }

    pub fn screen_names(&self) -> Vec<&str> {
        self.screens.iter().map(|entry| entry.name.as_str()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.screens.iter().position(|entry| entry.name == name)
    }
}
