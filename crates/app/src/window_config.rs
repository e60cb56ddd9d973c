//! Window configuration for the desktop app.

use cavern_core::GameConfig;
use macroquad::window::Conf;

/// Sizes the window to hold exactly the console grid.
pub fn build_window_conf(config: &GameConfig) -> Conf {
    let cell = i32::from(config.cell_size);
    Conf {
        window_title: config.title.clone(),
        window_width: config.window_width as i32 * cell,
        window_height: config.window_height as i32 * cell,
        window_resizable: false,
        ..Default::default()
    }
}
