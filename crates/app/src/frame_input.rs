//! Keyboard input collection for one rendered frame.

use cavern_app::app_loop::LISTENED_KEYS;
use macroquad::prelude::{KeyCode, is_key_pressed, is_quit_requested};

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub close_requested: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = LISTENED_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    FrameInput { keys_pressed, close_requested: is_quit_requested() }
}
