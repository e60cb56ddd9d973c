use cavern_core::{Game, Key, TurnOutcome};
use macroquad::prelude::KeyCode;

/// Native keys the app listens for, in the order they are fed to the game
/// when several arrive in one frame.
pub const LISTENED_KEYS: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::H,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::Z,
    KeyCode::Escape,
];

pub fn key_for_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::H => Key::H,
        KeyCode::J => Key::J,
        KeyCode::K => Key::K,
        KeyCode::L => Key::L,
        KeyCode::Z => Key::Z,
        KeyCode::Escape => Key::Escape,
        _ => return None,
    };
    Some(key)
}

#[derive(Default)]
pub struct AppState {
    finished: bool,
    /// Keys fed to the game during the current frame's `tick()` call.
    /// Drained by the caller after each tick to persist to the journal file.
    pub accepted_keys: Vec<Key>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feeds one frame of key presses to the game, one turn per key. A
    /// window close request is fed last, as `Key::Close`.
    pub fn tick(
        &mut self,
        game: &mut Game,
        keys_pressed: &[KeyCode],
        close_requested: bool,
    ) -> TurnOutcome {
        self.accepted_keys.clear();
        if self.finished {
            return TurnOutcome::Quit;
        }

        let close = close_requested.then_some(Key::Close);
        for key in keys_pressed.iter().filter_map(|&code| key_for_code(code)).chain(close) {
            self.accepted_keys.push(key);
            if game.handle_key(key) == TurnOutcome::Quit {
                self.finished = true;
                return TurnOutcome::Quit;
            }
        }
        TurnOutcome::Continue
    }
}
