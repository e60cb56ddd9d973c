use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// Logical keys understood by the simulation. Front ends translate their
/// native key codes into these before handing them to [`crate::Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    H,
    J,
    K,
    L,
    Z,
    Escape,
    Close,
    Other,
}

impl Key {
    /// Arrow keys and their vi equivalents map to a one-cell step.
    pub fn movement_delta(self) -> Option<(i32, i32)> {
        match self {
            Key::Right | Key::L => Some((1, 0)),
            Key::Left | Key::H => Some((-1, 0)),
            Key::Up | Key::K => Some((0, -1)),
            Key::Down | Key::J => Some((0, 1)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(220, 50, 47);
    pub const GREEN: Rgb = Rgb::new(80, 200, 80);
    pub const BLUE: Rgb = Rgb::new(60, 110, 230);
    pub const YELLOW: Rgb = Rgb::new(240, 220, 60);
    pub const ORANGE: Rgb = Rgb::new(245, 150, 40);
    pub const BROWN: Rgb = Rgb::new(150, 95, 45);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);
    pub const PURPLE: Rgb = Rgb::new(140, 70, 200);
    pub const CYAN: Rgb = Rgb::new(60, 200, 210);
    pub const MAGENTA: Rgb = Rgb::new(210, 60, 180);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim().to_ascii_lowercase();
        if let Some(hex) = name.strip_prefix('#') {
            return parse_hex(hex);
        }
        let color = match name.as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "orange" => Self::ORANGE,
            "brown" => Self::BROWN,
            "gray" | "grey" => Self::GRAY,
            "light gray" | "light grey" => Self::LIGHT_GRAY,
            "dark gray" | "dark grey" => Self::DARK_GRAY,
            "purple" => Self::PURPLE,
            "cyan" => Self::CYAN,
            "magenta" => Self::MAGENTA,
            _ => return None,
        };
        Some(color)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value).ok_or_else(|| format!("unknown color '{value}'"))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub color: Rgb,
}

impl Glyph {
    pub const EMPTY: Glyph = Glyph { ch: ' ', color: Rgb::WHITE };

    pub const fn new(ch: char, color: Rgb) -> Self {
        Self { ch, color }
    }

    pub fn is_empty(&self) -> bool {
        self.ch == ' '
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    ScreenChanged { from: String, to: String },
    PlayerMoved { from: Pos, to: Pos },
    MovementBlocked { at: Pos },
    MapRevealed,
    CreatureMoved { entity: EntityId, from: Pos, to: Pos },
    QuitRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vi_keys_mirror_arrow_keys() {
        assert_eq!(Key::H.movement_delta(), Key::Left.movement_delta());
        assert_eq!(Key::J.movement_delta(), Key::Down.movement_delta());
        assert_eq!(Key::K.movement_delta(), Key::Up.movement_delta());
        assert_eq!(Key::L.movement_delta(), Key::Right.movement_delta());
        assert_eq!(Key::Z.movement_delta(), None);
        assert_eq!(Key::Escape.movement_delta(), None);
    }

    #[test]
    fn color_names_and_hex_parse() {
        assert_eq!(Rgb::parse("white"), Some(Rgb::WHITE));
        assert_eq!(Rgb::parse(" Light Grey "), Some(Rgb::LIGHT_GRAY));
        assert_eq!(Rgb::parse("#0a0B0c"), Some(Rgb::new(10, 11, 12)));
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("chartreuse"), None);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).expect("serialize");
        assert_eq!(json, "\"#ff0010\"");
        let back: Rgb = serde_json::from_str("\"red\"").expect("deserialize");
        assert_eq!(back, Rgb::RED);
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
