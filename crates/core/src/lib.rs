pub mod camera;
pub mod components;
pub mod config;
pub mod config_file;
pub mod console;
pub mod content;
pub mod ecs;
pub mod error;
pub mod fov;
pub mod game;
pub mod journal;
pub mod journal_file;
pub mod map;
pub mod mapgen;
pub mod replay;
pub mod screens;
pub mod systems;
pub mod types;

pub use config::{GameConfig, MapgenConfig};
pub use console::Console;
pub use content::{ContentPack, CreatureDef};
pub use error::GameError;
pub use game::{Game, format_snapshot_hash};
pub use journal::InputJournal;
pub use journal_file::{JournalLoadError, JournalWriter, load_journal_from_file};
pub use replay::{ReplayResult, replay};
pub use types::*;
