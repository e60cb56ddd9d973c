use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no screen named '{0}'")]
    UnknownScreen(String),
    #[error("a screen named '{0}' is already registered")]
    DuplicateScreen(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid content: {0}")]
    InvalidContent(String),
    #[error("journal was recorded with content {expected:016x}, loaded content is {found:016x}")]
    ContentMismatch { expected: u64, found: u64 },
    #[error("journal was recorded with config {expected:016x}, loaded config is {found:016x}")]
    ConfigMismatch { expected: u64, found: u64 },
    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<GameError>,
    },
    #[error("content JSON error: {0}")]
    ContentParse(#[from] serde_json::Error),
    #[error("config TOML error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
