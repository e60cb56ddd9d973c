//! Locating and loading the optional `config.toml`. The desktop app and the
//! replay tool resolve it the same way, so a recorded session replays under
//! the config it was played with.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::GameConfig;
use crate::error::GameError;

pub const APP_NAME: &str = "Cavern";
pub const CONFIG_ENV_VAR: &str = "CAVERN_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named explicitly, by the environment variable or a tool flag; must exist.
    Explicit(PathBuf),
    /// Found in the platform config directory.
    Platform(PathBuf),
    Defaults,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push(CONFIG_FILE_NAME);
        path
    })
}

/// Picks the config file to read. An explicit override always wins, even
/// when the file it names is missing, so that a typo is reported rather
/// than silently ignored.
pub fn resolve_config_source(
    explicit: Option<OsString>,
    platform_path: Option<PathBuf>,
) -> ConfigSource {
    if let Some(raw) = explicit.filter(|raw| !raw.is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(raw));
    }
    match platform_path {
        Some(path) if path.is_file() => ConfigSource::Platform(path),
        _ => ConfigSource::Defaults,
    }
}

pub fn load_config_file(path: &Path) -> Result<GameConfig, GameError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| GameError::ConfigRead { path: path.to_path_buf(), source })?;
    GameConfig::from_toml_str(&raw)
        .map_err(|err| GameError::ConfigFile { path: path.to_path_buf(), source: Box::new(err) })
}

pub fn load_game_config(source: &ConfigSource) -> Result<GameConfig, GameError> {
    match source {
        ConfigSource::Explicit(path) | ConfigSource::Platform(path) => load_config_file(path),
        ConfigSource::Defaults => Ok(GameConfig::default()),
    }
}

/// Resolves and loads the config: `override_path` if given, else the file
/// named by `CAVERN_CONFIG`, else the platform config file, else defaults.
pub fn load_startup_config(
    override_path: Option<&Path>,
) -> Result<(GameConfig, ConfigSource), GameError> {
    let explicit = match override_path {
        Some(path) => Some(path.as_os_str().to_os_string()),
        None => env::var_os(CONFIG_ENV_VAR),
    };
    let source = resolve_config_source(explicit, default_config_path());
    let config = load_game_config(&source)?;
    tracing::debug!(?source, "config resolved");
    Ok((config, source))
}
