//! Per-session persistence: the live key journal plus a small summary
//! written when the session ends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use cavern_core::{Game, JournalWriter, Key};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{APP_NAME, format_snapshot_hash};

const JOURNAL_FILE_NAME: &str = "last_session.jsonl";
const SUMMARY_FILE_NAME: &str = "last_session.json";

fn data_file(name: &str) -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push(name);
        path
    })
}

pub fn default_journal_path() -> Option<PathBuf> {
    data_file(JOURNAL_FILE_NAME)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub format_version: u32,
    pub seed: u64,
    pub content_hash: u64,
    pub config_hash: u64,
    pub snapshot_hash_hex: String,
    pub turns: u64,
    pub keys: u64,
    pub quit: bool,
    pub updated_at_unix_ms: u64,
}

impl SessionSummary {
    pub fn from_game(game: &Game, content_hash: u64, config_hash: u64, keys: u64) -> Self {
        let updated_at_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64);
        Self {
            format_version: 1,
            seed: game.seed(),
            content_hash,
            config_hash,
            snapshot_hash_hex: format_snapshot_hash(game.snapshot_hash()),
            turns: game.turn(),
            keys,
            quit: game.is_quit(),
            updated_at_unix_ms,
        }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        data_file(SUMMARY_FILE_NAME)
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Streams every key the app feeds the game into the journal file. A
/// session without a writable data dir still plays; it just is not
/// recorded.
pub struct SessionRecorder {
    writer: Option<JournalWriter>,
    content_hash: u64,
    config_hash: u64,
    keys: u64,
}

impl SessionRecorder {
    pub fn start(
        journal_path: Option<&Path>,
        seed: u64,
        content_hash: u64,
        config_hash: u64,
    ) -> Self {
        let writer = journal_path.and_then(|path| {
            match JournalWriter::create(path, seed, content_hash, config_hash) {
                Ok(writer) => {
                    tracing::info!(path = %path.display(), "recording session journal");
                    Some(writer)
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "session journal disabled");
                    None
                }
            }
        });
        Self { writer, content_hash, config_hash, keys: 0 }
    }

    pub fn is_recording(&self) -> bool {
        self.writer.is_some()
    }

    pub fn record(&mut self, key: Key) {
        self.keys += 1;
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(err) = writer.append(key) {
            tracing::warn!(%err, "failed to append to session journal, recording stopped");
            self.writer = None;
        }
    }

    pub fn keys_recorded(&self) -> u64 {
        self.keys
    }

    pub fn summary(&self, game: &Game) -> SessionSummary {
        SessionSummary::from_game(game, self.content_hash, self.config_hash, self.keys)
    }
}
