use serde::{Deserialize, Serialize};

use crate::types::Key;

pub const JOURNAL_FORMAT_VERSION: u16 = 2;

/// Every key a session fed to the game, plus what is needed to rebuild
/// the same starting world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub content_hash: u64,
    pub config_hash: u64,
    pub seed: u64,
    pub keys: Vec<Key>,
}

impl InputJournal {
    pub fn new(seed: u64, content_hash: u64, config_hash: u64) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            content_hash,
            config_hash,
            seed,
            keys: Vec::new(),
        }
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
