use crate::config::GameConfig;
use crate::content::ContentPack;
use crate::error::GameError;
use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::TurnOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub turns: u64,
    pub keys_consumed: usize,
    pub quit: bool,
    pub snapshot_hash: u64,
}

/// Rebuilds the journal's starting world and feeds it every recorded key.
/// Keys after a quit are not consumed. The content pack and config must be
/// the ones the journal was recorded with.
pub fn replay(
    content: &ContentPack,
    config: &GameConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, GameError> {
    let found = content.content_hash();
    if journal.content_hash != found {
        return Err(GameError::ContentMismatch { expected: journal.content_hash, found });
    }
    let found = config.config_hash();
    if journal.config_hash != found {
        return Err(GameError::ConfigMismatch { expected: journal.config_hash, found });
    }

    let mut game = Game::new(journal.seed, content, config)?;
    let mut keys_consumed = 0;
    let mut quit = false;
    for &key in &journal.keys {
        keys_consumed += 1;
        if game.handle_key(key) == TurnOutcome::Quit {
            quit = true;
            break;
        }
    }

    tracing::info!(
        seed = journal.seed,
        keys = keys_consumed,
        turns = game.turn(),
        quit,
        "replay finished"
    );
    Ok(ReplayResult {
        turns: game.turn(),
        keys_consumed,
        quit,
        snapshot_hash: game.snapshot_hash(),
    })
}
