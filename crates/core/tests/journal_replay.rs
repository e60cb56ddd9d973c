use cavern_core::{
    ContentPack, Game, GameConfig, InputJournal, JournalWriter, Key, TurnOutcome,
    load_journal_from_file, replay,
};
use tempfile::tempdir;

#[test]
fn recorded_session_replays_from_disk_to_the_same_hash() {
    let content = ContentPack::default();
    let config = GameConfig::default();
    let seed = 4_242;
    let dir = tempdir().unwrap();
    let path = dir.path().join("last_session.jsonl");

    let mut game = Game::new(seed, &content, &config).unwrap();
    let mut writer =
        JournalWriter::create(&path, seed, content.content_hash(), config.config_hash()).unwrap();
    let keys = [Key::Up, Key::L, Key::L, Key::J, Key::Z, Key::K, Key::H, Key::Escape, Key::Up];
    for key in keys {
        writer.append(key).unwrap();
        game.handle_key(key);
    }
    drop(writer);

    let journal = load_journal_from_file(&path).unwrap();
    assert_eq!(journal.keys, keys);
    let result = replay(&content, &config, &journal).unwrap();
    assert_eq!(result.snapshot_hash, game.snapshot_hash());
    assert_eq!(result.turns, game.turn());
    assert!(!result.quit);
}

#[test]
fn replay_result_reports_the_quit_key() {
    let content = ContentPack::default();
    let mut journal =
        InputJournal::new(8, content.content_hash(), GameConfig::default().config_hash());
    for key in [Key::Up, Key::L, Key::Escape, Key::Escape, Key::Up] {
        journal.push(key);
    }

    let result = replay(&content, &GameConfig::default(), &journal).unwrap();
    assert!(result.quit);
    assert_eq!(result.keys_consumed, 4);

    let mut live = Game::new(8, &content, &GameConfig::default()).unwrap();
    let mut outcome = TurnOutcome::Continue;
    for &key in &journal.keys[..4] {
        outcome = live.handle_key(key);
    }
    assert_eq!(outcome, TurnOutcome::Quit);
    assert_eq!(result.snapshot_hash, live.snapshot_hash());
}
