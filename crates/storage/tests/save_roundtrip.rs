//! File store behavior against a real filesystem.

use kniffel_storage::{FileSaveStore, SaveGame, SaveStore, StorageError};

use kniffel_core::{GameState, TurnEngine, TurnEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn played_state() -> GameState {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut state = GameState::new("Ada", "Grace", &mut rng);
    for _ in 0..4 {
        TurnEngine::new(&mut state)
            .execute(TurnEvent::Roll, &mut rng)
            .unwrap();
        TurnEngine::new(&mut state)
            .execute(TurnEvent::EndTurn, &mut rng)
            .unwrap();
        TurnEngine::new(&mut state)
            .execute(TurnEvent::Select { position: 1 }, &mut rng)
            .unwrap();
    }
    state
}

#[test]
fn save_then_load_reconstructs_the_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSaveStore::new(dir.path().join("game")).unwrap();

    let state = played_state();
    store.save(&SaveGame::from_state(&state)).unwrap();
    assert!(store.exists());

    let restored = store.load().unwrap().unwrap().into_state().unwrap();
    assert_eq!(restored, state);
}

#[test]
fn load_without_a_file_is_none_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSaveStore::new(dir.path().join("game")).unwrap();
    assert!(!store.exists());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn bare_and_suffixed_names_hit_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let bare = FileSaveStore::new(dir.path().join("game")).unwrap();
    let suffixed = FileSaveStore::new(dir.path().join("game.json")).unwrap();
    assert_eq!(bare.path(), suffixed.path());

    bare.save(&SaveGame::from_state(&played_state())).unwrap();
    assert!(suffixed.exists());
    assert!(suffixed.load().unwrap().is_some());
}

#[test]
fn unparseable_json_is_a_loud_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSaveStore::new(dir.path().join("game")).unwrap();
    std::fs::write(store.path(), b"{ not json").unwrap();
    assert!(matches!(store.load(), Err(StorageError::Json(_))));
}

#[test]
fn parseable_but_invalid_records_fail_on_restore() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSaveStore::new(dir.path().join("game")).unwrap();

    let mut record = SaveGame::from_state(&played_state());
    record.players[1].dice_values = [1, 2, 3, 4, 0];
    store.save(&record).unwrap();

    // The file itself reads back fine; interpretation rejects it.
    let loaded = store.load().unwrap().unwrap();
    assert!(matches!(
        loaded.into_state(),
        Err(StorageError::Corrupted(_))
    ));
}

#[test]
fn delete_clears_the_slot_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSaveStore::new(dir.path().join("game")).unwrap();

    store.save(&SaveGame::from_state(&played_state())).unwrap();
    assert!(store.exists());

    store.delete().unwrap();
    assert!(!store.exists());
    assert!(store.load().unwrap().is_none());

    // A second delete is a quiet no-op.
    store.delete().unwrap();
}

#[test]
fn saving_twice_replaces_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSaveStore::new(dir.path().join("game")).unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    let fresh = GameState::new("Ada", "Grace", &mut rng);
    store.save(&SaveGame::from_state(&fresh)).unwrap();

    let progressed = played_state();
    store.save(&SaveGame::from_state(&progressed)).unwrap();

    let restored = store.load().unwrap().unwrap().into_state().unwrap();
    assert_eq!(restored, progressed);
    assert_ne!(restored, fresh);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("saves/deep/game");
    let store = FileSaveStore::new(&nested).unwrap();
    store.save(&SaveGame::from_state(&played_state())).unwrap();
    assert!(store.exists());
}
