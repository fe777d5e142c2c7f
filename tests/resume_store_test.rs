//! Resumable state surviving across game instances.

use std::collections::HashMap;
use std::fs;

use brainmatch::config::GameConfig;
use brainmatch::core::{Deck, GameError, JsonFileStore, MatchGame, MemoryStore, SavedGame};
use brainmatch::types::{GameStatus, Symbol};

fn finish(game: &mut MatchGame) {
    let mut by_symbol: HashMap<Symbol, Vec<usize>> = HashMap::new();
    for tile in game.board().tiles() {
        by_symbol
            .entry(tile.symbol.clone())
            .or_default()
            .push(tile.index);
    }
    for indices in by_symbol.values() {
        game.flip(indices[0]).unwrap();
        game.flip(indices[1]).unwrap();
    }
    assert!(game.is_ended());
}

#[test]
fn completion_is_restored_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut game = MatchGame::with_store(1, Box::new(JsonFileStore::new(&path)));
    assert!(!game.is_resumable());
    game.new_game(Deck::from_pairs(["a", "b", "c"]).unwrap());
    finish(&mut game);
    assert!(game.is_resumable());
    drop(game);

    let mut reopened = MatchGame::with_store(2, Box::new(JsonFileStore::new(&path)));
    assert!(reopened.is_resumable());
    assert!(!reopened.is_started());

    reopened.resume().unwrap();
    assert!(reopened.is_started());
    assert_eq!(reopened.total_pairs(), 3);
    assert_eq!(reopened.status(), GameStatus::InProgress);
}

#[test]
fn new_game_clears_saved_completion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut game = MatchGame::with_store(1, Box::new(JsonFileStore::new(&path)));
    game.new_game(Deck::from_pairs(["a", "b"]).unwrap());
    finish(&mut game);
    game.new_game(Deck::from_pairs(["a", "b"]).unwrap());
    drop(game);

    let mut reopened = MatchGame::with_store(1, Box::new(JsonFileStore::new(&path)));
    assert!(!reopened.is_resumable());
    assert_eq!(reopened.resume(), Err(GameError::NotResumable));
}

#[test]
fn corrupt_state_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, b"{ not json").unwrap();

    let game = MatchGame::with_store(1, Box::new(JsonFileStore::new(&path)));
    assert!(!game.is_resumable());
    assert!(game.deck().is_none());
}

#[test]
fn unpaired_saved_deck_is_ignored() {
    let store = MemoryStore::with_saved(SavedGame {
        resumable: true,
        deck: vec!["a".into(), "b".into()],
    });
    let mut game = MatchGame::with_store(1, Box::new(store));
    assert!(!game.is_resumable());
    assert!(game.resume().is_err());
}

#[test]
fn saved_file_is_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut game = MatchGame::with_store(1, Box::new(JsonFileStore::new(&path)));
    game.new_game(Deck::from_pairs(["a"]).unwrap());
    finish(&mut game);

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value["resumable"], serde_json::Value::Bool(true));
    assert_eq!(value["deck"], serde_json::json!(["a", "a"]));
}

#[test]
fn config_state_path_selects_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let config = GameConfig {
        seed: Some(3),
        state_path: Some(path.clone()),
        ..GameConfig::default()
    };

    let mut game = config.build_game();
    game.new_game(Deck::from_pairs(["a", "b"]).unwrap());
    finish(&mut game);
    assert!(path.exists());

    assert!(config.build_game().is_resumable());
}
