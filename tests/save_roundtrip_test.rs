//! Persistence integration tests.
//!
//! Round-trips progression state through the store contract and checks
//! the recovery paths: missing entries fall back to a fresh root, and
//! failing saves leave the in-memory state authoritative.

use runefall::campaign::Campaign;
use runefall::progression::{
    ProgressionConfig, ProgressionEvent, ProgressionRoot, ProgressionStateMachine,
};
use runefall::store::{MemoryStore, ProgressionStore, StoreError};

/// Store whose writes always fail and whose reads find nothing.
struct BrokenStore;

impl ProgressionStore for BrokenStore {
    fn save(&mut self, key: &str, _root: &ProgressionRoot) -> Result<(), StoreError> {
        Err(StoreError::Corrupt(format!("write rejected for {key}")))
    }

    fn load(&self, key: &str) -> Result<ProgressionRoot, StoreError> {
        Err(StoreError::NotFound(key.to_string()))
    }

    fn exists(&self, _key: &str) -> bool {
        false
    }
}

#[test]
fn test_save_load_round_trip_is_deep_equal() {
    let mut machine = ProgressionStateMachine::with_config(
        ProgressionConfig {
            auto_save: false,
            ..ProgressionConfig::default()
        },
        Campaign::standard(),
        MemoryStore::new(),
    );

    machine.complete_battle(1, 1, 1, 3, 18.25);
    machine.complete_battle(1, 1, 2, 2, 40.0);
    machine.complete_battle(1, 1, 3, 1, 65.5);
    machine.complete_battle(1, 2, 1, 3, 12.0);
    machine.unlock_region(2);
    machine.save().expect("save");

    let saved = machine.root().clone();

    // Diverge, then load back.
    machine.complete_battle(1, 2, 2, 3, 9.0);
    assert_ne!(machine.root(), &saved);

    let events = machine.load();
    assert_eq!(events, vec![ProgressionEvent::ProgressionLoaded]);
    assert_eq!(machine.root(), &saved);
    assert_eq!(machine.level_stars(1, 1), 6);
    assert!(machine.is_region_unlocked(2));
}

#[test]
fn test_load_without_save_initializes_entry_point() {
    let mut machine = ProgressionStateMachine::new(Campaign::standard(), MemoryStore::new());
    let events = machine.load();

    assert_eq!(events, vec![ProgressionEvent::ProgressionLoaded]);
    assert!(machine.is_region_unlocked(1));
    assert!(machine.is_level_unlocked(1, 1));
    assert!(!machine.is_region_unlocked(2));
}

#[test]
fn test_loaded_state_wins_over_init_defaults() {
    let mut store = MemoryStore::new();

    // Persist a run that got partway through region 1.
    {
        let mut machine = ProgressionStateMachine::with_config(
            ProgressionConfig {
                auto_save: true,
                ..ProgressionConfig::default()
            },
            Campaign::standard(),
            &mut store,
        );
        machine.complete_battle(1, 1, 1, 3, 20.0);
    }

    // A new session over the same store must see the saved state, not
    // the fresh defaults it was constructed with.
    let mut machine = ProgressionStateMachine::new(Campaign::standard(), &mut store);
    machine.load();
    assert!(machine.is_battle_completed(1, 1, 1));
    assert_eq!(machine.battle_stars(1, 1, 1), 3);
}

#[test]
fn test_failing_save_keeps_memory_authoritative() {
    let mut machine = ProgressionStateMachine::with_config(
        ProgressionConfig {
            auto_save: true,
            ..ProgressionConfig::default()
        },
        Campaign::standard(),
        BrokenStore,
    );

    // Auto-save fails every battle; completions must still land.
    let events = machine.complete_battle(1, 1, 1, 2, 30.0);
    assert_eq!(events.len(), 1);
    assert!(machine.is_battle_completed(1, 1, 1));
    assert_eq!(machine.battle_stars(1, 1, 1), 2);

    // An explicit save surfaces the error without rolling anything back.
    assert!(machine.save().is_err());
    assert!(machine.is_battle_completed(1, 1, 1));
}

#[test]
fn test_load_failure_falls_back_to_fresh_state() {
    let mut machine = ProgressionStateMachine::new(Campaign::standard(), BrokenStore);
    machine.complete_battle(1, 1, 1, 3, 5.0);

    let events = machine.load();
    assert_eq!(events, vec![ProgressionEvent::ProgressionLoaded]);
    assert!(!machine.is_battle_completed(1, 1, 1));
    assert!(machine.is_level_unlocked(1, 1));
}
