//! Progression cascade integration tests.
//!
//! Drives the state machine with the shipped campaign catalog and checks
//! that battle completions cascade into level and region unlocks exactly
//! once, and that invalid input never perturbs state.

use runefall::campaign::{BattleCatalog, Campaign};
use runefall::progression::{ProgressionConfig, ProgressionEvent, ProgressionStateMachine};
use runefall::store::MemoryStore;

fn machine() -> ProgressionStateMachine<Campaign, MemoryStore> {
    ProgressionStateMachine::with_config(
        ProgressionConfig {
            auto_save: false,
            ..ProgressionConfig::default()
        },
        Campaign::standard(),
        MemoryStore::new(),
    )
}

fn clear_level(
    machine: &mut ProgressionStateMachine<Campaign, MemoryStore>,
    region: u32,
    level: u32,
) -> Vec<ProgressionEvent> {
    let battles = machine
        .catalog()
        .battle_count(region, level)
        .expect("configured level");
    let mut events = Vec::new();
    for battle in 1..=battles {
        events.extend(machine.complete_battle(region, level, battle, 3, 25.0));
    }
    events
}

#[test]
fn test_first_level_completion_unlocks_second() {
    let mut machine = machine();
    let events = clear_level(&mut machine, 1, 1);

    assert!(machine.is_level_completed(1, 1));
    assert!(machine.is_level_unlocked(1, 2));
    assert!(!machine.is_level_unlocked(1, 3));
    assert!(events.contains(&ProgressionEvent::LevelCompleted { region: 1, level: 1 }));
    assert!(events.contains(&ProgressionEvent::LevelUnlocked { region: 1, level: 2 }));
}

#[test]
fn test_non_final_battle_does_not_complete_level() {
    let mut machine = machine();
    machine.complete_battle(1, 1, 1, 3, 10.0);
    machine.complete_battle(1, 1, 2, 3, 10.0);

    assert!(machine.is_battle_completed(1, 1, 1));
    assert!(machine.is_battle_completed(1, 1, 2));
    assert!(!machine.is_level_completed(1, 1));
    assert!(!machine.is_level_unlocked(1, 2));
}

#[test]
fn test_clearing_region_unlocks_next_region() {
    let mut machine = machine();
    let levels = machine.catalog().level_count(1).expect("region 1");

    let mut final_events = Vec::new();
    for level in 1..=levels {
        final_events = clear_level(&mut machine, 1, level);
    }

    assert!(machine.is_region_completed(1));
    assert!(machine.is_region_unlocked(2));
    assert!(machine.is_level_unlocked(2, 1));

    // The last battle of the last level carries the whole cascade.
    assert!(final_events.contains(&ProgressionEvent::RegionCompleted { region: 1 }));
    assert!(final_events.contains(&ProgressionEvent::RegionUnlocked { region: 2 }));
    // No level 65 exists to unlock.
    assert!(!final_events
        .iter()
        .any(|e| matches!(e, ProgressionEvent::LevelUnlocked { level: 65, .. })));
}

#[test]
fn test_cascade_fires_only_once() {
    let mut machine = machine();
    clear_level(&mut machine, 1, 1);

    // Re-clearing the level must not re-announce completion.
    let events = clear_level(&mut machine, 1, 1);
    assert!(!events
        .iter()
        .any(|e| matches!(e, ProgressionEvent::LevelCompleted { .. })));
    assert!(events
        .iter()
        .all(|e| matches!(e, ProgressionEvent::BattleCompleted { .. })));
}

#[test]
fn test_total_stars_recomputed_on_completion() {
    let mut machine = machine();
    machine.complete_battle(1, 1, 1, 1, 40.0);
    machine.complete_battle(1, 1, 2, 2, 35.0);

    // Improve battle 1 before the level completes; the final sum must
    // reflect the overwrite, not accumulate both attempts.
    machine.complete_battle(1, 1, 1, 3, 22.0);
    machine.complete_battle(1, 1, 3, 3, 30.0);

    assert!(machine.is_level_completed(1, 1));
    assert_eq!(machine.level_stars(1, 1), 8);
    assert_eq!(machine.battle_stars(1, 1, 1), 3);
}

#[test]
fn test_out_of_range_completion_is_inert() {
    let mut machine = machine();
    machine.complete_battle(1, 1, 1, 3, 10.0);
    let before = machine.root().clone();

    assert!(machine.complete_battle(13, 1, 1, 3, 10.0).is_empty());
    assert!(machine.complete_battle(1, 65, 1, 3, 10.0).is_empty());
    assert!(machine.complete_battle(1, 1, 4, 3, 10.0).is_empty());
    assert!(machine.complete_battle(0, 0, 0, 3, 10.0).is_empty());

    assert_eq!(machine.root(), &before);
}

#[test]
fn test_out_of_order_completion_is_recorded_but_gated() {
    let mut machine = machine();

    // Region 5 is locked, but a stray completion must not panic; the
    // record lands and the region stays locked until earned.
    let events = machine.complete_battle(5, 10, 1, 3, 10.0);
    assert_eq!(events.len(), 1);
    assert!(machine.is_battle_completed(5, 10, 1));
    assert!(!machine.is_region_unlocked(5));
    assert!(!machine.is_level_unlocked(5, 10));
}

#[test]
fn test_unlocks_are_idempotent_and_bounded() {
    let mut machine = machine();

    assert!(machine.unlock_region(3));
    assert!(!machine.unlock_region(3));
    assert!(machine.is_level_unlocked(3, 1));

    assert!(machine.unlock_level(3, 7));
    assert!(!machine.unlock_level(3, 7));

    assert!(!machine.unlock_region(13));
    assert!(!machine.unlock_level(1, 65));
}

#[test]
fn test_full_campaign_walkthrough() {
    let mut machine = machine();
    let regions = machine.config().max_regions;

    for region in 1..=regions {
        let levels = machine.catalog().level_count(region).expect("region");
        for level in 1..=levels {
            clear_level(&mut machine, region, level);
        }
        assert!(machine.is_region_completed(region), "region {region}");
    }

    // Every region cleared; there is no region 13 to unlock.
    assert!(!machine.is_region_unlocked(regions + 1));
}
