//! Campaign progression state: battle, level, and region records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Record of a single battle's completion.
///
/// Re-completing the same battle overwrites this record; stars and times
/// are not accumulated across attempts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleProgress {
    pub completed: bool,
    pub stars_earned: u32,
    pub completion_time: f64,
    /// Unix timestamp of the most recent completion.
    pub completed_at: i64,
}

/// Progression through one level's battles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelProgress {
    pub unlocked: bool,
    pub completed: bool,
    /// Sum of per-battle stars, recomputed from the battle records each
    /// time completion is evaluated. Never incrementally maintained.
    pub total_stars_earned: u32,
    pub battles: BTreeMap<u32, BattleProgress>,
}

impl LevelProgress {
    pub fn battle(&self, battle: u32) -> Option<&BattleProgress> {
        self.battles.get(&battle)
    }
}

/// Progression through one region's levels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionProgress {
    pub unlocked: bool,
    pub completed: bool,
    pub levels: BTreeMap<u32, LevelProgress>,
}

impl RegionProgress {
    pub fn level(&self, level: u32) -> Option<&LevelProgress> {
        self.levels.get(&level)
    }
}

/// The whole campaign's progression state.
///
/// Region 1 / level 1 are the entry point and unlock unconditionally at
/// initialization; everything else is earned. A loaded save always
/// replaces these defaults wholesale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressionRoot {
    pub regions: BTreeMap<u32, RegionProgress>,
}

impl ProgressionRoot {
    /// Fresh state with the entry point unlocked.
    pub fn new() -> Self {
        let mut root = Self::default();
        let region = root.regions.entry(1).or_default();
        region.unlocked = true;
        region.levels.entry(1).or_default().unlocked = true;
        root
    }

    pub fn region(&self, region: u32) -> Option<&RegionProgress> {
        self.regions.get(&region)
    }
}
