//! The battle → level → region progression state machine.
//!
//! One logical owner (the running game session) drives this on a single
//! thread. `complete_battle` is a read-modify-write sequence; callers that
//! need concurrent access must serialize it externally.

use chrono::Utc;
use tracing::warn;

use super::events::ProgressionEvent;
use super::types::{BattleProgress, ProgressionRoot};
use crate::campaign::BattleCatalog;
use crate::core::constants::{
    MAX_BATTLE_STARS, MAX_LEVELS_PER_REGION, MAX_REGIONS, PROGRESSION_SAVE_KEY,
};
use crate::store::{ProgressionStore, StoreError};

/// Bounds and behavior knobs for the state machine.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionConfig {
    pub max_regions: u32,
    pub max_levels_per_region: u32,
    /// Persist the root after every completed battle.
    pub auto_save: bool,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_regions: MAX_REGIONS,
            max_levels_per_region: MAX_LEVELS_PER_REGION,
            auto_save: true,
        }
    }
}

/// Tracks unlock and completion state across the campaign hierarchy.
pub struct ProgressionStateMachine<C, S> {
    config: ProgressionConfig,
    catalog: C,
    store: S,
    root: ProgressionRoot,
}

impl<C: BattleCatalog, S: ProgressionStore> ProgressionStateMachine<C, S> {
    /// Creates a machine with default bounds and a fresh root.
    pub fn new(catalog: C, store: S) -> Self {
        Self::with_config(ProgressionConfig::default(), catalog, store)
    }

    pub fn with_config(config: ProgressionConfig, catalog: C, store: S) -> Self {
        Self {
            config,
            catalog,
            store,
            root: ProgressionRoot::new(),
        }
    }

    pub fn root(&self) -> &ProgressionRoot {
        &self.root
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Records a battle completion and cascades level/region completion
    /// and unlocks. Returns the notifications the caller should fan out.
    ///
    /// Out-of-range indices are logged no-ops. Stars clamp to 0-3 and
    /// times to ≥ 0. Missing catalog data skips completion evaluation
    /// rather than falsely completing anything.
    pub fn complete_battle(
        &mut self,
        region: u32,
        level: u32,
        battle: u32,
        stars: u32,
        time: f64,
    ) -> Vec<ProgressionEvent> {
        if region == 0
            || region > self.config.max_regions
            || level == 0
            || level > self.config.max_levels_per_region
            || battle == 0
        {
            warn!(region, level, battle, "battle completion ignored: index out of range");
            return Vec::new();
        }

        let configured_battles = self.catalog.battle_count(region, level).unwrap_or(0);
        let configured_levels = self.catalog.level_count(region).unwrap_or(0);

        if configured_battles > 0 && battle > configured_battles {
            warn!(
                region,
                level,
                battle,
                configured_battles,
                "battle completion ignored: battle beyond configured count"
            );
            return Vec::new();
        }

        let stars = stars.min(MAX_BATTLE_STARS);
        let time = time.max(0.0);

        let mut events = Vec::new();

        // Intermediate containers are created on demand so out-of-order
        // calls (e.g. from a debug menu) never panic.
        let region_progress = self.root.regions.entry(region).or_default();
        let level_progress = region_progress.levels.entry(level).or_default();

        // Re-completion overwrites the old record.
        level_progress.battles.insert(
            battle,
            BattleProgress {
                completed: true,
                stars_earned: stars,
                completion_time: time,
                completed_at: Utc::now().timestamp(),
            },
        );
        events.push(ProgressionEvent::BattleCompleted {
            region,
            level,
            battle,
            stars,
        });

        let mut level_newly_completed = false;
        if configured_battles > 0 && !level_progress.completed {
            let all_done = (1..=configured_battles)
                .all(|b| level_progress.battles.get(&b).is_some_and(|p| p.completed));
            if all_done {
                // Fresh sum over the configured battles, never an
                // increment: drift cannot accumulate across overwrites.
                let total_stars = (1..=configured_battles)
                    .filter_map(|b| level_progress.battles.get(&b))
                    .map(|p| p.stars_earned)
                    .sum();
                level_progress.completed = true;
                level_progress.total_stars_earned = total_stars;
                level_newly_completed = true;
            }
        }

        let mut region_newly_completed = false;
        if level_newly_completed {
            events.push(ProgressionEvent::LevelCompleted { region, level });

            // Next level in the same region; past the end is a silent no-op.
            let next_level = level + 1;
            if next_level <= self.config.max_levels_per_region {
                let next = region_progress.levels.entry(next_level).or_default();
                if !next.unlocked {
                    next.unlocked = true;
                    events.push(ProgressionEvent::LevelUnlocked {
                        region,
                        level: next_level,
                    });
                }
            }

            if configured_levels > 0 && !region_progress.completed {
                let all_levels_done = (1..=configured_levels)
                    .all(|l| region_progress.levels.get(&l).is_some_and(|p| p.completed));
                if all_levels_done {
                    region_progress.completed = true;
                    region_newly_completed = true;
                }
            }
        }

        if region_newly_completed {
            events.push(ProgressionEvent::RegionCompleted { region });
            let next_region = region + 1;
            if next_region <= self.config.max_regions && self.unlock_region(next_region) {
                events.push(ProgressionEvent::RegionUnlocked {
                    region: next_region,
                });
            }
        }

        if self.config.auto_save {
            if let Err(err) = self.save() {
                warn!(%err, "auto-save failed; in-memory progression stays authoritative");
            }
        }

        events
    }

    /// Unlocks a region and seeds its first level as playable.
    /// Idempotent; returns true only when something changed.
    pub fn unlock_region(&mut self, region: u32) -> bool {
        if region == 0 || region > self.config.max_regions {
            warn!(region, "unlock ignored: region out of range");
            return false;
        }
        let progress = self.root.regions.entry(region).or_default();
        if progress.unlocked {
            return false;
        }
        progress.unlocked = true;
        progress.levels.entry(1).or_default().unlocked = true;
        true
    }

    /// Unlocks a level. Idempotent; returns true only when something
    /// changed.
    pub fn unlock_level(&mut self, region: u32, level: u32) -> bool {
        if region == 0
            || region > self.config.max_regions
            || level == 0
            || level > self.config.max_levels_per_region
        {
            warn!(region, level, "unlock ignored: level out of range");
            return false;
        }
        let progress = self
            .root
            .regions
            .entry(region)
            .or_default()
            .levels
            .entry(level)
            .or_default();
        if progress.unlocked {
            return false;
        }
        progress.unlocked = true;
        true
    }

    pub fn is_region_unlocked(&self, region: u32) -> bool {
        self.root.region(region).is_some_and(|r| r.unlocked)
    }

    pub fn is_region_completed(&self, region: u32) -> bool {
        self.root.region(region).is_some_and(|r| r.completed)
    }

    pub fn is_level_unlocked(&self, region: u32, level: u32) -> bool {
        self.level(region, level).is_some_and(|l| l.unlocked)
    }

    pub fn is_level_completed(&self, region: u32, level: u32) -> bool {
        self.level(region, level).is_some_and(|l| l.completed)
    }

    pub fn is_battle_completed(&self, region: u32, level: u32, battle: u32) -> bool {
        self.level(region, level)
            .and_then(|l| l.battle(battle))
            .is_some_and(|b| b.completed)
    }

    pub fn battle_stars(&self, region: u32, level: u32, battle: u32) -> u32 {
        self.level(region, level)
            .and_then(|l| l.battle(battle))
            .map_or(0, |b| b.stars_earned)
    }

    pub fn level_stars(&self, region: u32, level: u32) -> u32 {
        self.level(region, level).map_or(0, |l| l.total_stars_earned)
    }

    fn level(&self, region: u32, level: u32) -> Option<&super::types::LevelProgress> {
        self.root.region(region).and_then(|r| r.level(level))
    }

    /// Persists the whole root under the fixed progression key.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(PROGRESSION_SAVE_KEY, &self.root)
    }

    /// Replaces in-memory state from the store, or falls back to a fresh
    /// root when the entry is absent or unreadable. Either way the
    /// caller gets a loaded notification to fan out.
    pub fn load(&mut self) -> Vec<ProgressionEvent> {
        if self.store.exists(PROGRESSION_SAVE_KEY) {
            match self.store.load(PROGRESSION_SAVE_KEY) {
                Ok(root) => {
                    self.root = root;
                    return vec![ProgressionEvent::ProgressionLoaded];
                }
                Err(err) => {
                    warn!(%err, "failed to load progression, falling back to fresh state");
                }
            }
        }
        self.root = ProgressionRoot::new();
        vec![ProgressionEvent::ProgressionLoaded]
    }
}
