//! Campaign balance simulator.
//!
//! Plays every battle of the campaign through the real progression state
//! machine and reward generator, then aggregates coin income, rune-rarity
//! distribution, and leveling pace. Used to sanity-check tuning changes
//! without booting the game.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::campaign::Campaign;
use crate::core::constants::{LEVELS_PER_CHAPTER, MAX_REGIONS};
use crate::experience::LevelState;
use crate::progression::{ProgressionConfig, ProgressionStateMachine};
use crate::rewards::generate_reward_bundle;
use crate::runes::Rarity;
use crate::store::MemoryStore;

/// Simulation parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Play regions 1 through this one.
    pub target_region: u32,
    /// Fixed seed for reproducible runs; None draws from entropy.
    pub seed: Option<u64>,
    /// Stars awarded per simulated battle.
    pub stars_per_battle: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_region: MAX_REGIONS,
            seed: None,
            stars_per_battle: 3,
        }
    }
}

/// Aggregated results of one simulated playthrough.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub regions_cleared: u32,
    pub battles_fought: u64,
    pub total_coins: u64,
    pub runes_dropped: u64,
    pub rarity_counts: [u64; 5],
    pub final_monster_level: u32,
    pub total_level_ups: u32,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Simulation results\n");
        out.push_str("==================\n");
        out.push_str(&format!("  Regions cleared:  {}\n", self.regions_cleared));
        out.push_str(&format!("  Battles fought:   {}\n", self.battles_fought));
        out.push_str(&format!("  Soul coins:       {}\n", self.total_coins));
        out.push_str(&format!("  Runes dropped:    {}\n", self.runes_dropped));
        for rarity in Rarity::all() {
            let count = self.rarity_counts[rarity.index()];
            let share = if self.runes_dropped > 0 {
                count as f64 * 100.0 / self.runes_dropped as f64
            } else {
                0.0
            };
            out.push_str(&format!(
                "    {:<10} {:>8}  ({share:.1}%)\n",
                rarity.name(),
                count
            ));
        }
        out.push_str(&format!(
            "  Monster level:    {} ({} level-ups)\n",
            self.final_monster_level, self.total_level_ups
        ));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Runs a full campaign walkthrough with the given parameters.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let campaign = Campaign::standard();
    let mut machine = ProgressionStateMachine::with_config(
        ProgressionConfig {
            auto_save: false,
            ..ProgressionConfig::default()
        },
        Campaign::standard(),
        MemoryStore::new(),
    );
    let mut monster = LevelState::new();

    let mut battles_fought = 0u64;
    let mut total_coins = 0u64;
    let mut runes_dropped = 0u64;
    let mut rarity_counts = [0u64; 5];
    let mut total_level_ups = 0u32;

    let target = config.target_region.min(MAX_REGIONS);
    for region in 1..=target {
        let Some(region_def) = campaign.region(region) else {
            break;
        };
        for level in 1..=region_def.levels {
            let chapter = (level - 1) / LEVELS_PER_CHAPTER + 1;
            let level_in_chapter = (level - 1) % LEVELS_PER_CHAPTER + 1;
            for battle in 1..=region_def.battles_per_level {
                // The final battle of a level carries the guaranteed drop.
                let guaranteed = battle == region_def.battles_per_level;
                let bundle =
                    generate_reward_bundle(region, chapter, level_in_chapter, guaranteed, &mut rng);
                total_coins += bundle.coins;
                for rune in &bundle.runes {
                    runes_dropped += 1;
                    rarity_counts[rune.rarity.index()] += 1;
                }

                // Stand-in for the combat layer's experience formula.
                let xp = 40 + region as u64 * 10 + level as u64;
                total_level_ups += monster.apply_experience(xp);

                machine.complete_battle(region, level, battle, config.stars_per_battle, 30.0);
                battles_fought += 1;
            }
        }
    }

    let regions_cleared = (1..=target)
        .filter(|&r| machine.is_region_completed(r))
        .count() as u32;

    SimReport {
        regions_cleared,
        battles_fought,
        total_coins,
        runes_dropped,
        rarity_counts,
        final_monster_level: monster.level,
        total_level_ups,
    }
}
