//! Region-scaled rune drop-rate tables.
//!
//! Tables are built fresh per roll from the static per-bracket base rates,
//! optionally pushed toward rarer tiers by the boss multipliers, then
//! renormalized so the total weight never exceeds 100.

use rand::Rng;
use tracing::warn;

use super::types::Rarity;
use crate::core::constants::{BASE_DROP_RATES, BOSS_RATE_MULTIPLIERS, LEVELS_PER_CHAPTER};

/// Five percentage weights ordered Common..Legendary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityTable {
    weights: [f64; 5],
}

impl RarityTable {
    /// Builds a table from raw weights. Negative weights are clamped to
    /// zero so a bad configuration degrades instead of corrupting rolls.
    pub fn new(weights: [f64; 5]) -> Self {
        let mut clamped = weights;
        for w in &mut clamped {
            if *w < 0.0 {
                warn!(weight = *w, "negative rarity weight clamped to 0");
                *w = 0.0;
            }
        }
        Self { weights: clamped }
    }

    pub fn weight(&self, rarity: Rarity) -> f64 {
        self.weights[rarity.index()]
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Index of the region's drop/reward bracket: regions 1-4, 5-8, 9-11, 12+.
pub fn region_bracket(region: u32) -> usize {
    match region {
        0..=4 => 0,
        5..=8 => 1,
        9..=11 => 2,
        _ => 3,
    }
}

/// The base drop-rate table for a region.
pub fn base_drop_rates(region: u32) -> RarityTable {
    RarityTable::new(BASE_DROP_RATES[region_bracket(region)])
}

/// Applies the region bracket's boss multipliers to a table.
///
/// A zero base weight stays zero no matter the factor, so early regions
/// keep their rarity gating even on boss levels. If the multiplied total
/// exceeds 100, every weight is rescaled so the total is exactly 100.
pub fn apply_boss_multipliers(table: &RarityTable, region: u32) -> RarityTable {
    let factors = BOSS_RATE_MULTIPLIERS[region_bracket(region)];
    let mut weights = [0.0; 5];
    for (i, rarity) in Rarity::all().iter().enumerate() {
        weights[i] = table.weight(*rarity) * factors[i];
    }

    let total: f64 = weights.iter().sum();
    if total > 100.0 {
        for w in &mut weights {
            *w *= 100.0 / total;
        }
    }
    RarityTable::new(weights)
}

/// Resolves a roll in `[0, 100]` against a table.
///
/// Walks tiers from Legendary down to Common accumulating weight and
/// returns the first tier with nonzero weight whose cumulative sum reaches
/// the roll. Falls back to Common, which also covers float edge cases at
/// the top of the range and tables whose total weight is zero.
pub fn determine_rarity(table: &RarityTable, roll: f64) -> Rarity {
    if table.total() <= 0.0 {
        warn!("rarity table has no weight, falling back to Common");
        return Rarity::Common;
    }

    let mut cumulative = 0.0;
    for rarity in Rarity::all().iter().rev() {
        let weight = table.weight(*rarity);
        cumulative += weight;
        if weight > 0.0 && roll <= cumulative {
            return *rarity;
        }
    }
    Rarity::Common
}

/// Rolls a rarity from the table using a uniform draw scaled to `[0, 100)`.
pub fn roll_rarity(table: &RarityTable, rng: &mut impl Rng) -> Rarity {
    determine_rarity(table, rng.gen::<f64>() * 100.0)
}

/// Boss multipliers apply when the level is explicitly flagged as a boss
/// or sits in the chapter's final slot.
pub fn is_boss_context(level_in_chapter: u32, explicit_boss: bool) -> bool {
    explicit_boss || level_in_chapter == LEVELS_PER_CHAPTER
}
