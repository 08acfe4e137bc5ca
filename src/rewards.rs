//! Battle reward generation: soul-coin payouts and rune drops.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BASE_COINS_BY_BRACKET, BRACKET_DIFFICULTY_BONUS, CHAPTERS_PER_REGION,
    CHAPTER_BOSS_DIFFICULTY_BONUS, COIN_SCALING_BY_BRACKET, LEVELS_PER_CHAPTER,
    MAX_LEVELS_PER_REGION, REGION_BOSS_CHAPTER_BONUS, REGION_BOSS_DIFFICULTY_BONUS,
};
use crate::runes::rarity::{
    apply_boss_multipliers, base_drop_rates, is_boss_context, region_bracket, roll_rarity,
};
use crate::runes::{generate_rune, Rune};

/// Everything a battle completion pays out.
///
/// `experience` is left at zero here; the combat layer owns its own
/// experience formula and fills it in before crediting the bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBundle {
    pub coins: u64,
    pub runes: Vec<Rune>,
    pub experience: f64,
}

/// Flattens a (chapter, level-in-chapter) pair into the region-wide level
/// index, clamped to `1..=64`.
pub fn level_in_region(chapter: u32, level_in_chapter: u32) -> u32 {
    let raw = (chapter.saturating_sub(1)) * LEVELS_PER_CHAPTER + level_in_chapter;
    raw.clamp(1, MAX_LEVELS_PER_REGION)
}

/// Soul-coin payout for clearing a level.
///
/// Base and per-level scaling are tiered by region bracket; chapter bosses
/// add a flat difficulty bonus, and the region boss (final level of the
/// final chapter) stacks an extra additive bonus with a multiplicative one.
pub fn compute_currency_reward(region: u32, chapter: u32, level_in_chapter: u32) -> u64 {
    let bracket = region_bracket(region);
    let level = level_in_region(chapter, level_in_chapter);

    let raw = BASE_COINS_BY_BRACKET[bracket] + level as u64 * COIN_SCALING_BY_BRACKET[bracket];

    let mut difficulty = 1.0 + BRACKET_DIFFICULTY_BONUS[bracket];
    if level_in_chapter == LEVELS_PER_CHAPTER {
        difficulty += CHAPTER_BOSS_DIFFICULTY_BONUS;
    }

    let is_region_boss =
        chapter == CHAPTERS_PER_REGION && level_in_chapter == LEVELS_PER_CHAPTER;
    let chapter_bonus = if is_region_boss {
        difficulty += REGION_BOSS_DIFFICULTY_BONUS;
        REGION_BOSS_CHAPTER_BONUS
    } else {
        1.0
    };

    (raw as f64 * difficulty * chapter_bonus).round() as u64
}

/// Generates a single rune drop for a level, boss-aware.
///
/// Rarity resolves first, then slot/set/stat rolls, so a seeded stream
/// replays identically.
pub fn generate_rune_reward(
    region: u32,
    _chapter: u32,
    level_in_chapter: u32,
    is_boss: bool,
    rng: &mut impl Rng,
) -> Rune {
    let mut table = base_drop_rates(region);
    if is_boss_context(level_in_chapter, is_boss) {
        table = apply_boss_multipliers(&table, region);
    }
    let rarity = roll_rarity(&table, rng);
    generate_rune(rarity, rng)
}

/// Produces the full reward bundle for a battle completion.
pub fn generate_reward_bundle(
    region: u32,
    chapter: u32,
    level_in_chapter: u32,
    guaranteed_drop: bool,
    rng: &mut impl Rng,
) -> RewardBundle {
    let coins = compute_currency_reward(region, chapter, level_in_chapter);
    let mut runes = Vec::new();
    if guaranteed_drop {
        runes.push(generate_rune_reward(
            region,
            chapter,
            level_in_chapter,
            false,
            rng,
        ));
    }
    RewardBundle {
        coins,
        runes,
        experience: 0.0,
    }
}
