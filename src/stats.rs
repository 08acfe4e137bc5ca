//! Effective-stat aggregation for combat.
//!
//! Combines a monster's base stats with level/star scaling and equipped
//! rune bonuses. Combat consumes the result; nothing here feeds back.

use serde::{Deserialize, Serialize};

use crate::core::constants::{LEVEL_STAT_SCALING, MAX_MONSTER_STARS, STAR_STAT_SCALING};
use crate::runes::{Rune, RuneStat, StatKind};

/// Stats as configured for a monster at level 1, one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

/// Stats after level, star, and rune adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub crit_rate_percent: u32,
}

/// Computes effective stats: base scaled by level and stars, then rune
/// flat bonuses, then rune percent bonuses on the scaled-plus-flat value.
pub fn effective_stats(
    base: &BaseStats,
    level: u32,
    stars: u32,
    equipped: &[Rune],
) -> EffectiveStats {
    let level_mult = 1.0 + level.saturating_sub(1) as f64 * LEVEL_STAT_SCALING;
    let star_mult = 1.0 + stars.clamp(1, MAX_MONSTER_STARS).saturating_sub(1) as f64 * STAR_STAT_SCALING;
    let scale = level_mult * star_mult;

    let mut flat_hp = 0u64;
    let mut flat_attack = 0u64;
    let mut flat_defense = 0u64;
    let mut flat_speed = 0u64;
    let mut hp_pct = 0u64;
    let mut attack_pct = 0u64;
    let mut defense_pct = 0u64;
    let mut crit_rate = 0u64;

    for line in equipped.iter().flat_map(rune_lines) {
        let v = line.value as u64;
        match line.kind {
            StatKind::Hp => flat_hp += v,
            StatKind::Attack => flat_attack += v,
            StatKind::Defense => flat_defense += v,
            StatKind::Speed => flat_speed += v,
            StatKind::HpPercent => hp_pct += v,
            StatKind::AttackPercent => attack_pct += v,
            StatKind::DefensePercent => defense_pct += v,
            StatKind::CritRate => crit_rate += v,
        }
    }

    let apply = |base: u32, flat: u64, pct: u64| -> u32 {
        let scaled = base as f64 * scale + flat as f64;
        (scaled * (1.0 + pct as f64 / 100.0)).round() as u32
    };

    EffectiveStats {
        hp: apply(base.hp, flat_hp, hp_pct),
        attack: apply(base.attack, flat_attack, attack_pct),
        defense: apply(base.defense, flat_defense, defense_pct),
        speed: apply(base.speed, flat_speed, 0),
        crit_rate_percent: crit_rate as u32,
    }
}

fn rune_lines(rune: &Rune) -> impl Iterator<Item = &RuneStat> {
    std::iter::once(&rune.primary).chain(rune.substats.iter())
}
