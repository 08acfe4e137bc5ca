//! Rune synthesis: slot, set, and stat lines for a resolved rarity.

use rand::Rng;

use super::types::{Rarity, Rune, RuneSet, RuneSlot, RuneStat, StatKind};
use crate::core::constants::{
    PRIMARY_FLAT_HP_RANGES, PRIMARY_PERCENT_RANGES, PRIMARY_SPEED_RANGES, SUBSTAT_COUNTS,
    SUBSTAT_FLAT_HP_RANGES, SUBSTAT_PERCENT_RANGES, SUBSTAT_SPEED_RANGES,
};

/// Generates a rune of the given rarity.
///
/// Slot and set are uniform and independent of rarity. Randomness is
/// consumed in a fixed order (slot, set, primary, substats) so seeded
/// sequences reproduce exactly.
pub fn generate_rune(rarity: Rarity, rng: &mut impl Rng) -> Rune {
    let slot = roll_slot(rng);
    let set = roll_set(rng);
    let primary = roll_stat(rarity, true, rng);

    let substat_count = SUBSTAT_COUNTS[rarity.index()];
    let substats = (0..substat_count)
        .map(|_| roll_stat(rarity, false, rng))
        .collect();

    Rune {
        slot,
        set,
        rarity,
        primary,
        substats,
    }
}

pub fn roll_slot(rng: &mut impl Rng) -> RuneSlot {
    let slots = RuneSlot::all();
    slots[rng.gen_range(0..slots.len())]
}

pub fn roll_set(rng: &mut impl Rng) -> RuneSet {
    let sets = RuneSet::all();
    sets[rng.gen_range(0..sets.len())]
}

fn roll_stat(rarity: Rarity, primary: bool, rng: &mut impl Rng) -> RuneStat {
    let kinds = StatKind::all();
    let kind = kinds[rng.gen_range(0..kinds.len())];
    let (min, max) = stat_range(kind, rarity, primary);
    let value = if max > min { rng.gen_range(min..=max) } else { min };
    RuneStat { kind, value }
}

/// Flat HP and Speed roll on their own scales; everything else shares the
/// percent ranges.
fn stat_range(kind: StatKind, rarity: Rarity, primary: bool) -> (u32, u32) {
    let i = rarity.index();
    match (kind, primary) {
        (StatKind::Hp, true) => PRIMARY_FLAT_HP_RANGES[i],
        (StatKind::Hp, false) => SUBSTAT_FLAT_HP_RANGES[i],
        (StatKind::Speed, true) => PRIMARY_SPEED_RANGES[i],
        (StatKind::Speed, false) => SUBSTAT_SPEED_RANGES[i],
        (_, true) => PRIMARY_PERCENT_RANGES[i],
        (_, false) => SUBSTAT_PERCENT_RANGES[i],
    }
}
