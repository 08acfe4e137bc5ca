//! Rune equipment: types, drop-rate tables, and generation.

pub mod generation;
pub mod rarity;
pub mod types;

pub use generation::generate_rune;
pub use rarity::{
    apply_boss_multipliers, base_drop_rates, determine_rarity, is_boss_context, roll_rarity,
    RarityTable,
};
pub use types::{Rarity, Rune, RuneSet, RuneSlot, RuneStat, StatKind};
