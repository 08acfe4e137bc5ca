//! Shared balance constants used by both the engine and the simulator.
//!
//! All core tuning numbers live here. Change once, test everywhere.

// =============================================================================
// XP AND LEVELING
// =============================================================================

/// Base of the experience curve: `XP_CURVE_BASE * level^XP_CURVE_EXPONENT`.
pub const XP_CURVE_BASE: f64 = 100.0;

/// Exponent of the experience curve.
pub const XP_CURVE_EXPONENT: f64 = 1.5;

/// Monsters stop leveling here. Experience still accrues for display.
pub const MAX_MONSTER_LEVEL: u32 = 60;

// =============================================================================
// CAMPAIGN SHAPE
// =============================================================================

/// Levels per chapter. The final slot of a chapter is its boss level.
pub const LEVELS_PER_CHAPTER: u32 = 8;

/// Chapters per region.
pub const CHAPTERS_PER_REGION: u32 = 8;

/// Levels per region (8 chapters of 8 levels).
pub const MAX_LEVELS_PER_REGION: u32 = LEVELS_PER_CHAPTER * CHAPTERS_PER_REGION;

/// Number of campaign regions.
pub const MAX_REGIONS: u32 = 12;

/// Highest star rating a battle completion can earn.
pub const MAX_BATTLE_STARS: u32 = 3;

// =============================================================================
// SOUL COIN REWARDS
// =============================================================================
// Region brackets: regions 1-4, 5-8, 9-11, and 12+.

/// Base coin payout per region bracket.
pub const BASE_COINS_BY_BRACKET: [u64; 4] = [1000, 3000, 8000, 15000];

/// Per-level coin scaling per region bracket.
pub const COIN_SCALING_BY_BRACKET: [u64; 4] = [50, 100, 200, 500];

/// Additive difficulty bonus per region bracket.
pub const BRACKET_DIFFICULTY_BONUS: [f64; 4] = [0.0, 0.2, 0.5, 1.0];

/// Additive difficulty bonus for the final level of a chapter.
pub const CHAPTER_BOSS_DIFFICULTY_BONUS: f64 = 0.3;

/// Extra additive bonus for the final level of a region's final chapter.
pub const REGION_BOSS_DIFFICULTY_BONUS: f64 = 0.5;

/// Multiplicative bonus for the final level of a region's final chapter.
/// Composes with [`REGION_BOSS_DIFFICULTY_BONUS`]; the region boss gets both.
pub const REGION_BOSS_CHAPTER_BONUS: f64 = 1.5;

// =============================================================================
// RUNE DROP RATES
// =============================================================================
// Five weights per table, ordered Common..Legendary, summing to 100.
// A zero base weight stays zero under boss multipliers: early regions
// never drop Epic or Legendary runes, boss or not.

/// Base drop-rate percentages per region bracket.
pub const BASE_DROP_RATES: [[f64; 5]; 4] = [
    [70.0, 25.0, 5.0, 0.0, 0.0],
    [50.0, 30.0, 15.0, 5.0, 0.0],
    [35.0, 35.0, 20.0, 8.0, 2.0],
    [25.0, 35.0, 25.0, 10.0, 5.0],
];

/// Boss-context weight multipliers per region bracket. Totals above 100
/// are rescaled back to exactly 100 after multiplication.
pub const BOSS_RATE_MULTIPLIERS: [[f64; 5]; 4] = [
    [0.8, 1.4, 2.5, 2.0, 2.0],
    [0.7, 1.2, 1.8, 2.5, 3.0],
    [0.6, 1.0, 1.6, 2.2, 3.0],
    [0.5, 1.0, 1.5, 2.0, 2.5],
];

// =============================================================================
// RUNE STAT SYNTHESIS
// =============================================================================
// (min, max) roll ranges indexed by rarity, Common..Legendary.

/// Primary stat ranges for percent-based stats.
pub const PRIMARY_PERCENT_RANGES: [(u32, u32); 5] = [(4, 8), (8, 14), (14, 22), (22, 32), (32, 48)];

/// Primary stat ranges for flat HP, which rolls on a larger scale.
pub const PRIMARY_FLAT_HP_RANGES: [(u32, u32); 5] =
    [(40, 80), (80, 140), (140, 220), (220, 320), (320, 480)];

/// Primary stat ranges for flat Speed, which rolls on a smaller scale.
pub const PRIMARY_SPEED_RANGES: [(u32, u32); 5] = [(2, 4), (4, 7), (7, 11), (11, 16), (16, 24)];

/// Substat count per rarity.
pub const SUBSTAT_COUNTS: [u32; 5] = [0, 1, 2, 3, 4];

/// Substat ranges for percent-based stats.
pub const SUBSTAT_PERCENT_RANGES: [(u32, u32); 5] = [(0, 0), (2, 5), (3, 7), (5, 10), (8, 15)];

/// Substat ranges for flat HP.
pub const SUBSTAT_FLAT_HP_RANGES: [(u32, u32); 5] =
    [(0, 0), (20, 50), (30, 70), (50, 100), (80, 150)];

/// Substat ranges for flat Speed.
pub const SUBSTAT_SPEED_RANGES: [(u32, u32); 5] = [(0, 0), (1, 2), (1, 3), (2, 5), (3, 8)];

// =============================================================================
// MONSTER STAT SCALING
// =============================================================================

/// Per-level multiplier on base stats (level 1 = 1.0).
pub const LEVEL_STAT_SCALING: f64 = 0.05;

/// Per-star multiplier on base stats (1-star = 1.0).
pub const STAR_STAT_SCALING: f64 = 0.1;

/// Highest star grade a monster can hold.
pub const MAX_MONSTER_STARS: u32 = 6;

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Save format magic, "RUNEFALL" in hex.
pub const SAVE_VERSION_MAGIC: u64 = 0x52554E4546414C4C;

/// Store key the progression root persists under.
pub const PROGRESSION_SAVE_KEY: &str = "progression";
