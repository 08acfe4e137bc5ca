use serde::{Deserialize, Serialize};

/// Rune quality tier, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// All tiers, lowest to highest.
    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }

    /// Table index of this tier (Common = 0 .. Legendary = 4).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// One of the six rune socket positions on a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuneSlot {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl RuneSlot {
    pub fn all() -> [RuneSlot; 6] {
        [
            RuneSlot::One,
            RuneSlot::Two,
            RuneSlot::Three,
            RuneSlot::Four,
            RuneSlot::Five,
            RuneSlot::Six,
        ]
    }

    /// 1-based socket position.
    pub fn position(&self) -> u32 {
        match self {
            RuneSlot::One => 1,
            RuneSlot::Two => 2,
            RuneSlot::Three => 3,
            RuneSlot::Four => 4,
            RuneSlot::Five => 5,
            RuneSlot::Six => 6,
        }
    }
}

/// Rune set tag. Rolled independently of rarity and slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuneSet {
    Energy,
    Fatal,
    Blade,
    Rage,
    Focus,
    Guard,
}

impl RuneSet {
    pub fn all() -> [RuneSet; 6] {
        [
            RuneSet::Energy,
            RuneSet::Fatal,
            RuneSet::Blade,
            RuneSet::Rage,
            RuneSet::Focus,
            RuneSet::Guard,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuneSet::Energy => "Energy",
            RuneSet::Fatal => "Fatal",
            RuneSet::Blade => "Blade",
            RuneSet::Rage => "Rage",
            RuneSet::Focus => "Focus",
            RuneSet::Guard => "Guard",
        }
    }
}

/// The stat a rune line modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    // Flat
    Hp,
    Attack,
    Defense,
    Speed,
    // Percent
    HpPercent,
    AttackPercent,
    DefensePercent,
    CritRate,
}

impl StatKind {
    pub fn all() -> [StatKind; 8] {
        [
            StatKind::Hp,
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Speed,
            StatKind::HpPercent,
            StatKind::AttackPercent,
            StatKind::DefensePercent,
            StatKind::CritRate,
        ]
    }
}

/// A single stat line on a rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneStat {
    pub kind: StatKind,
    pub value: u32,
}

/// A generated rune: socket position, set tag, rarity, and stat lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rune {
    pub slot: RuneSlot,
    pub set: RuneSet,
    pub rarity: Rarity,
    pub primary: RuneStat,
    pub substats: Vec<RuneStat>,
}
