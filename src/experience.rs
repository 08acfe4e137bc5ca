//! Monster experience curve and level state.

use serde::{Deserialize, Serialize};

use crate::core::constants::{MAX_MONSTER_LEVEL, XP_CURVE_BASE, XP_CURVE_EXPONENT};

/// Calculates the experience required to reach `target_level` from the level
/// below it: `round(100 * target_level^1.5)`.
pub fn required_experience(target_level: u32) -> u64 {
    (XP_CURVE_BASE * (target_level as f64).powf(XP_CURVE_EXPONENT)).round() as u64
}

/// A monster's level and experience progress.
///
/// `experience` stays below `experience_to_next` except transiently between
/// a grant and the [`LevelState::level_up`] calls that drain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    pub level: u32,
    pub experience: u64,
    pub experience_to_next: u64,
}

impl LevelState {
    /// Creates a fresh level-1 state.
    pub fn new() -> Self {
        Self {
            level: 1,
            experience: 0,
            experience_to_next: required_experience(2),
        }
    }

    /// Accumulates experience without applying level-ups.
    ///
    /// Experience keeps accruing at the level cap so progress bars can
    /// still render; it just never converts to another level.
    pub fn add_experience(&mut self, amount: u64) {
        self.experience += amount;
    }

    /// True when enough experience is banked and the cap is not reached.
    pub fn can_level_up(&self) -> bool {
        self.experience >= self.experience_to_next && self.level < MAX_MONSTER_LEVEL
    }

    /// Applies a single pending level-up, carrying surplus experience
    /// forward. Returns false (and changes nothing) when none is pending.
    pub fn level_up(&mut self) -> bool {
        if !self.can_level_up() {
            return false;
        }
        self.experience -= self.experience_to_next;
        self.level += 1;
        self.experience_to_next = required_experience(self.level + 1);
        true
    }

    /// Grants experience and drains all resulting level-ups.
    /// Returns how many levels were gained.
    pub fn apply_experience(&mut self, amount: u64) -> u32 {
        self.add_experience(amount);
        let mut gained = 0;
        while self.level_up() {
            gained += 1;
        }
        gained
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_MONSTER_LEVEL
    }
}

impl Default for LevelState {
    fn default() -> Self {
        Self::new()
    }
}
