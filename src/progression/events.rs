//! Outbound progression notifications.
//!
//! Operations return these as plain values; the caller fans them out to
//! whatever cares (UI, audio, unlock banners). Subscribers get no
//! ordering guarantee and send nothing back.

use serde::{Deserialize, Serialize};

/// A single notification produced by a progression operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    BattleCompleted {
        region: u32,
        level: u32,
        battle: u32,
        stars: u32,
    },
    LevelCompleted {
        region: u32,
        level: u32,
    },
    LevelUnlocked {
        region: u32,
        level: u32,
    },
    RegionCompleted {
        region: u32,
    },
    RegionUnlocked {
        region: u32,
    },
    ProgressionLoaded,
}
