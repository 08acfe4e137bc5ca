//! Campaign progression tracking and the completion-cascade state machine.

pub mod events;
pub mod machine;
pub mod types;

pub use events::ProgressionEvent;
pub use machine::{ProgressionConfig, ProgressionStateMachine};
pub use types::{BattleProgress, LevelProgress, ProgressionRoot, RegionProgress};
