//! Progression - Leveling curve, experience and combat XP

mod combat_xp;
mod curve;
mod level;

pub use combat_xp::{combat_xp_for, CombatPerformance};
pub use curve::{experience_for_level, experience_to_next_level};
pub use level::{add_experience, add_experience_with_constants, LevelUpOutcome, LevelUpReward, PlayerStats};
