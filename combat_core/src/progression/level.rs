//! Leveling - Applying experience and per-level stat growth

use super::curve::experience_to_next_level;
use crate::config::{default_constants, ProgressionConstants};
use crate::source::BaseStats;
use serde::{Deserialize, Serialize};

/// A character's progression record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    /// Cumulative experience across all levels
    pub experience: u64,
    pub experience_to_next: u64,
    pub health: f64,
    pub max_health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
}

impl PlayerStats {
    /// A fresh level 1 character
    pub fn new() -> Self {
        PlayerStats {
            level: 1,
            experience: 0,
            experience_to_next: 100,
            health: 100.0,
            max_health: 100.0,
            attack: 10.0,
            defense: 5.0,
            speed: 10.0,
        }
    }

    /// Rebuild a progression record from persisted stats and total experience
    pub fn from_base(base: &BaseStats, experience: u64, constants: &ProgressionConstants) -> Self {
        PlayerStats {
            level: base.level,
            experience,
            experience_to_next: experience_to_next_level(base.level, experience, constants),
            health: base.health,
            max_health: base.max_health,
            attack: base.attack,
            defense: base.defense,
            speed: base.speed,
        }
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&PlayerStats> for BaseStats {
    fn from(stats: &PlayerStats) -> Self {
        BaseStats {
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            health: stats.health,
            max_health: stats.max_health,
            level: stats.level,
        }
    }
}

/// Stat growth granted by one level-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelUpReward {
    /// The level reached
    pub level: u32,
    pub health_increase: f64,
    pub attack_increase: f64,
    pub defense_increase: f64,
    pub speed_increase: f64,
}

/// Result of `add_experience`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelUpOutcome {
    pub stats: PlayerStats,
    pub leveled_up: bool,
    pub levels_gained: u32,
    /// Only the most recent level-up, even if several happened
    pub level_up_reward: Option<LevelUpReward>,
}

/// Add experience with the default progression constants
pub fn add_experience(stats: &PlayerStats, experience_gained: u64) -> LevelUpOutcome {
    add_experience_with_constants(stats, experience_gained, &default_constants().progression)
}

/// Add experience, leveling up as many times as the new total allows.
///
/// Experience keeps accumulating at the level cap but stats stop growing.
pub fn add_experience_with_constants(
    stats: &PlayerStats,
    experience_gained: u64,
    constants: &ProgressionConstants,
) -> LevelUpOutcome {
    let mut next = *stats;
    next.experience = next.experience.saturating_add(experience_gained);

    let mut levels_gained = 0;
    let mut level_up_reward = None;

    while next.level < constants.max_level
        && experience_to_next_level(next.level, next.experience, constants) == 0
    {
        next.level += 1;
        next.max_health += constants.health_per_level;
        next.health += constants.health_per_level;
        next.attack += constants.attack_per_level;
        next.defense += constants.defense_per_level;
        next.speed += constants.speed_per_level;
        levels_gained += 1;

        tracing::debug!(level = next.level, experience = next.experience, "level up");

        level_up_reward = Some(LevelUpReward {
            level: next.level,
            health_increase: constants.health_per_level,
            attack_increase: constants.attack_per_level,
            defense_increase: constants.defense_per_level,
            speed_increase: constants.speed_per_level,
        });
    }

    next.experience_to_next = experience_to_next_level(next.level, next.experience, constants);

    LevelUpOutcome {
        stats: next,
        leveled_up: levels_gained > 0,
        levels_gained,
        level_up_reward,
    }
}
