//! combat_core - Combat resolution and character progression
//!
//! This library provides:
//! - Stat aggregation: base stats plus equipped item bonuses into CombatStats
//! - Damage resolution: crit, dodge, block, armor and status effects per exchange
//! - Rewards: gold, experience, item drops and defeat penalties
//! - Progression: leveling curve, level-up growth and combat XP
//!
//! Randomness comes through [`RandomSource`] so every roll can be scripted.

pub mod config;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod progression;
pub mod rewards;
pub mod rng;
pub mod source;
pub mod stat_block;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use config::{default_constants, load_game_constants, ConfigError, GameConstants};
pub use damage::{resolve, resolve_with_rng, ActionKind, CombatAction, DamageResult, Element, WeaponType};
pub use progression::{
    add_experience, combat_xp_for, experience_for_level, experience_to_next_level, LevelUpOutcome,
    LevelUpReward, PlayerStats,
};
pub use rewards::{
    apply_defeat_penalty, apply_rewards, give_combat_rewards, rewards_for, rewards_for_with_rng,
    xp_loss_for, CombatRewards, CombatSummary, RewardApplication,
};
pub use rng::{RandomSource, ScriptedRolls};
pub use source::{BaseStats, BaseStatsSource, GearSource, StatBonuses, StatSource};
pub use stat_block::{aggregate, load_combat_stats, CombatStats, StatAccumulator};
pub use store::{CatalogItem, InMemoryStore, ItemCatalog, PlayerStore, StoreError};
pub use types::{BlockedBy, DamageType, Rarity, StatKind, StatusTag};
