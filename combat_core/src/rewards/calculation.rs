//! Reward computation - Gold, experience, drops and loss penalties

use super::drops::{roll_item_drop, REWARD_DROP_TABLE};
use crate::config::{default_constants, RewardConstants};
use crate::rng::RandomSource;
use crate::store::{CatalogItem, ItemCatalog};
use serde::{Deserialize, Serialize};

/// What the reward engine needs to know about a finished combat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatSummary {
    pub winner_level: u32,
    pub loser_level: u32,
    /// Total damage the winner dealt
    pub damage_dealt: u64,
    /// Combat length in seconds
    pub combat_duration: f64,
}

impl CombatSummary {
    pub fn level_difference(&self) -> u32 {
        self.winner_level.abs_diff(self.loser_level)
    }
}

/// Why rewards were withheld, if they were
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPenalties {
    pub level_difference: u32,
    pub no_rewards: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Rewards granted to the winner of a combat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatRewards {
    pub gold: u32,
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<CatalogItem>,
    pub penalties: RewardPenalties,
}

impl CombatRewards {
    /// Whether anything at all was granted
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.experience == 0 && self.item.is_none()
    }
}

/// Compute rewards using the thread RNG and default constants
pub fn rewards_for(summary: &CombatSummary, catalog: &dyn ItemCatalog) -> CombatRewards {
    let mut rng = rand::thread_rng();
    rewards_for_with_rng(summary, catalog, &default_constants().rewards, &mut rng)
}

/// Compute rewards with a provided random source
pub fn rewards_for_with_rng(
    summary: &CombatSummary,
    catalog: &dyn ItemCatalog,
    constants: &RewardConstants,
    rng: &mut impl RandomSource,
) -> CombatRewards {
    let level_difference = summary.level_difference();

    if level_difference > constants.max_level_difference {
        tracing::debug!(level_difference, "level gap too large, withholding rewards");
        return CombatRewards {
            gold: 0,
            experience: 0,
            item: None,
            penalties: RewardPenalties {
                level_difference,
                no_rewards: true,
                reason: Some(format!(
                    "Level difference too large ({} levels, max {}). No rewards granted.",
                    level_difference, constants.max_level_difference
                )),
            },
        };
    }

    let gold = gold_reward(summary.winner_level, summary.damage_dealt, constants);
    let experience = experience_reward(
        summary.winner_level,
        summary.damage_dealt,
        summary.combat_duration,
        constants,
    );
    let item = roll_item_drop(catalog, &REWARD_DROP_TABLE, constants.drop_chance, rng);

    CombatRewards {
        gold,
        experience,
        item,
        penalties: RewardPenalties {
            level_difference,
            no_rewards: false,
            reason: None,
        },
    }
}

/// Gold for a win: base by level plus a damage bonus capped at a fraction of base
pub fn gold_reward(winner_level: u32, damage_dealt: u64, constants: &RewardConstants) -> u32 {
    let base = constants.gold_base + winner_level as f64 * constants.gold_per_level;
    let damage_bonus =
        (damage_dealt as f64 * constants.gold_damage_factor).min(base * constants.gold_damage_bonus_cap);
    let gold = (base + damage_bonus).floor();
    gold.min(constants.max_gold as f64) as u32
}

/// Experience for a win: base by level plus capped damage and duration bonuses
pub fn experience_reward(
    winner_level: u32,
    damage_dealt: u64,
    combat_duration: f64,
    constants: &RewardConstants,
) -> u32 {
    let base = constants.experience_base + winner_level as f64 * constants.experience_per_level;
    let damage_bonus =
        (damage_dealt as f64 * constants.experience_damage_factor).min(constants.experience_damage_bonus_cap);
    let duration_bonus = (combat_duration / constants.experience_duration_divisor)
        .clamp(0.0, constants.experience_duration_bonus_cap);
    let experience = (base + damage_bonus + duration_bonus).floor();
    experience.min(constants.max_experience as f64) as u32
}

/// Experience the loser forfeits
pub fn xp_loss_for(loser_level: u32, winner_level: u32) -> u32 {
    xp_loss_with_constants(loser_level, winner_level, &default_constants().rewards)
}

pub fn xp_loss_with_constants(loser_level: u32, winner_level: u32, constants: &RewardConstants) -> u32 {
    let level_difference = loser_level.abs_diff(winner_level);
    let gap_penalty = if level_difference > constants.max_level_difference {
        level_difference as u64 * constants.loss_gap_factor as u64
    } else {
        0
    };
    let loss = constants.loss_base as u64 + loser_level as u64 * constants.loss_per_level as u64 + gap_penalty;
    loss.min(constants.max_experience_loss as u64) as u32
}
