//! Rewards system - Post-combat gold, experience, drops and penalties

mod apply;
mod calculation;
mod drops;

pub use apply::{apply_defeat_penalty, apply_rewards, give_combat_rewards, GrantedRewards, RewardApplication};
pub use calculation::{
    experience_reward, gold_reward, rewards_for, rewards_for_with_rng, xp_loss_for,
    xp_loss_with_constants, CombatRewards, CombatSummary, RewardPenalties,
};
pub use drops::{pick_catalog_item, roll_item_drop, RarityTable, COMBAT_LOOT_TABLE, REWARD_DROP_TABLE};
