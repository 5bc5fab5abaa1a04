//! Reward application - Writing rewards and penalties through the store
//!
//! Each reward type is written independently. A failed gold write does not
//! stop the XP or item writes; the caller gets one success flag per type.

use super::calculation::CombatRewards;
use super::drops::{roll_item_drop, COMBAT_LOOT_TABLE};
use crate::config::RewardConstants;
use crate::rng::RandomSource;
use crate::store::{CatalogItem, ItemCatalog, PlayerStore};
use serde::{Deserialize, Serialize};

/// Per-reward-type outcome of writing to the store.
///
/// A write with nothing to apply (zero gold, zero XP, no item) is skipped
/// and reported as successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardApplication {
    pub gold_applied: bool,
    pub experience_applied: bool,
    pub item_applied: bool,
}

impl RewardApplication {
    pub fn all_applied(&self) -> bool {
        self.gold_applied && self.experience_applied && self.item_applied
    }
}

/// Outcome of the direct "give combat rewards" path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantedRewards {
    pub gold: u32,
    pub experience: u32,
    pub item: Option<CatalogItem>,
    pub application: RewardApplication,
}

/// Write computed combat rewards for the winner
pub fn apply_rewards(
    store: &dyn PlayerStore,
    player_id: &str,
    rewards: &CombatRewards,
) -> RewardApplication {
    if rewards.penalties.no_rewards {
        tracing::debug!(
            "no rewards for {}: {}",
            player_id,
            rewards.penalties.reason.as_deref().unwrap_or("withheld")
        );
    }

    write_rewards(
        store,
        player_id,
        rewards.gold,
        rewards.experience,
        rewards.item.as_ref(),
    )
}

/// Take the loser's experience penalty. Returns whether the write succeeded.
pub fn apply_defeat_penalty(store: &dyn PlayerStore, player_id: &str, experience_loss: u32) -> bool {
    if experience_loss == 0 {
        return true;
    }
    match store.increment_experience(player_id, -(experience_loss as i64)) {
        Ok(total) => {
            tracing::debug!("{} lost {} XP (now {})", player_id, experience_loss, total);
            true
        }
        Err(err) => {
            tracing::warn!("failed to apply XP loss to {}: {}", player_id, err);
            false
        }
    }
}

/// Grant gold and XP directly and roll an item from the combat loot table
pub fn give_combat_rewards(
    store: &dyn PlayerStore,
    catalog: &dyn ItemCatalog,
    player_id: &str,
    gold: u32,
    experience: u32,
    constants: &RewardConstants,
    rng: &mut impl RandomSource,
) -> GrantedRewards {
    let item = roll_item_drop(catalog, &COMBAT_LOOT_TABLE, constants.drop_chance, rng);
    let application = write_rewards(store, player_id, gold, experience, item.as_ref());

    GrantedRewards {
        gold,
        experience,
        item,
        application,
    }
}

fn write_rewards(
    store: &dyn PlayerStore,
    player_id: &str,
    gold: u32,
    experience: u32,
    item: Option<&CatalogItem>,
) -> RewardApplication {
    let gold_applied = gold == 0
        || match store.increment_gold(player_id, gold as i64) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("failed to grant {} gold to {}: {}", gold, player_id, err);
                false
            }
        };

    let experience_applied = experience == 0
        || match store.increment_experience(player_id, experience as i64) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("failed to grant {} XP to {}: {}", experience, player_id, err);
                false
            }
        };

    let item_applied = match item {
        None => true,
        Some(item) => match store.add_inventory_item(player_id, item) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("failed to add {} to {}'s inventory: {}", item.id, player_id, err);
                false
            }
        },
    };

    RewardApplication {
        gold_applied,
        experience_applied,
        item_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::RewardPenalties;
    use crate::rng::ScriptedRolls;
    use crate::source::{BaseStats, StatBonuses};
    use crate::store::{InMemoryStore, StoreError};
    use crate::types::Rarity;
    use std::sync::Mutex;

    /// Store whose gold writes always fail
    struct GoldlessStore {
        experience: Mutex<i64>,
        items: Mutex<Vec<CatalogItem>>,
    }

    impl GoldlessStore {
        fn new() -> Self {
            GoldlessStore {
                experience: Mutex::new(0),
                items: Mutex::new(Vec::new()),
            }
        }
    }

    impl PlayerStore for GoldlessStore {
        fn base_stats(&self, _: &str) -> crate::store::Result<BaseStats> {
            Ok(BaseStats::default())
        }
        fn equipped_bonuses(&self, _: &str) -> crate::store::Result<Vec<StatBonuses>> {
            Ok(Vec::new())
        }
        fn increment_gold(&self, _: &str, _: i64) -> crate::store::Result<i64> {
            Err(StoreError::Unavailable("gold ledger offline".into()))
        }
        fn increment_experience(&self, _: &str, delta: i64) -> crate::store::Result<i64> {
            let mut xp = self.experience.lock().map_err(|_| StoreError::LockPoisoned)?;
            *xp += delta;
            Ok(*xp)
        }
        fn add_inventory_item(&self, _: &str, item: &CatalogItem) -> crate::store::Result<()> {
            self.items
                .lock()
                .map_err(|_| StoreError::LockPoisoned)?
                .push(item.clone());
            Ok(())
        }
    }

    fn rewards(gold: u32, experience: u32, item: Option<CatalogItem>) -> CombatRewards {
        CombatRewards {
            gold,
            experience,
            item,
            penalties: RewardPenalties::default(),
        }
    }

    #[test]
    fn test_apply_all_rewards() {
        let store = InMemoryStore::new();
        store.insert_player("alice", BaseStats::default());
        let sword = CatalogItem::new("s1", "Short Sword", Rarity::Common);

        let result = apply_rewards(&store, "alice", &rewards(54, 122, Some(sword.clone())));

        assert!(result.all_applied());
        assert_eq!(store.gold("alice").unwrap(), 54);
        assert_eq!(store.experience("alice").unwrap(), 122);
        assert_eq!(store.inventory("alice").unwrap(), vec![sword]);
    }

    #[test]
    fn test_gold_failure_does_not_block_other_writes() {
        let store = GoldlessStore::new();
        let gem = CatalogItem::new("g1", "Gem", Rarity::Rare);

        let result = apply_rewards(&store, "bob", &rewards(40, 90, Some(gem)));

        assert!(!result.gold_applied);
        assert!(result.experience_applied);
        assert!(result.item_applied);
        assert_eq!(*store.experience.lock().unwrap(), 90);
        assert_eq!(store.items.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_rewards_skip_writes() {
        // Unknown player: any actual write would fail
        let store = InMemoryStore::new();
        let result = apply_rewards(&store, "nobody", &rewards(0, 0, None));
        assert!(result.all_applied());
    }

    #[test]
    fn test_unknown_player_reports_failures() {
        let store = InMemoryStore::new();
        let result = apply_rewards(&store, "nobody", &rewards(10, 10, None));
        assert!(!result.gold_applied);
        assert!(!result.experience_applied);
        assert!(result.item_applied);
    }

    #[test]
    fn test_defeat_penalty() {
        let store = InMemoryStore::new();
        store.insert_player("carol", BaseStats::default());
        store.increment_experience("carol", 100).unwrap();

        assert!(apply_defeat_penalty(&store, "carol", 30));
        assert_eq!(store.experience("carol").unwrap(), 70);
        assert!(!apply_defeat_penalty(&store, "dave", 30));
    }

    #[test]
    fn test_give_combat_rewards_uses_loot_table() {
        let store = InMemoryStore::with_catalog([
            CatalogItem::new("u1", "Iron Shield", Rarity::Uncommon),
            CatalogItem::new("e1", "Ember Blade", Rarity::Epic),
        ]);
        store.insert_player("erin", BaseStats::default());

        // drop, 0.60 -> uncommon under 50/30/15/4/1 (it would be uncommon under 40/25 too)
        let mut rolls = ScriptedRolls::new([0.0, 0.60, 0.0]);
        let granted = give_combat_rewards(
            &store,
            &store,
            "erin",
            25,
            60,
            &RewardConstants::default(),
            &mut rolls,
        );
        assert_eq!(granted.item.as_ref().map(|i| i.id.as_str()), Some("u1"));
        assert!(granted.application.all_applied());

        // 0.995: legendary bucket in the loot table, none in catalog
        let mut rolls = ScriptedRolls::new([0.0, 0.995]);
        let granted = give_combat_rewards(
            &store,
            &store,
            "erin",
            25,
            60,
            &RewardConstants::default(),
            &mut rolls,
        );
        assert!(granted.item.is_none());
        assert_eq!(store.gold("erin").unwrap(), 50);
        assert_eq!(store.experience("erin").unwrap(), 120);
        assert_eq!(store.inventory("erin").unwrap().len(), 1);
    }

    #[test]
    fn test_loot_table_differs_from_reward_table() {
        let store = InMemoryStore::with_catalog([
            CatalogItem::new("c1", "Stick", Rarity::Common),
            CatalogItem::new("r1", "Ring", Rarity::Rare),
        ]);
        store.insert_player("finn", BaseStats::default());

        // 0.70 is rare in the reward table but uncommon in the loot table
        let mut rolls = ScriptedRolls::new([0.0, 0.70, 0.0]);
        let granted = give_combat_rewards(&store, &store, "finn", 0, 0, &RewardConstants::default(), &mut rolls);
        assert!(granted.item.is_none());
    }
}
