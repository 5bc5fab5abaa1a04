//! In-memory store for tests and local simulation.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{CatalogItem, ItemCatalog, PlayerStore, Result, StoreError};
use crate::source::{BaseStats, StatBonuses};
use crate::types::Rarity;

#[derive(Debug, Clone, Default)]
struct PlayerRecord {
    base_stats: BaseStats,
    equipped: Vec<StatBonuses>,
    gold: i64,
    experience: i64,
    inventory: Vec<CatalogItem>,
}

/// In-memory implementation of `PlayerStore` and `ItemCatalog`.
///
/// Every increment runs under one write lock, so concurrent reward
/// applications never lose updates.
pub struct InMemoryStore {
    players: RwLock<HashMap<String, PlayerRecord>>,
    catalog: RwLock<Vec<CatalogItem>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
            catalog: RwLock::new(Vec::new()),
        }
    }

    /// Create a store preloaded with catalog items
    pub fn with_catalog(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
            catalog: RwLock::new(items.into_iter().collect()),
        }
    }

    /// Register (or replace) a player record
    pub fn insert_player(&self, player_id: &str, base_stats: BaseStats) {
        if let Ok(mut players) = self.players.write() {
            players.insert(
                player_id.to_string(),
                PlayerRecord {
                    base_stats,
                    ..PlayerRecord::default()
                },
            );
        }
    }

    /// Equip an item's bonuses on a player. Returns false for unknown players.
    pub fn equip(&self, player_id: &str, bonuses: StatBonuses) -> bool {
        match self.players.write() {
            Ok(mut players) => match players.get_mut(player_id) {
                Some(record) => {
                    record.equipped.push(bonuses);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Overwrite a player's base stats (e.g. after a level-up)
    pub fn set_base_stats(&self, player_id: &str, base_stats: BaseStats) -> Result<()> {
        self.with_player_mut(player_id, |record| record.base_stats = base_stats)
    }

    /// Add an item to the catalog
    pub fn add_catalog_item(&self, item: CatalogItem) {
        if let Ok(mut catalog) = self.catalog.write() {
            catalog.push(item);
        }
    }

    pub fn gold(&self, player_id: &str) -> Result<i64> {
        self.with_player(player_id, |record| record.gold)
    }

    pub fn experience(&self, player_id: &str) -> Result<i64> {
        self.with_player(player_id, |record| record.experience)
    }

    pub fn inventory(&self, player_id: &str) -> Result<Vec<CatalogItem>> {
        self.with_player(player_id, |record| record.inventory.clone())
    }

    fn with_player<T>(&self, player_id: &str, f: impl FnOnce(&PlayerRecord) -> T) -> Result<T> {
        let players = self.players.read().map_err(|_| StoreError::LockPoisoned)?;
        players
            .get(player_id)
            .map(f)
            .ok_or_else(|| StoreError::PlayerNotFound(player_id.to_string()))
    }

    fn with_player_mut<T>(
        &self,
        player_id: &str,
        f: impl FnOnce(&mut PlayerRecord) -> T,
    ) -> Result<T> {
        let mut players = self.players.write().map_err(|_| StoreError::LockPoisoned)?;
        players
            .get_mut(player_id)
            .map(f)
            .ok_or_else(|| StoreError::PlayerNotFound(player_id.to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore for InMemoryStore {
    fn base_stats(&self, player_id: &str) -> Result<BaseStats> {
        self.with_player(player_id, |record| record.base_stats)
    }

    fn equipped_bonuses(&self, player_id: &str) -> Result<Vec<StatBonuses>> {
        self.with_player(player_id, |record| record.equipped.clone())
    }

    fn increment_gold(&self, player_id: &str, delta: i64) -> Result<i64> {
        self.with_player_mut(player_id, |record| {
            record.gold = record.gold.saturating_add(delta).max(0);
            record.gold
        })
    }

    fn increment_experience(&self, player_id: &str, delta: i64) -> Result<i64> {
        self.with_player_mut(player_id, |record| {
            record.experience = record.experience.saturating_add(delta).max(0);
            record.experience
        })
    }

    fn add_inventory_item(&self, player_id: &str, item: &CatalogItem) -> Result<()> {
        self.with_player_mut(player_id, |record| record.inventory.push(item.clone()))
    }
}

impl ItemCatalog for InMemoryStore {
    fn items_by_rarity(&self, rarity: Rarity) -> Result<Vec<CatalogItem>> {
        let catalog = self.catalog.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(catalog
            .iter()
            .filter(|item| item.rarity == rarity)
            .cloned()
            .collect())
    }
}
