//! Collaborator contracts for player records and the item catalog.
//!
//! The engine never owns persistence. It reads base stats, equipment and
//! catalog rows through these traits and writes rewards back through
//! increment-style mutators. Implementations must apply increments
//! atomically; two combats finishing at once for the same player must not
//! lose an update.

mod memory;

pub use memory::InMemoryStore;

use crate::source::{BaseStats, StatBonuses};
use crate::types::Rarity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// A row of the item catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    #[serde(default, alias = "iconUrl", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity) -> Self {
        CatalogItem {
            id: id.into(),
            name: name.into(),
            rarity,
            icon_url: None,
        }
    }

    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }
}

/// Player records: stats and equipment in, reward deltas out
pub trait PlayerStore: Send + Sync {
    /// Base stats of a player
    fn base_stats(&self, player_id: &str) -> Result<BaseStats>;

    /// Bonus maps of every currently equipped item
    fn equipped_bonuses(&self, player_id: &str) -> Result<Vec<StatBonuses>>;

    /// Atomically add `delta` to the player's gold, returning the new total
    fn increment_gold(&self, player_id: &str, delta: i64) -> Result<i64>;

    /// Atomically add `delta` (may be negative) to the player's experience,
    /// returning the new total
    fn increment_experience(&self, player_id: &str, delta: i64) -> Result<i64>;

    /// Insert an item into the player's inventory
    fn add_inventory_item(&self, player_id: &str, item: &CatalogItem) -> Result<()>;
}

/// Item catalog queryable by rarity
pub trait ItemCatalog: Send + Sync {
    /// Every catalog item of the given rarity. An empty list is not an error.
    fn items_by_rarity(&self, rarity: Rarity) -> Result<Vec<CatalogItem>>;
}
