//! Item drops - Rarity tables and catalog picks

use crate::rng::RandomSource;
use crate::store::{CatalogItem, ItemCatalog};
use crate::types::Rarity;

/// Weighted rarity table. Weights are percentages and need not sum to 100;
/// a draw that falls past the last bucket yields `Rarity::Common`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityTable {
    pub weights: [(Rarity, f64); 5],
}

/// Table used when computing post-combat rewards
pub const REWARD_DROP_TABLE: RarityTable = RarityTable {
    weights: [
        (Rarity::Common, 40.0),
        (Rarity::Uncommon, 25.0),
        (Rarity::Rare, 15.0),
        (Rarity::Epic, 10.0),
        (Rarity::Legendary, 5.0),
    ],
};

/// Table used by the direct "give combat rewards" path
pub const COMBAT_LOOT_TABLE: RarityTable = RarityTable {
    weights: [
        (Rarity::Common, 50.0),
        (Rarity::Uncommon, 30.0),
        (Rarity::Rare, 15.0),
        (Rarity::Epic, 4.0),
        (Rarity::Legendary, 1.0),
    ],
};

impl RarityTable {
    /// Pick a rarity with one cumulative draw
    pub fn roll(&self, rng: &mut impl RandomSource) -> Rarity {
        let roll = rng.next_f64() * 100.0;
        let mut cumulative = 0.0;
        for (rarity, weight) in self.weights {
            cumulative += weight;
            if roll < cumulative {
                return rarity;
            }
        }
        Rarity::Common
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

/// Pick one catalog item of the given rarity.
///
/// No items of that rarity, or a catalog failure, means no drop.
pub fn pick_catalog_item(
    catalog: &dyn ItemCatalog,
    rarity: Rarity,
    rng: &mut impl RandomSource,
) -> Option<CatalogItem> {
    let items = match catalog.items_by_rarity(rarity) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("catalog lookup for {} items failed: {}", rarity, err);
            return None;
        }
    };

    if items.is_empty() {
        tracing::debug!("no {} items in catalog, skipping drop", rarity);
        return None;
    }

    let index = rng.pick_index(items.len());
    items.into_iter().nth(index)
}

/// Roll the drop chance, then rarity, then the item itself
pub fn roll_item_drop(
    catalog: &dyn ItemCatalog,
    table: &RarityTable,
    drop_chance: f64,
    rng: &mut impl RandomSource,
) -> Option<CatalogItem> {
    if !rng.roll(drop_chance) {
        return None;
    }
    let rarity = table.roll(rng);
    pick_catalog_item(catalog, rarity, rng)
}
