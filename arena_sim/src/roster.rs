//! Built-in duelists and item catalog

use crate::error::Result;
use combat_core::config::{default_constants, ProgressionConstants};
use combat_core::damage::{ActionKind, CombatAction, Element, WeaponType};
use combat_core::progression::experience_for_level;
use combat_core::source::{BaseStats, StatBonuses};
use combat_core::store::{CatalogItem, InMemoryStore, PlayerStore};
use combat_core::types::Rarity;

/// A character entering the arena
#[derive(Debug, Clone)]
pub struct Duelist {
    pub id: String,
    pub name: String,
    pub base: BaseStats,
    /// Experience already earned
    pub experience: i64,
    pub gear: Vec<StatBonuses>,
    /// Actions used in rotation, one per turn
    pub actions: Vec<CombatAction>,
}

impl Duelist {
    /// Action for the duelist's nth turn
    pub fn action_for_turn(&self, turn: usize) -> CombatAction {
        if self.actions.is_empty() {
            return CombatAction::attack();
        }
        self.actions[turn % self.actions.len()]
    }
}

/// Keep a requested level inside `1..=max_level`
pub fn clamp_level(level: u32, constants: &ProgressionConstants) -> u32 {
    level.clamp(1, constants.max_level.max(1))
}

fn starting_experience(level: u32) -> i64 {
    i64::try_from(experience_for_level(level, &default_constants().progression)).unwrap_or(i64::MAX)
}

/// Axe-wielding bruiser
pub fn brann(level: u32) -> Duelist {
    Duelist {
        id: "brann".to_string(),
        name: "Brann the Stout".to_string(),
        base: BaseStats {
            attack: 14.0 + 2.0 * (level.saturating_sub(1)) as f64,
            defense: 8.0 + level.saturating_sub(1) as f64,
            speed: 8.0 + 0.5 * level.saturating_sub(1) as f64,
            health: 120.0 + 10.0 * level.saturating_sub(1) as f64,
            max_health: 120.0 + 10.0 * level.saturating_sub(1) as f64,
            level,
        },
        experience: starting_experience(level),
        gear: vec![
            StatBonuses::new().with("attack", 6).with("health", 20),
            StatBonuses::new().with("defense", 4).with("rune", "unidentified"),
        ],
        actions: vec![
            CombatAction::new(ActionKind::StrongAttack).with_weapon(WeaponType::Axe),
            CombatAction::new(ActionKind::Attack).with_weapon(WeaponType::Axe),
        ],
    }
}

/// Quick dagger user with poisoned blades
pub fn sable(level: u32) -> Duelist {
    Duelist {
        id: "sable".to_string(),
        name: "Sable Nightwhisper".to_string(),
        base: BaseStats {
            attack: 11.0 + 2.0 * level.saturating_sub(1) as f64,
            defense: 4.0 + level.saturating_sub(1) as f64,
            speed: 18.0 + 0.5 * level.saturating_sub(1) as f64,
            health: 90.0 + 10.0 * level.saturating_sub(1) as f64,
            max_health: 90.0 + 10.0 * level.saturating_sub(1) as f64,
            level,
        },
        experience: starting_experience(level),
        gear: vec![
            StatBonuses::new().with("speed", 15).with("maxHealth", 10),
            StatBonuses::new().with("attack", 3.5),
        ],
        actions: vec![
            CombatAction::new(ActionKind::QuickAttack)
                .with_weapon(WeaponType::Dagger)
                .with_element(Element::Poison),
            CombatAction::new(ActionKind::Attack).with_weapon(WeaponType::Dagger),
            CombatAction::new(ActionKind::Special)
                .with_weapon(WeaponType::Dagger)
                .with_element(Element::Lightning),
        ],
    }
}

/// Catalog the arena draws loot from
pub fn arena_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("worn_gloves", "Worn Gloves", Rarity::Common),
        CatalogItem::new("iron_buckler", "Iron Buckler", Rarity::Common),
        CatalogItem::new("steel_helm", "Steel Helm", Rarity::Uncommon),
        CatalogItem::new("ember_charm", "Ember Charm", Rarity::Rare).with_icon("/icons/ember_charm.png"),
        CatalogItem::new("frost_edge", "Frost Edge", Rarity::Epic).with_icon("/icons/frost_edge.png"),
        CatalogItem::new("crown_of_storms", "Crown of Storms", Rarity::Legendary)
            .with_icon("/icons/crown_of_storms.png"),
    ]
}

/// Store seeded with the catalog and both duelists
pub fn arena_store(duelists: &[&Duelist]) -> Result<InMemoryStore> {
    let store = InMemoryStore::with_catalog(arena_catalog());
    for duelist in duelists {
        store.insert_player(&duelist.id, duelist.base);
        store.increment_experience(&duelist.id, duelist.experience)?;
        for bonuses in &duelist.gear {
            store.equip(&duelist.id, bonuses.clone());
        }
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_level() {
        let c = ProgressionConstants::default();
        assert_eq!(clamp_level(0, &c), 1);
        assert_eq!(clamp_level(12, &c), 12);
        assert_eq!(clamp_level(97, &c), 50);
        assert_eq!(clamp_level(u32::MAX, &c), 50);
    }

    #[test]
    fn test_starting_experience_never_wraps() {
        assert_eq!(starting_experience(1), 0);
        assert_eq!(starting_experience(3), 250);
        // Past the point where the cumulative curve overflows i64
        assert_eq!(starting_experience(97), i64::MAX);
        assert_eq!(starting_experience(500), i64::MAX);
    }

    #[test]
    fn test_store_keeps_high_level_experience() {
        let veteran = sable(97);
        let store = arena_store(&[&veteran]).unwrap();
        assert_eq!(store.experience("sable").unwrap(), i64::MAX);
    }
}
