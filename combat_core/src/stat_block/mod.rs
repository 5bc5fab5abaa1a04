//! CombatStats - Effective stats of a combatant for one combat

mod aggregator;

pub use aggregator::StatAccumulator;

use crate::source::{BaseStats, BaseStatsSource, GearSource, StatBonuses, StatSource};
use crate::store::PlayerStore;
use serde::{Deserialize, Serialize};

/// Effective stats for one combat: base stats plus all equipped bonuses.
///
/// Recomputed per combat and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub health: f64,
    pub max_health: f64,
    pub level: u32,
}

impl Default for CombatStats {
    fn default() -> Self {
        CombatStats::from(BaseStats::default())
    }
}

impl From<BaseStats> for CombatStats {
    fn from(base: BaseStats) -> Self {
        CombatStats {
            attack: base.attack,
            defense: base.defense,
            speed: base.speed,
            health: base.health.min(base.max_health),
            max_health: base.max_health,
            level: base.level,
        }
    }
}

impl CombatStats {
    /// Build stats from arbitrary sources, applied in priority order
    pub fn from_sources(sources: &[Box<dyn StatSource>]) -> Self {
        let mut accumulator = StatAccumulator::new();

        let mut sorted_sources: Vec<_> = sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        for source in sorted_sources {
            source.apply(&mut accumulator);
        }

        accumulator.build()
    }

    /// Check if the combatant is still standing
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Take damage, flooring health at zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = (self.health - amount as f64).max(0.0);
    }

    /// Remaining health as a fraction of max
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// Merge base stats with every equipped item's bonuses
pub fn aggregate(base: &BaseStats, equipped: &[StatBonuses]) -> CombatStats {
    let mut sources: Vec<Box<dyn StatSource>> = Vec::with_capacity(equipped.len() + 1);
    sources.push(Box::new(BaseStatsSource::new(*base)));
    for (slot, bonuses) in equipped.iter().enumerate() {
        sources.push(Box::new(GearSource::new(
            format!("equipped_{}", slot),
            bonuses.clone(),
        )));
    }
    CombatStats::from_sources(&sources)
}

/// Fetch a player's equipment from the store and aggregate it.
///
/// If the store cannot supply the equipment the base stats are returned
/// unchanged; the combat goes on without item bonuses.
pub fn load_combat_stats(store: &dyn PlayerStore, player_id: &str, base: &BaseStats) -> CombatStats {
    match store.equipped_bonuses(player_id) {
        Ok(equipped) => aggregate(base, &equipped),
        Err(err) => {
            tracing::warn!(
                "equipment lookup for {} failed ({}); using base stats",
                player_id,
                err
            );
            CombatStats::from(*base)
        }
    }
}
