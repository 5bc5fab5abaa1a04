//! StatAccumulator - Collects stat contributions before building CombatStats

use super::CombatStats;
use crate::types::StatKind;

/// Accumulates stat contributions from various sources
///
/// Sources add flat amounts; nothing is clamped here. Negative bonuses may
/// drive a stat below zero and the damage formulas deal with it.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub health: f64,
    pub max_health: f64,
    pub level: u32,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Add a flat bonus to a stat
    pub fn apply_stat(&mut self, stat: StatKind, value: f64) {
        match stat {
            StatKind::Attack => self.attack += value,
            StatKind::Defense => self.defense += value,
            StatKind::Speed => self.speed += value,
            StatKind::Health => {
                self.health += value;
                self.max_health += value;
            }
            StatKind::MaxHealth => self.max_health += value,
        }
    }

    /// Build the final combat stats. Current health never exceeds max health.
    pub fn build(&self) -> CombatStats {
        CombatStats {
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            health: self.health.min(self.max_health),
            max_health: self.max_health,
            level: self.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_stat_sums() {
        let mut acc = StatAccumulator::new();
        acc.apply_stat(StatKind::Attack, 4.0);
        acc.apply_stat(StatKind::Attack, 6.0);
        acc.apply_stat(StatKind::Speed, -2.0);

        let stats = acc.build();
        assert!((stats.attack - 10.0).abs() < f64::EPSILON);
        assert!((stats.speed + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_max_health_bonus_leaves_current_health() {
        let mut acc = StatAccumulator::new();
        acc.apply_stat(StatKind::MaxHealth, 25.0);
        assert!((acc.max_health - 25.0).abs() < f64::EPSILON);
        assert!(acc.health.abs() < f64::EPSILON);
    }
}
