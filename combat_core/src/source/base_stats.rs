//! BaseStatsSource - A character's persisted stats before equipment

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use serde::{Deserialize, Serialize};

/// Persisted character stats, before any equipment is applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub health: f64,
    #[serde(alias = "maxHealth")]
    pub max_health: f64,
    pub level: u32,
}

impl Default for BaseStats {
    fn default() -> Self {
        BaseStats {
            attack: 10.0,
            defense: 5.0,
            speed: 10.0,
            health: 100.0,
            max_health: 100.0,
            level: 1,
        }
    }
}

/// Stats from the character record itself
pub struct BaseStatsSource {
    pub stats: BaseStats,
}

impl BaseStatsSource {
    /// Create a new base stats source
    pub fn new(stats: BaseStats) -> Self {
        BaseStatsSource { stats }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.attack += self.stats.attack;
        stats.defense += self.stats.defense;
        stats.speed += self.stats.speed;
        stats.health += self.stats.health;
        stats.max_health += self.stats.max_health;
        stats.level = self.stats.level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stats_copied_into_accumulator() {
        let source = BaseStatsSource::new(BaseStats {
            attack: 12.0,
            defense: 4.0,
            speed: 8.5,
            health: 90.0,
            max_health: 110.0,
            level: 7,
        });
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert!((acc.attack - 12.0).abs() < f64::EPSILON);
        assert!((acc.speed - 8.5).abs() < f64::EPSILON);
        assert!((acc.health - 90.0).abs() < f64::EPSILON);
        assert!((acc.max_health - 110.0).abs() < f64::EPSILON);
        assert_eq!(acc.level, 7);
    }

    #[test]
    fn test_base_stats_priority() {
        let source = BaseStatsSource::new(BaseStats::default());
        assert_eq!(source.priority(), -100);
    }

    #[test]
    fn test_base_stats_from_backend_json() {
        let json = r#"{"attack":15,"defense":6,"speed":11,"health":80,"maxHealth":120,"level":3}"#;
        let stats: BaseStats = serde_json::from_str(json).unwrap();
        assert!((stats.max_health - 120.0).abs() < f64::EPSILON);
        assert_eq!(stats.level, 3);
    }
}
