//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConstants {
    pub damage: DamageConstants,
    pub defense: DefenseConstants,
    pub rewards: RewardConstants,
    pub progression: ProgressionConstants,
}

impl GameConstants {
    /// Reject values that would break the resolution pipeline
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("damage.crit_chance_cap", self.damage.crit_chance_cap),
            ("damage.element_effect_chance", self.damage.element_effect_chance),
            ("defense.dodge_cap", self.defense.dodge_cap),
            ("defense.block_cap", self.defense.block_cap),
            ("defense.reduction_cap", self.defense.reduction_cap),
            ("rewards.drop_chance", self.rewards.drop_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.damage.level_gap_min > self.damage.level_gap_max {
            return Err(ConfigError::ValidationError(format!(
                "damage.level_gap_min ({}) exceeds damage.level_gap_max ({})",
                self.damage.level_gap_min, self.damage.level_gap_max
            )));
        }

        let coefficients = [
            ("rewards.gold_base", self.rewards.gold_base),
            ("rewards.gold_per_level", self.rewards.gold_per_level),
            ("rewards.gold_damage_factor", self.rewards.gold_damage_factor),
            ("rewards.gold_damage_bonus_cap", self.rewards.gold_damage_bonus_cap),
            ("rewards.experience_base", self.rewards.experience_base),
            ("rewards.experience_per_level", self.rewards.experience_per_level),
            ("rewards.experience_damage_factor", self.rewards.experience_damage_factor),
            ("rewards.experience_damage_bonus_cap", self.rewards.experience_damage_bonus_cap),
            ("rewards.experience_duration_bonus_cap", self.rewards.experience_duration_bonus_cap),
        ];
        for (name, value) in coefficients {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let divisor = self.rewards.experience_duration_divisor;
        if divisor.is_nan() || divisor <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "rewards.experience_duration_divisor must be positive, got {}",
                self.rewards.experience_duration_divisor
            )));
        }

        if self.progression.max_level == 0 {
            return Err(ConfigError::ValidationError(
                "progression.max_level must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Attacker-side damage pipeline constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageConstants {
    /// Fraction of attack that becomes base damage
    pub attack_scale: f64,
    pub element_multiplier: f64,
    pub crit_base_chance: f64,
    /// Crit chance per point of speed, capped by `crit_speed_cap`
    pub crit_speed_factor: f64,
    pub crit_speed_cap: f64,
    pub crit_dagger_bonus: f64,
    pub crit_level_factor: f64,
    pub crit_chance_cap: f64,
    pub crit_multiplier: f64,
    pub element_effect_chance: f64,
    /// Damage bonus per level of advantage over the defender
    pub level_gap_factor: f64,
    pub level_gap_min: f64,
    pub level_gap_max: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            attack_scale: 0.8,
            element_multiplier: 1.2,
            crit_base_chance: 0.05,
            crit_speed_factor: 0.001,
            crit_speed_cap: 0.10,
            crit_dagger_bonus: 0.10,
            crit_level_factor: 0.005,
            crit_chance_cap: 0.40,
            crit_multiplier: 2.0,
            element_effect_chance: 0.30,
            level_gap_factor: 0.05,
            level_gap_min: -0.20,
            level_gap_max: 0.50,
        }
    }
}

/// Defender-side constants: dodge, block, defense reduction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseConstants {
    pub dodge_base_chance: f64,
    pub dodge_speed_factor: f64,
    /// Dodge chance multiplier against quick attacks
    pub quick_attack_dodge_factor: f64,
    pub dodge_cap: f64,
    pub block_base_chance: f64,
    pub block_defense_factor: f64,
    /// Block chance multiplier against strong attacks
    pub strong_attack_block_factor: f64,
    pub block_cap: f64,
    /// Fraction of damage that gets through a block
    pub block_damage_factor: f64,
    pub reduction_per_defense: f64,
    pub reduction_cap: f64,
}

impl Default for DefenseConstants {
    fn default() -> Self {
        DefenseConstants {
            dodge_base_chance: 0.10,
            dodge_speed_factor: 0.002,
            quick_attack_dodge_factor: 0.7,
            dodge_cap: 0.60,
            block_base_chance: 0.15,
            block_defense_factor: 0.003,
            strong_attack_block_factor: 0.6,
            block_cap: 0.50,
            block_damage_factor: 0.5,
            reduction_per_defense: 0.01,
            reduction_cap: 0.75,
        }
    }
}

/// Reward and penalty constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConstants {
    pub max_gold: u32,
    pub max_experience: u32,
    pub max_experience_loss: u32,
    /// Largest level gap that still grants rewards
    pub max_level_difference: u32,
    pub drop_chance: f64,
    pub gold_base: f64,
    pub gold_per_level: f64,
    pub gold_damage_factor: f64,
    /// Damage bonus cap as a fraction of the level-based gold
    pub gold_damage_bonus_cap: f64,
    pub experience_base: f64,
    pub experience_per_level: f64,
    pub experience_damage_factor: f64,
    pub experience_damage_bonus_cap: f64,
    /// Seconds of combat per point of duration bonus
    pub experience_duration_divisor: f64,
    pub experience_duration_bonus_cap: f64,
    pub loss_base: u32,
    pub loss_per_level: u32,
    /// Extra loss per level of gap once the gap exceeds `max_level_difference`
    pub loss_gap_factor: u32,
}

impl Default for RewardConstants {
    fn default() -> Self {
        RewardConstants {
            max_gold: 100,
            max_experience: 200,
            max_experience_loss: 50,
            max_level_difference: 5,
            drop_chance: 0.30,
            gold_base: 25.0,
            gold_per_level: 5.0,
            gold_damage_factor: 0.1,
            gold_damage_bonus_cap: 0.2,
            experience_base: 50.0,
            experience_per_level: 10.0,
            experience_damage_factor: 0.5,
            experience_damage_bonus_cap: 25.0,
            experience_duration_divisor: 10.0,
            experience_duration_bonus_cap: 15.0,
            loss_base: 20,
            loss_per_level: 5,
            loss_gap_factor: 2,
        }
    }
}

/// Leveling curve and per-level growth
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConstants {
    pub max_level: u32,
    /// XP needed to go from level 1 to level 2
    pub base_experience: u64,
    pub growth_rate: f64,
    pub health_per_level: f64,
    pub attack_per_level: f64,
    pub defense_per_level: f64,
    pub speed_per_level: f64,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            max_level: 50,
            base_experience: 100,
            growth_rate: 1.5,
            health_per_level: 10.0,
            attack_per_level: 2.0,
            defense_per_level: 1.0,
            speed_per_level: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert!((constants.damage.crit_chance_cap - 0.40).abs() < f64::EPSILON);
        assert!((constants.defense.reduction_cap - 0.75).abs() < f64::EPSILON);
        assert_eq!(constants.rewards.max_experience, 200);
        assert_eq!(constants.progression.max_level, 50);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[defense]
dodge_cap = 0.5

[rewards]
max_gold = 250
"#;

        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert!((constants.defense.dodge_cap - 0.5).abs() < f64::EPSILON);
        // Unspecified fields keep their defaults
        assert!((constants.defense.block_cap - 0.50).abs() < f64::EPSILON);
        assert_eq!(constants.rewards.max_gold, 250);
        assert_eq!(constants.rewards.max_experience, 200);
    }

    #[test]
    fn test_validation_rejects_bad_probability() {
        let mut constants = GameConstants::default();
        constants.defense.block_cap = 1.5;
        let err = constants.validate().unwrap_err();
        assert!(err.to_string().contains("defense.block_cap"));
    }

    #[test]
    fn test_validation_rejects_inverted_level_gap() {
        let mut constants = GameConstants::default();
        constants.damage.level_gap_min = 0.6;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_parse_reward_coefficients() {
        let toml = r#"
[rewards]
gold_base = 40.0
loss_gap_factor = 3
"#;

        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert!((constants.rewards.gold_base - 40.0).abs() < f64::EPSILON);
        assert_eq!(constants.rewards.loss_gap_factor, 3);
        assert!((constants.rewards.gold_per_level - 5.0).abs() < f64::EPSILON);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_negative_reward_coefficient() {
        let mut constants = GameConstants::default();
        constants.rewards.gold_damage_factor = -0.1;
        let err = constants.validate().unwrap_err();
        assert!(err.to_string().contains("rewards.gold_damage_factor"));
    }

    #[test]
    fn test_validation_rejects_zero_duration_divisor() {
        let mut constants = GameConstants::default();
        constants.rewards.experience_duration_divisor = 0.0;
        let err = constants.validate().unwrap_err();
        assert!(err.to_string().contains("experience_duration_divisor"));
    }

    #[test]
    fn test_validation_rejects_zero_max_level() {
        let mut constants = GameConstants::default();
        constants.progression.max_level = 0;
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
