//! Evasion - Chance to dodge a hit entirely
//!
//! Faster defenders dodge more often. Quick attacks are harder to dodge.
//!
//! Formula: chance = (base + speed × factor) × (quick ? 0.7 : 1.0), capped at 60%
//!
//! Examples (default constants):
//! - 0 speed vs attack: 10%
//! - 50 speed vs attack: 20%
//! - 50 speed vs quick attack: 14%
//! - 300 speed vs anything: 60% (cap)

use crate::config::DefenseConstants;
use crate::damage::ActionKind;

/// Probability that the defender dodges an incoming action
pub fn dodge_chance(defender_speed: f64, action: ActionKind, constants: &DefenseConstants) -> f64 {
    let mut chance = constants.dodge_base_chance + defender_speed * constants.dodge_speed_factor;
    if action == ActionKind::QuickAttack {
        chance *= constants.quick_attack_dodge_factor;
    }
    chance.clamp(0.0, constants.dodge_cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dodge() {
        let c = DefenseConstants::default();
        assert!((dodge_chance(0.0, ActionKind::Attack, &c) - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_speed_scaling() {
        let c = DefenseConstants::default();
        assert!((dodge_chance(50.0, ActionKind::Attack, &c) - 0.20).abs() < 1e-9);
    }

    #[test]
    fn test_quick_attack_harder_to_dodge() {
        let c = DefenseConstants::default();
        assert!((dodge_chance(50.0, ActionKind::QuickAttack, &c) - 0.14).abs() < 1e-9);
    }

    #[test]
    fn test_dodge_cap() {
        let c = DefenseConstants::default();
        assert!((dodge_chance(300.0, ActionKind::StrongAttack, &c) - 0.60).abs() < f64::EPSILON);
        // Quick factor applies before the cap
        assert!((dodge_chance(1000.0, ActionKind::QuickAttack, &c) - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_speed_floors_at_zero() {
        let c = DefenseConstants::default();
        assert!(dodge_chance(-500.0, ActionKind::Attack, &c).abs() < f64::EPSILON);
    }
}
