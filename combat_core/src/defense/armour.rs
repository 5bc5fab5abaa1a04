//! Armor - Flat percentage damage reduction from defense

use crate::config::DefenseConstants;

/// Fraction of damage removed by the defender's defense stat
///
/// `min(defense × reduction_per_defense, reduction_cap)`. Negative defense
/// yields a negative reduction, which amplifies the hit.
pub fn defense_reduction(defense: f64, constants: &DefenseConstants) -> f64 {
    (defense * constants.reduction_per_defense).min(constants.reduction_cap)
}

/// Apply defense to an unblocked hit. Never drops below 1.
pub fn apply_defense_reduction(damage: f64, defense: f64, constants: &DefenseConstants) -> f64 {
    let reduction = defense_reduction(defense, constants);
    (damage * (1.0 - reduction)).max(1.0)
}
