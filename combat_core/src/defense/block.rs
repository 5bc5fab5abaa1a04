//! Block - Chance to halve a hit, replacing armor reduction

use crate::config::DefenseConstants;
use crate::damage::ActionKind;

/// Probability that the defender blocks an incoming action
///
/// `(base + defense × factor) × (strong ? 0.6 : 1.0)`, capped at 50%.
pub fn block_chance(defender_defense: f64, action: ActionKind, constants: &DefenseConstants) -> f64 {
    let mut chance =
        constants.block_base_chance + defender_defense * constants.block_defense_factor;
    if action == ActionKind::StrongAttack {
        chance *= constants.strong_attack_block_factor;
    }
    chance.clamp(0.0, constants.block_cap)
}

/// Damage let through by a successful block, floored
pub fn apply_block(damage: f64, constants: &DefenseConstants) -> f64 {
    (damage * constants.block_damage_factor).floor()
}
