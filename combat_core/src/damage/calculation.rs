//! Damage resolution - turning an action + two stat sets into a DamageResult

use super::{CombatAction, DamageResult, WeaponType};
use crate::config::{default_constants, DamageConstants, GameConstants};
use crate::defense::{apply_block, apply_defense_reduction, block_chance, dodge_chance};
use crate::rng::RandomSource;
use crate::stat_block::CombatStats;
use crate::types::{BlockedBy, DamageType, StatusTag};

/// Resolve one action using the thread RNG and default constants
pub fn resolve(attacker: &CombatStats, defender: &CombatStats, action: &CombatAction) -> DamageResult {
    let mut rng = rand::thread_rng();
    resolve_with_rng(attacker, defender, action, default_constants(), &mut rng)
}

/// Resolve one action with a provided random source (for deterministic testing)
///
/// Stages run in a fixed order, each on its own draw:
/// 1. Base damage from attack, action, weapon and element
/// 2. Critical roll (always drawn, even if the hit is later dodged)
/// 3. Dodge roll; a dodge returns immediately and draws nothing more
/// 4. Block roll
/// 5. Block halves the hit, otherwise defense reduces it
/// 6. Level gap bonus or penalty
/// 7. Elemental effect roll, then a critical effect pick
/// 8. Floor, minimum 1
pub fn resolve_with_rng(
    attacker: &CombatStats,
    defender: &CombatStats,
    action: &CombatAction,
    constants: &GameConstants,
    rng: &mut impl RandomSource,
) -> DamageResult {
    let damage_constants = &constants.damage;
    let defense_constants = &constants.defense;

    // Step 1: Base damage
    let mut damage = base_damage(attacker, action, damage_constants);

    // Step 2: Critical
    let crit_chance = critical_chance(attacker, action, damage_constants);
    let is_critical = rng.roll(crit_chance);
    if is_critical {
        damage *= damage_constants.crit_multiplier;
    }

    // Step 3: Dodge
    let dodge = dodge_chance(defender.speed, action.kind, defense_constants);
    if rng.roll(dodge) {
        tracing::debug!(chance = dodge, "{:?} dodged", action.kind);
        return DamageResult::dodged();
    }

    // Step 4: Block
    let block = block_chance(defender.defense, action.kind, defense_constants);
    let is_blocked = rng.roll(block);

    // Step 5: Block or defense
    damage = if is_blocked {
        apply_block(damage, defense_constants)
    } else {
        apply_defense_reduction(damage, defender.defense, defense_constants)
    };

    // Step 6: Level gap
    let gap_bonus = level_gap_bonus(attacker.level, defender.level, damage_constants);
    damage = (damage * (1.0 + gap_bonus)).floor();

    // Step 7: Status effects
    let mut effects = Vec::new();
    if let Some(element) = action.active_element() {
        if rng.roll(damage_constants.element_effect_chance) {
            effects.extend(element.status());
        }
    }
    if is_critical {
        let index = rng.pick_index(StatusTag::CRITICAL.len());
        effects.push(StatusTag::CRITICAL[index]);
    }

    // Step 8: Final damage
    let damage = damage.floor().max(1.0) as u32;

    let damage_type = if action.is_elemental() {
        DamageType::Magical
    } else {
        DamageType::Physical
    };

    tracing::debug!(
        damage,
        is_critical,
        is_blocked,
        crit_chance,
        block_chance = block,
        "{:?} resolved",
        action.kind
    );

    DamageResult {
        damage,
        is_critical,
        is_blocked,
        is_dodged: false,
        damage_type,
        effects,
        blocked_by: is_blocked.then_some(BlockedBy::Armor),
    }
}

/// Damage before any roll: attack scaled by action, weapon and element
pub fn base_damage(attacker: &CombatStats, action: &CombatAction, constants: &DamageConstants) -> f64 {
    let mut damage = attacker.attack * constants.attack_scale;
    damage *= action.kind.damage_multiplier();
    damage *= action.weapon_multiplier();
    if action.is_elemental() {
        damage *= constants.element_multiplier;
    }
    damage
}

/// Attacker's chance to land a critical hit
pub fn critical_chance(attacker: &CombatStats, action: &CombatAction, constants: &DamageConstants) -> f64 {
    let speed_bonus = (attacker.speed * constants.crit_speed_factor).min(constants.crit_speed_cap);
    let dagger_bonus = if action.weapon == Some(WeaponType::Dagger) {
        constants.crit_dagger_bonus
    } else {
        0.0
    };
    let level_bonus = attacker.level as f64 * constants.crit_level_factor;

    (constants.crit_base_chance + speed_bonus + dagger_bonus + level_bonus)
        .clamp(0.0, constants.crit_chance_cap)
}

/// Damage modifier from the level gap, e.g. 0.15 for +15%
pub fn level_gap_bonus(attacker_level: u32, defender_level: u32, constants: &DamageConstants) -> f64 {
    let gap = attacker_level as f64 - defender_level as f64;
    (gap * constants.level_gap_factor).clamp(constants.level_gap_min, constants.level_gap_max)
}
