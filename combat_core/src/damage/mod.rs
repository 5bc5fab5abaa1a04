//! Damage system - Actions, resolution pipeline, results

mod action;
mod calculation;
mod result;

pub use action::{ActionKind, CombatAction, Element, WeaponType};
pub use calculation::{base_damage, critical_chance, level_gap_bonus, resolve, resolve_with_rng};
pub use result::DamageResult;
