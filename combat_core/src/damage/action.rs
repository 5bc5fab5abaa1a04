//! CombatAction - What the acting player chose for this exchange

use crate::types::StatusTag;
use serde::{Deserialize, Serialize};

/// Kind of action taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    #[default]
    Attack,
    StrongAttack,
    QuickAttack,
    Block,
    Dodge,
    Special,
}

impl ActionKind {
    /// Damage multiplier for this action
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            ActionKind::StrongAttack => 1.5,
            ActionKind::QuickAttack => 0.7,
            _ => 1.0,
        }
    }
}

/// Weapon class wielded for the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Sword,
    Axe,
    Mace,
    Spear,
    Staff,
    Dagger,
}

impl WeaponType {
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            WeaponType::Sword => 1.0,
            WeaponType::Axe => 1.2,
            WeaponType::Mace => 1.15,
            WeaponType::Spear => 0.9,
            WeaponType::Staff => 0.8,
            WeaponType::Dagger => 0.85,
        }
    }
}

/// Elemental infusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
    #[default]
    None,
}

impl Element {
    /// Status effect this element can inflict
    pub fn status(&self) -> Option<StatusTag> {
        match self {
            Element::Fire => Some(StatusTag::Burning),
            Element::Ice => Some(StatusTag::Frozen),
            Element::Lightning => Some(StatusTag::Shocked),
            Element::Poison => Some(StatusTag::Poisoned),
            Element::None => None,
        }
    }
}

/// An action chosen by the acting player before resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombatAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub weapon: Option<WeaponType>,
    #[serde(default)]
    pub element: Option<Element>,
}

impl CombatAction {
    pub fn new(kind: ActionKind) -> Self {
        CombatAction {
            kind,
            weapon: None,
            element: None,
        }
    }

    /// Plain attack
    pub fn attack() -> Self {
        Self::new(ActionKind::Attack)
    }

    pub fn with_weapon(mut self, weapon: WeaponType) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Element actually in effect (`None` and unset are equivalent)
    pub fn active_element(&self) -> Option<Element> {
        self.element.filter(|e| *e != Element::None)
    }

    pub fn is_elemental(&self) -> bool {
        self.active_element().is_some()
    }

    pub fn weapon_multiplier(&self) -> f64 {
        self.weapon.map_or(1.0, |w| w.damage_multiplier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_element_is_not_elemental() {
        let action = CombatAction::attack().with_element(Element::None);
        assert!(!action.is_elemental());
        assert!(CombatAction::attack().with_element(Element::Ice).is_elemental());
    }

    #[test]
    fn test_unarmed_has_no_weapon_scaling() {
        assert!((CombatAction::attack().weapon_multiplier() - 1.0).abs() < f64::EPSILON);
        let axe = CombatAction::attack().with_weapon(WeaponType::Axe);
        assert!((axe.weapon_multiplier() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defensive_actions_deal_normal_damage() {
        for kind in [ActionKind::Block, ActionKind::Dodge, ActionKind::Special] {
            assert!((kind.damage_multiplier() - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_action_from_client_json() {
        let json = r#"{"type":"strong_attack","weapon":"mace","element":"fire"}"#;
        let action: CombatAction = serde_json::from_str(json).unwrap();
        assert_eq!(action.kind, ActionKind::StrongAttack);
        assert_eq!(action.weapon, Some(WeaponType::Mace));
        assert_eq!(action.active_element(), Some(Element::Fire));

        let bare: CombatAction = serde_json::from_str(r#"{"type":"dodge"}"#).unwrap();
        assert_eq!(bare, CombatAction::new(ActionKind::Dodge));
    }
}
