//! Core types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stats that equipment bonuses can contribute to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    Health,
    MaxHealth,
}

impl StatKind {
    /// Get all bonus-capable stats
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Speed,
            StatKind::Health,
            StatKind::MaxHealth,
        ]
    }

    /// Parse a stat name as stored in item bonus maps.
    ///
    /// Accepts both the camelCase keys written by the backend and snake_case.
    pub fn from_name(name: &str) -> Option<StatKind> {
        match name {
            "attack" => Some(StatKind::Attack),
            "defense" => Some(StatKind::Defense),
            "speed" => Some(StatKind::Speed),
            "health" => Some(StatKind::Health),
            "maxHealth" | "max_health" => Some(StatKind::MaxHealth),
            _ => None,
        }
    }
}

/// Item rarity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a hit's damage is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magical,
    /// Ignores mitigation. Never produced by the resolver itself.
    True,
}

/// What stopped (part of) a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedBy {
    Armor,
    Shield,
    Dodge,
}

/// Status effect tags attached to a resolved hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    // Elemental
    Burning,
    Frozen,
    Shocked,
    Poisoned,
    // Critical
    Stunned,
    Bleeding,
    ArmorBreak,
}

impl StatusTag {
    /// Effects a critical hit can inflict, in pick order
    pub const CRITICAL: [StatusTag; 3] = [StatusTag::Stunned, StatusTag::Bleeding, StatusTag::ArmorBreak];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Burning => "burning",
            StatusTag::Frozen => "frozen",
            StatusTag::Shocked => "shocked",
            StatusTag::Poisoned => "poisoned",
            StatusTag::Stunned => "stunned",
            StatusTag::Bleeding => "bleeding",
            StatusTag::ArmorBreak => "armor_break",
        }
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
