//! DamageResult - Outcome of one resolved exchange

use crate::types::{BlockedBy, DamageType, StatusTag};
use serde::{Deserialize, Serialize};

/// Result of resolving one action against a defender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Final damage; 0 only when dodged
    pub damage: u32,
    pub is_critical: bool,
    pub is_blocked: bool,
    pub is_dodged: bool,
    pub damage_type: DamageType,
    /// Status effects inflicted, elemental first
    pub effects: Vec<StatusTag>,
    pub blocked_by: Option<BlockedBy>,
}

impl DamageResult {
    /// The result of a dodged action
    pub fn dodged() -> Self {
        DamageResult {
            damage: 0,
            is_critical: false,
            is_blocked: false,
            is_dodged: true,
            damage_type: DamageType::Physical,
            effects: Vec::new(),
            blocked_by: Some(BlockedBy::Dodge),
        }
    }

    /// Whether the hit landed for any damage
    pub fn landed(&self) -> bool {
        !self.is_dodged && self.damage > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_dodged {
            return "Dodged".to_string();
        }

        let mut parts = vec![format!("{} {:?} damage", self.damage, self.damage_type).to_lowercase()];

        if self.is_critical {
            parts.push("CRITICAL".to_string());
        }

        if self.is_blocked {
            parts.push("blocked".to_string());
        }

        if !self.effects.is_empty() {
            let tags: Vec<&str> = self.effects.iter().map(|e| e.as_str()).collect();
            parts.push(format!("inflicts {}", tags.join(", ")));
        }

        parts.join(", ")
    }
}
