//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{aggregate, CombatStats};
pub use crate::types::{BlockedBy, DamageType, Rarity, StatusTag};

// Damage system
pub use crate::damage::{resolve, resolve_with_rng, ActionKind, CombatAction, DamageResult, Element, WeaponType};

// Rewards and progression
pub use crate::progression::{add_experience, combat_xp_for, PlayerStats};
pub use crate::rewards::{apply_rewards, rewards_for, xp_loss_for, CombatRewards, CombatSummary};

// Sources and collaborators
pub use crate::source::{BaseStats, StatBonuses};
pub use crate::store::{CatalogItem, ItemCatalog, PlayerStore};

// Config
pub use crate::config::{default_constants, GameConstants};

pub use crate::rng::RandomSource;
