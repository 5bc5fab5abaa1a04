//! Combat experience - Per-fight XP heuristic
//!
//! Unlike the reward path this value has no upper cap.

use serde::{Deserialize, Serialize};

const VICTORY_BASE: u64 = 50;
const PERFECT_VICTORY_BONUS: u64 = 75;
const FIRST_BLOOD_BONUS: u64 = 25;
const QUICK_VICTORY_BONUS: u64 = 25;
const QUICK_VICTORY_TURNS: u32 = 3;
const DEFEAT_BASE: u64 = 10;

/// How one side of a combat went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatPerformance {
    pub is_victory: bool,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub turns_taken: u32,
    pub is_first_blood: bool,
}

impl CombatPerformance {
    pub fn experience(&self) -> u64 {
        combat_xp_for(
            self.is_victory,
            self.damage_dealt,
            self.damage_taken,
            self.turns_taken,
            self.is_first_blood,
        )
    }
}

/// Experience for one fight.
///
/// A win pays 50 plus bonuses for a perfect victory, first blood and
/// finishing within three turns. A loss pays 10 plus a tenth of the damage dealt.
pub fn combat_xp_for(
    is_victory: bool,
    damage_dealt: u64,
    damage_taken: u64,
    turns_taken: u32,
    is_first_blood: bool,
) -> u64 {
    if !is_victory {
        return DEFEAT_BASE + damage_dealt / 10;
    }

    let mut xp = VICTORY_BASE;
    if damage_taken == 0 {
        xp += PERFECT_VICTORY_BONUS;
    }
    if is_first_blood {
        xp += FIRST_BLOOD_BONUS;
    }
    if turns_taken <= QUICK_VICTORY_TURNS {
        xp += QUICK_VICTORY_BONUS;
    }
    xp
}
