//! Duel simulation utilities

use crate::error::Result;
use crate::roster::Duelist;
use combat_core::config::GameConstants;
use combat_core::damage::{resolve_with_rng, CombatAction, DamageResult};
use combat_core::progression::{add_experience_with_constants, combat_xp_for, LevelUpOutcome, PlayerStats};
use combat_core::rewards::{
    apply_defeat_penalty, apply_rewards, rewards_for_with_rng, xp_loss_with_constants, CombatRewards,
    CombatSummary, RewardApplication,
};
use combat_core::rng::RandomSource;
use combat_core::source::BaseStats;
use combat_core::stat_block::CombatStats;
use combat_core::store::{InMemoryStore, PlayerStore};
use serde::Serialize;

/// Simulated seconds per action
pub const SECONDS_PER_TURN: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Challenger,
    Defender,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Challenger => Side::Defender,
            Side::Defender => Side::Challenger,
        }
    }
}

/// One action taken during the duel
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub attacker: Side,
    pub action: CombatAction,
    pub result: DamageResult,
    pub defender_health: f64,
}

/// Running totals for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SideTally {
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub turns_taken: u32,
    pub crit_count: u32,
    pub dodge_count: u32,
    pub health_remaining: f64,
}

/// Run a duel until one side falls or the turn limit is hit
#[derive(Debug, Clone, Serialize)]
pub struct DuelSimulation {
    pub turns: Vec<TurnRecord>,
    pub challenger: SideTally,
    pub defender: SideTally,
    pub first_blood: Option<Side>,
    /// None when the turn limit ran out first
    pub winner: Option<Side>,
    pub total_time: f64,
}

impl DuelSimulation {
    /// Alternate actions, faster side first (ties go to the challenger)
    pub fn run(
        challenger: (&Duelist, CombatStats),
        defender: (&Duelist, CombatStats),
        constants: &GameConstants,
        max_turns: u32,
        rng: &mut impl RandomSource,
    ) -> Self {
        let (challenger, mut challenger_stats) = challenger;
        let (defender, mut defender_stats) = defender;

        let mut result = DuelSimulation {
            turns: Vec::new(),
            challenger: SideTally::default(),
            defender: SideTally::default(),
            first_blood: None,
            winner: None,
            total_time: 0.0,
        };

        let mut side = if defender_stats.speed > challenger_stats.speed {
            Side::Defender
        } else {
            Side::Challenger
        };

        for turn in 1..=max_turns {
            let (attacker, attacker_stats, target_stats, tally) = match side {
                Side::Challenger => (challenger, &challenger_stats, &mut defender_stats, &mut result.challenger),
                Side::Defender => (defender, &defender_stats, &mut challenger_stats, &mut result.defender),
            };

            let action = attacker.action_for_turn(tally.turns_taken as usize);
            let outcome = resolve_with_rng(attacker_stats, target_stats, &action, constants, rng);
            target_stats.take_damage(outcome.damage);

            tally.turns_taken += 1;
            tally.damage_dealt += outcome.damage as u64;
            if outcome.is_critical {
                tally.crit_count += 1;
            }

            if outcome.landed() && result.first_blood.is_none() {
                result.first_blood = Some(side);
            }

            let target_alive = target_stats.is_alive();
            let target_health = target_stats.health;
            let target_tally = match side {
                Side::Challenger => &mut result.defender,
                Side::Defender => &mut result.challenger,
            };
            target_tally.damage_taken += outcome.damage as u64;
            if outcome.is_dodged {
                target_tally.dodge_count += 1;
            }

            tracing::debug!(turn, ?side, "{}", outcome.summary());

            result.turns.push(TurnRecord {
                turn,
                attacker: side,
                action,
                result: outcome,
                defender_health: target_health,
            });
            result.total_time += SECONDS_PER_TURN;

            if !target_alive {
                result.winner = Some(side);
                break;
            }
            side = side.other();
        }

        result.challenger.health_remaining = challenger_stats.health;
        result.defender.health_remaining = defender_stats.health;

        result
    }

    pub fn tally(&self, side: Side) -> &SideTally {
        match side {
            Side::Challenger => &self.challenger,
            Side::Defender => &self.defender,
        }
    }

    /// Calculate crit rate across both sides
    pub fn crit_rate(&self) -> f64 {
        let hits = self.turns.iter().filter(|t| !t.result.is_dodged).count();
        if hits > 0 {
            (self.challenger.crit_count + self.defender.crit_count) as f64 / hits as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Run the post-combat pipeline against the store.
    ///
    /// Returns None for a duel without a winner.
    pub fn settle(
        &self,
        store: &InMemoryStore,
        challenger: &Duelist,
        defender: &Duelist,
        constants: &GameConstants,
        rng: &mut impl RandomSource,
    ) -> Result<Option<Settlement>> {
        let Some(winner_side) = self.winner else {
            tracing::info!("duel ended without a winner after {} turns", self.turns.len());
            return Ok(None);
        };
        let (winner, loser) = match winner_side {
            Side::Challenger => (challenger, defender),
            Side::Defender => (defender, challenger),
        };
        let winner_tally = self.tally(winner_side);
        let loser_tally = self.tally(winner_side.other());

        let winner_base = store.base_stats(&winner.id)?;
        let loser_base = store.base_stats(&loser.id)?;

        let summary = CombatSummary {
            winner_level: winner_base.level,
            loser_level: loser_base.level,
            damage_dealt: winner_tally.damage_dealt,
            combat_duration: self.total_time,
        };
        let rewards = rewards_for_with_rng(&summary, store, &constants.rewards, rng);

        let experience_before = store.experience(&winner.id)?.max(0) as u64;
        let application = apply_rewards(store, &winner.id, &rewards);

        let experience_loss =
            xp_loss_with_constants(loser_base.level, winner_base.level, &constants.rewards);
        let penalty_applied = apply_defeat_penalty(store, &loser.id, experience_loss);

        let gained = if application.experience_applied {
            rewards.experience as u64
        } else {
            0
        };
        let progression = add_experience_with_constants(
            &PlayerStats::from_base(&winner_base, experience_before, &constants.progression),
            gained,
            &constants.progression,
        );
        if progression.leveled_up {
            store.set_base_stats(&winner.id, BaseStats::from(&progression.stats))?;
            tracing::info!("{} reached level {}", winner.name, progression.stats.level);
        }

        let winner_combat_xp = combat_xp_for(
            true,
            winner_tally.damage_dealt,
            winner_tally.damage_taken,
            winner_tally.turns_taken,
            self.first_blood == Some(winner_side),
        );
        let loser_combat_xp = combat_xp_for(
            false,
            loser_tally.damage_dealt,
            loser_tally.damage_taken,
            loser_tally.turns_taken,
            self.first_blood == Some(winner_side.other()),
        );

        Ok(Some(Settlement {
            winner_id: winner.id.clone(),
            loser_id: loser.id.clone(),
            summary,
            rewards,
            application,
            experience_loss,
            penalty_applied,
            winner_combat_xp,
            loser_combat_xp,
            progression,
        }))
    }
}

/// Everything the reward pipeline did after a decisive duel
#[derive(Debug, Clone, Serialize)]
pub struct Settlement {
    pub winner_id: String,
    pub loser_id: String,
    pub summary: CombatSummary,
    pub rewards: CombatRewards,
    pub application: RewardApplication,
    pub experience_loss: u32,
    pub penalty_applied: bool,
    pub winner_combat_xp: u64,
    pub loser_combat_xp: u64,
    pub progression: LevelUpOutcome,
}
