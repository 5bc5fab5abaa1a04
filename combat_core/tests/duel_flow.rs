//! Integration test: Equip -> Aggregate -> Resolve -> Rewards -> Level up -> Persist
//!
//! Drives one scripted duel through every stage of the engine against the
//! in-memory store.

use combat_core::config::GameConstants;
use combat_core::damage::{resolve_with_rng, ActionKind, CombatAction, WeaponType};
use combat_core::progression::{add_experience_with_constants, combat_xp_for, PlayerStats};
use combat_core::rewards::{apply_defeat_penalty, apply_rewards, rewards_for_with_rng, xp_loss_for, CombatSummary};
use combat_core::source::{BaseStats, StatBonuses};
use combat_core::stat_block::load_combat_stats;
use combat_core::store::{CatalogItem, InMemoryStore, PlayerStore};
use combat_core::types::{BlockedBy, Rarity, StatusTag};
use combat_core::ScriptedRolls;

fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn alice() -> BaseStats {
    BaseStats {
        attack: 20.0,
        defense: 10.0,
        speed: 15.0,
        health: 100.0,
        max_health: 100.0,
        level: 5,
    }
}

fn bob() -> BaseStats {
    BaseStats {
        attack: 12.0,
        defense: 20.0,
        speed: 10.0,
        health: 80.0,
        max_health: 80.0,
        level: 3,
    }
}

fn store() -> InMemoryStore {
    let store = InMemoryStore::with_catalog([
        CatalogItem::new("c1", "Wooden Club", Rarity::Common),
        CatalogItem::new("u1", "Iron Buckler", Rarity::Uncommon).with_icon("/icons/buckler.png"),
    ]);
    store.insert_player("alice", alice());
    store.insert_player("bob", bob());
    store
}

#[test]
fn test_full_duel_flow() {
    let constants = GameConstants::default();
    let store = store();

    // =========================================================================
    // STEP 1: Equip and aggregate
    // =========================================================================
    separator("STEP 1: Aggregating Effective Stats");

    assert!(store.equip(
        "alice",
        StatBonuses::new()
            .with("attack", 5)
            .with("health", 20)
            .with("enchant", "glowing"),
    ));

    let alice_stats = load_combat_stats(&store, "alice", &store.base_stats("alice").unwrap());
    let mut bob_stats = load_combat_stats(&store, "bob", &store.base_stats("bob").unwrap());
    println!("  alice: {:?}", alice_stats);
    println!("  bob:   {:?}", bob_stats);

    assert_eq!(alice_stats.attack, 25.0);
    assert_eq!(alice_stats.health, 120.0);
    assert_eq!(alice_stats.max_health, 120.0);
    assert_eq!(bob_stats.attack, 12.0);

    // =========================================================================
    // STEP 2: Two exchanges
    // =========================================================================
    separator("STEP 2: Resolving Exchanges");

    let mut rolls = ScriptedRolls::new([
        // plain hit: no crit, no dodge, no block
        0.99, 0.99, 0.99,
        // crit, no dodge, blocked, second critical effect
        0.0, 0.99, 0.0, 0.5,
        // drop, uncommon bucket, first uncommon item
        0.1, 0.5, 0.0,
    ]);
    let action = CombatAction::new(ActionKind::Attack).with_weapon(WeaponType::Sword);

    // 25 * 0.8 = 20, 20% armor -> 16, +10% level gap -> 17
    let first = resolve_with_rng(&alice_stats, &bob_stats, &action, &constants, &mut rolls);
    println!("  hit 1: {}", first.summary());
    assert_eq!(first.damage, 17);
    assert!(!first.is_critical && !first.is_blocked);
    assert!(first.effects.is_empty());
    bob_stats.take_damage(first.damage);

    // 20 * 2 = 40, blocked -> 20, +10% level gap -> 22
    let second = resolve_with_rng(&alice_stats, &bob_stats, &action, &constants, &mut rolls);
    println!("  hit 2: {}", second.summary());
    assert_eq!(second.damage, 22);
    assert!(second.is_critical && second.is_blocked);
    assert_eq!(second.blocked_by, Some(BlockedBy::Armor));
    assert_eq!(second.effects, vec![StatusTag::Bleeding]);
    bob_stats.take_damage(second.damage);

    assert_eq!(bob_stats.health, 41.0);

    // =========================================================================
    // STEP 3: Rewards and penalty
    // =========================================================================
    separator("STEP 3: Computing Rewards");

    let summary = CombatSummary {
        winner_level: alice_stats.level,
        loser_level: bob_stats.level,
        damage_dealt: (first.damage + second.damage) as u64,
        combat_duration: 12.0,
    };
    let rewards = rewards_for_with_rng(&summary, &store, &constants.rewards, &mut rolls);
    println!("  rewards: {:?}", rewards);

    // floor(50 + min(3.9, 10))
    assert_eq!(rewards.gold, 53);
    // floor(50 + 50 + min(19.5, 25) + min(1.2, 15))
    assert_eq!(rewards.experience, 120);
    assert_eq!(rewards.item.as_ref().map(|i| i.id.as_str()), Some("u1"));
    assert_eq!(rewards.penalties.level_difference, 2);
    assert_eq!(rolls.consumed(), 10);

    let loss = xp_loss_for(bob_stats.level, alice_stats.level);
    assert_eq!(loss, 35);

    // =========================================================================
    // STEP 4: Persist
    // =========================================================================
    separator("STEP 4: Applying Rewards");

    store.increment_experience("alice", 1250).unwrap();
    store.increment_experience("bob", 200).unwrap();
    let alice_experience_before = store.experience("alice").unwrap() as u64;

    let application = apply_rewards(&store, "alice", &rewards);
    assert!(application.all_applied());
    assert!(apply_defeat_penalty(&store, "bob", loss));

    assert_eq!(store.gold("alice").unwrap(), 53);
    assert_eq!(store.experience("alice").unwrap(), 1370);
    assert_eq!(store.inventory("alice").unwrap().len(), 1);
    assert_eq!(store.experience("bob").unwrap(), 165);

    // =========================================================================
    // STEP 5: Level up
    // =========================================================================
    separator("STEP 5: Leveling");

    let progress = PlayerStats::from_base(&alice(), alice_experience_before, &constants.progression);
    let outcome = add_experience_with_constants(&progress, rewards.experience as u64, &constants.progression);
    println!("  outcome: {:?}", outcome);

    // Level 6 needs 1318 total, level 7 needs 2077
    assert!(outcome.leveled_up);
    assert_eq!(outcome.levels_gained, 1);
    assert_eq!(outcome.stats.level, 6);
    assert_eq!(outcome.stats.attack, 22.0);
    assert_eq!(outcome.stats.max_health, 110.0);
    assert_eq!(outcome.stats.experience_to_next, 707);

    store
        .set_base_stats("alice", BaseStats::from(&outcome.stats))
        .unwrap();
    assert_eq!(store.base_stats("alice").unwrap().level, 6);

    // Perfect, first blood, two turns
    assert_eq!(combat_xp_for(true, summary.damage_dealt, 0, 2, true), 175);
}

#[test]
fn test_lopsided_duel_grants_nothing_but_still_penalizes() {
    let constants = GameConstants::default();
    let store = store();
    store
        .set_base_stats("alice", BaseStats { level: 20, ..alice() })
        .unwrap();
    store
        .set_base_stats("bob", BaseStats { level: 1, ..bob() })
        .unwrap();
    store.increment_experience("bob", 30).unwrap();

    let summary = CombatSummary {
        winner_level: 20,
        loser_level: 1,
        damage_dealt: 500,
        combat_duration: 60.0,
    };
    let mut rolls = ScriptedRolls::new([0.0, 0.0, 0.0]);
    let rewards = rewards_for_with_rng(&summary, &store, &constants.rewards, &mut rolls);

    assert!(rewards.penalties.no_rewards);
    assert!(rewards.is_empty());
    assert!(apply_rewards(&store, "alice", &rewards).all_applied());
    assert_eq!(store.gold("alice").unwrap(), 0);

    // min(20 + 5 + 38, 50)
    let loss = xp_loss_for(1, 20);
    assert_eq!(loss, 50);
    assert!(apply_defeat_penalty(&store, "bob", loss));
    assert_eq!(store.experience("bob").unwrap(), 0);
}
