//! arena_sim - Run a duel between two characters through the whole engine
//!
//! Run with: `cargo run -p arena_sim -- --seed 42`

mod error;
mod roster;
mod simulation;

use clap::Parser;
use combat_core::config::{default_constants, load_game_constants, GameConstants};
use combat_core::stat_block::load_combat_stats;
use error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use roster::{arena_store, brann, clamp_level, sable, Duelist};
use simulation::{DuelSimulation, Settlement, Side};
use std::path::PathBuf;

/// Duel simulator for the combat engine
#[derive(Parser)]
#[command(name = "arena_sim")]
#[command(about = "Simulate a duel and run the reward pipeline", long_about = None)]
struct Cli {
    /// Game constants TOML file (bundled defaults when omitted)
    constants: Option<PathBuf>,

    /// Seed for a reproducible duel
    #[arg(long)]
    seed: Option<u64>,

    /// Challenger level
    #[arg(long, default_value_t = 5)]
    challenger_level: u32,

    /// Defender level
    #[arg(long, default_value_t = 5)]
    defender_level: u32,

    /// Stop the duel after this many actions
    #[arg(long, default_value_t = 100)]
    max_turns: u32,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    setup_logging();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

/// Log to stderr, INFO unless RUST_LOG says otherwise
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let constants: GameConstants = match &cli.constants {
        Some(path) => {
            tracing::info!("Loading game constants from {}", path.display());
            load_game_constants(path)?
        }
        None => default_constants().clone(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let challenger = sable(clamp_level(cli.challenger_level, &constants.progression));
    let defender = brann(clamp_level(cli.defender_level, &constants.progression));
    let store = arena_store(&[&challenger, &defender])?;

    let challenger_stats = load_combat_stats(&store, &challenger.id, &challenger.base);
    let defender_stats = load_combat_stats(&store, &defender.id, &defender.base);

    tracing::info!(
        "{} (lv {}) challenges {} (lv {})",
        challenger.name,
        challenger.base.level,
        defender.name,
        defender.base.level
    );

    let duel = DuelSimulation::run(
        (&challenger, challenger_stats),
        (&defender, defender_stats),
        &constants,
        cli.max_turns,
        &mut rng,
    );
    let settlement = duel.settle(&store, &challenger, &defender, &constants, &mut rng)?;

    if cli.json {
        let report = serde_json::json!({
            "challenger": challenger.id,
            "defender": defender.id,
            "duel": duel,
            "settlement": settlement,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&duel, settlement.as_ref(), &challenger, &defender);
    }

    Ok(())
}

fn print_report(duel: &DuelSimulation, settlement: Option<&Settlement>, challenger: &Duelist, defender: &Duelist) {
    let name = |side: Side| match side {
        Side::Challenger => challenger.name.as_str(),
        Side::Defender => defender.name.as_str(),
    };

    println!("{}", "=".repeat(60));
    println!("  {} vs {}", challenger.name, defender.name);
    println!("{}", "=".repeat(60));

    for turn in &duel.turns {
        println!(
            "  [{:>3}] {:<20} {:<14} {} ({:.0} hp left)",
            turn.turn,
            name(turn.attacker),
            format!("{:?}", turn.action.kind),
            turn.result.summary(),
            turn.defender_health
        );
    }

    println!();
    println!("  Duration: {:.0}s, crit rate {:.1}%", duel.total_time, duel.crit_rate());

    let Some(settlement) = settlement else {
        println!("  No winner after {} actions", duel.turns.len());
        return;
    };

    let rewards = &settlement.rewards;
    println!("  Winner: {}", settlement.winner_id);
    if rewards.penalties.no_rewards {
        println!(
            "  {}",
            rewards.penalties.reason.as_deref().unwrap_or("No rewards granted.")
        );
    } else {
        println!("  Gold: {}  XP: {}", rewards.gold, rewards.experience);
        match &rewards.item {
            Some(item) => println!("  Drop: {} ({})", item.name, item.rarity),
            None => println!("  Drop: none"),
        }
    }
    println!(
        "  Applied: gold {}, xp {}, item {}",
        settlement.application.gold_applied,
        settlement.application.experience_applied,
        settlement.application.item_applied
    );
    println!(
        "  {} loses {} XP (applied: {})",
        settlement.loser_id, settlement.experience_loss, settlement.penalty_applied
    );
    println!(
        "  Performance XP: winner {}, loser {}",
        settlement.winner_combat_xp, settlement.loser_combat_xp
    );

    let progression = &settlement.progression;
    if let Some(reward) = progression.level_up_reward {
        println!(
            "  Level up! Now level {} (+{} levels): +{} hp, +{} atk, +{} def, +{} spd",
            progression.stats.level,
            progression.levels_gained,
            reward.health_increase,
            reward.attack_increase,
            reward.defense_increase,
            reward.speed_increase
        );
    } else {
        println!(
            "  Level {}, {} XP to next",
            progression.stats.level, progression.stats.experience_to_next
        );
    }
}
