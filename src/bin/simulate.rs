//! Headless balance simulator.
//!
//! Drives the engine with an auto-attacking bot and reports how far it got.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # 20 runs of one simulated hour
//!   cargo run --bin simulate -- -n 5 -t 7200   # 5 runs of two hours
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use heropath::catalog::shop_items;
use heropath::character::prestige::can_rebirth;
use heropath::economy::{ItemKind, ShopItem, ShopKind};
use heropath::utils::persistence::MemoryStore;
use heropath::{Command, GameEngine};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct SimConfig {
    runs: u32,
    seconds: u64,
    seed: u64,
    attack_interval_ms: u64,
    auto_buy: bool,
    auto_rebirth: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 20,
            seconds: 3_600,
            seed: 1,
            attack_interval_ms: 500,
            auto_buy: true,
            auto_rebirth: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct RunStats {
    level: u32,
    rebirths: u32,
    gold: u64,
    soul_stones: u64,
    kills: u64,
    deaths: u64,
    achievements: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, verbose) = parse_args(&args);

    println!("Hero's Path balance simulator");
    println!();
    println!("Configuration:");
    println!("  Runs:            {}", config.runs);
    println!("  Seconds per run: {}", config.seconds);
    println!("  Seed:            {}", config.seed);
    println!("  Attack every:    {} ms", config.attack_interval_ms);
    println!("  Auto-buy:        {}", config.auto_buy);
    println!("  Auto-rebirth:    {}", config.auto_rebirth);
    println!();

    let mut all = Vec::with_capacity(config.runs as usize);
    for run in 0..config.runs {
        let stats = simulate_run(&config, config.seed.wrapping_add(run as u64));
        if verbose {
            println!(
                "  run {:>3}: level {:>3}  rebirths {:>2}  kills {:>6}  deaths {:>4}  gold {:>9}  achievements {:>2}",
                run + 1,
                stats.level,
                stats.rebirths,
                stats.kills,
                stats.deaths,
                stats.gold,
                stats.achievements
            );
        }
        all.push(stats);
    }

    print_summary(&all);
}

fn simulate_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut engine = GameEngine::with_seed(Box::new(MemoryStore::new()), seed);
    let end_ms = config.seconds * 1_000;
    let interval = config.attack_interval_ms.max(1);

    while engine.now_ms() < end_ms {
        engine.advance(interval.min(end_ms - engine.now_ms()));

        let _ = engine.execute(Command::Attack);

        let player = &engine.state().player;
        if player.special_ready && player.health * 10 < player.max_health * 4 {
            let _ = engine.execute(Command::UseSpecialAbility);
        }
        if config.auto_buy {
            buy_upgrades(&mut engine);
        }
        if config.auto_rebirth && can_rebirth(engine.state()) {
            let _ = engine.execute(Command::ConfirmRebirth);
        }
        engine.drain_events();
    }

    let state = engine.state();
    let stats = RunStats {
        level: state.player.level,
        rebirths: state.player.rebirth_count,
        gold: state.player.gold,
        soul_stones: state.player.soul_stones,
        kills: state.player.stats.enemies_killed,
        deaths: state.player.stats.deaths,
        achievements: state.unlocked_achievements.len(),
    };
    info!(seed, level = stats.level, rebirths = stats.rebirths, "run finished");
    stats
}

/// Buys the strongest affordable gear upgrade and any affordable soul power.
fn buy_upgrades(engine: &mut GameEngine) {
    let player = &engine.state().player;
    let gold = player.gold;
    let current_damage = player.damage_range().max;
    let current_defense = player.armor.as_ref().map(|a| a.defense).unwrap_or(0);

    let best_weapon = best_affordable(gold, |item| match item.kind {
        ItemKind::Weapon { damage } if damage.max > current_damage => Some(damage.max),
        _ => None,
    });
    let best_armor = best_affordable(gold, |item| match item.kind {
        ItemKind::Armor { defense } if defense > current_defense => Some(defense),
        _ => None,
    });

    for item in [best_weapon, best_armor].into_iter().flatten() {
        debug!(item = item.id, "bot buying");
        let _ = engine.execute(Command::Buy {
            shop: ShopKind::Gold,
            item_id: item.id.to_string(),
        });
    }

    let _ = engine.execute(Command::Buy {
        shop: ShopKind::Soul,
        item_id: "soul_power".to_string(),
    });
}

fn best_affordable(
    gold: u64,
    score: impl Fn(&ShopItem) -> Option<u32>,
) -> Option<&'static ShopItem> {
    shop_items(ShopKind::Gold)
        .iter()
        .filter(|item| item.cost <= gold)
        .filter_map(|item| score(item).map(|s| (s, item)))
        .max_by_key(|(s, _)| *s)
        .map(|(_, item)| item)
}

fn print_summary(all: &[RunStats]) {
    if all.is_empty() {
        println!("No runs.");
        return;
    }
    let n = all.len() as f64;
    let avg = |f: fn(&RunStats) -> f64| all.iter().map(f).sum::<f64>() / n;
    let max_level = all.iter().map(|s| s.level).max().unwrap_or(0);
    let max_rebirths = all.iter().map(|s| s.rebirths).max().unwrap_or(0);

    println!();
    println!("Results over {} runs:", all.len());
    println!("  Avg level:        {:.1} (max {})", avg(|s| s.level as f64), max_level);
    println!(
        "  Avg rebirths:     {:.2} (max {})",
        avg(|s| s.rebirths as f64),
        max_rebirths
    );
    println!("  Avg kills:        {:.0}", avg(|s| s.kills as f64));
    println!("  Avg deaths:       {:.1}", avg(|s| s.deaths as f64));
    println!("  Avg gold held:    {:.0}", avg(|s| s.gold as f64));
    println!("  Avg soul stones:  {:.1}", avg(|s| s.soul_stones as f64));
    println!("  Avg achievements: {:.1}", avg(|s| s.achievements as f64));
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.runs = args[i + 1].parse().unwrap_or(config.runs);
                    i += 1;
                }
            }
            "-t" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse().unwrap_or(config.seconds);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().unwrap_or(config.seed);
                    i += 1;
                }
            }
            "-i" | "--interval" => {
                if i + 1 < args.len() {
                    config.attack_interval_ms =
                        args[i + 1].parse().unwrap_or(config.attack_interval_ms);
                    i += 1;
                }
            }
            "--no-buy" => config.auto_buy = false,
            "--no-rebirth" => config.auto_rebirth = false,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, verbose)
}

fn print_help() {
    println!("Hero's Path balance simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of runs (default: 20)");
    println!("    -t, --seconds <S>     Simulated seconds per run (default: 3600)");
    println!("    -s, --seed <S>        Base seed; run k uses seed + k (default: 1)");
    println!("    -i, --interval <MS>   Milliseconds between attacks (default: 500)");
    println!("    --no-buy              Never visit the shops");
    println!("    --no-rebirth          Never rebirth");
    println!("    -v, --verbose         Print every run");
    println!("    -h, --help            Show this help");
}
