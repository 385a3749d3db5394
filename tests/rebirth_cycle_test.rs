//! Integration test: reach the rebirth level, get reborn, repeat.

use heropath::achievements::AchievementId;
use heropath::combat::types::DamageRange;
use heropath::core::constants::*;
use heropath::core::game_state::Weapon;
use heropath::utils::persistence::MemoryStore;
use heropath::{ActionRejected, Command, GameEngine, GameEvent};

fn new_engine() -> GameEngine {
    let mut engine = GameEngine::with_seed(Box::new(MemoryStore::new()), 4);
    engine.drain_events();
    engine
}

fn rebirth_available_count(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::RebirthAvailable { .. }))
        .count()
}

#[test]
fn test_rebirth_locked_below_required_level() {
    let mut engine = new_engine();
    engine.state_mut().player.level = 24;
    let before = engine.state().clone();

    assert_eq!(
        engine.execute(Command::ConfirmRebirth),
        Err(ActionRejected::RebirthLocked {
            required_level: 25,
            level: 24,
        })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_complete_rebirth_cycle() {
    let mut engine = new_engine();
    engine.state_mut().player.level = 25;
    engine.state_mut().player.experience = 40;
    engine.state_mut().player.weapon = Some(Weapon {
        name: "Steel Sword".to_string(),
        damage: DamageRange::new(30, 50),
    });

    // The periodic readiness check notices eligibility exactly once.
    engine.advance(READINESS_CHECK_INTERVAL_MS);
    assert!(engine.state().game_stats.special_unlocks.rebirth_ready);
    assert_eq!(rebirth_available_count(&engine.drain_events()), 1);
    engine.advance(READINESS_CHECK_INTERVAL_MS);
    assert_eq!(rebirth_available_count(&engine.drain_events()), 0);

    let gold_before = engine.state().player.gold;
    engine.execute(Command::ConfirmRebirth).unwrap();

    let state = engine.state();
    let player = &state.player;
    assert_eq!(player.level, 1);
    assert_eq!(player.experience, 0);
    assert_eq!(player.max_experience, 100);
    assert_eq!(player.health, 100);
    assert_eq!(player.rebirth_count, 1);
    assert_eq!(player.stats.rebirths, 1);
    assert_eq!(player.gold, gold_before);
    assert_eq!(player.weapon.as_ref().unwrap().name, "Steel Sword");
    assert!((player.multipliers.damage - 1.10).abs() < 1e-9);
    assert!((player.multipliers.defense - 1.05).abs() < 1e-9);
    assert!((player.multipliers.experience - 1.15).abs() < 1e-9);
    assert!((player.multipliers.gold - 1.05).abs() < 1e-9);
    // One stone from the rebirth, one from the first-rebirth achievement.
    assert_eq!(player.soul_stones, 2);
    assert!(state
        .unlocked_achievements
        .contains(&AchievementId::FirstReincarnation));
    assert!(!state.game_stats.special_unlocks.rebirth_ready);
    assert_eq!(state.rebirth_required_level(), 30);

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::Reborn {
            rebirth_count: 1,
            ..
        }
    )));
}

#[test]
fn test_rebirths_compound_and_raise_requirement() {
    let mut engine = new_engine();

    for n in 0..3u32 {
        let required = REBIRTH_BASE_LEVEL + n * REBIRTH_LEVEL_STEP;
        engine.state_mut().player.level = required - 1;
        assert!(engine.execute(Command::ConfirmRebirth).is_err());
        engine.state_mut().player.level = required;
        engine.execute(Command::ConfirmRebirth).unwrap();
    }

    let player = &engine.state().player;
    assert_eq!(player.rebirth_count, 3);
    assert!((player.multipliers.damage - 1.1f64.powi(3)).abs() < 1e-9);
    assert!((player.multipliers.experience - 1.15f64.powi(3)).abs() < 1e-9);
    assert_eq!(engine.state().rebirth_required_level(), 40);
}

#[test]
fn test_rebirth_keeps_bonus_health_but_caps_current() {
    let mut engine = new_engine();
    engine.state_mut().player.max_health = 300;
    engine.state_mut().player.health = 300;
    engine.state_mut().player.level = 25;

    engine.execute(Command::ConfirmRebirth).unwrap();
    assert_eq!(engine.state().player.max_health, 300);
    assert_eq!(engine.state().player.health, 100);
}

#[test]
fn test_leveling_into_eligibility_announces_rebirth() {
    let mut engine = new_engine();
    let state = engine.state_mut();
    state.player.level = 24;
    state.player.experience = state.player.max_experience - 1;

    // One more kill worth of experience crosses into level 25.
    let enemy = state.current_enemy.as_mut().unwrap();
    enemy.health = 1;
    enemy.exp_reward = 1;
    state.player.weapon = Some(Weapon {
        name: "Iron Sword".to_string(),
        damage: DamageRange::new(15, 25),
    });

    engine.execute(Command::Attack).unwrap();
    assert_eq!(engine.state().player.level, 25);
    assert_eq!(rebirth_available_count(&engine.drain_events()), 1);
}
