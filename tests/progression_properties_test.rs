//! Property tests for the progression and economy invariants.

use heropath::catalog::GOLD_SHOP_ITEMS;
use heropath::character::prestige::{perform_rebirth, required_level};
use heropath::character::progression::gain_experience;
use heropath::core::constants::LEVEL_EXP_MULTIPLIER;
use heropath::core::events::TickResult;
use heropath::core::game_state::GameState;
use heropath::economy::{purchase, ShopKind};
use heropath::utils::persistence::MemoryStore;
use heropath::{Command, GameEngine};
use proptest::prelude::*;

proptest! {
    #[test]
    fn experience_converts_into_levels_exactly(
        start_level in 1u32..60,
        start_exp in 0u64..100,
        multiplier in 1.0f64..3.0,
        grants in prop::collection::vec(0u64..50_000, 1..20),
    ) {
        let mut state = GameState::new(0);
        state.player.level = start_level;
        state.player.experience = start_exp;
        state.player.multipliers.experience = multiplier;

        let mut level = start_level;
        let mut experience = start_exp;
        let mut threshold = state.player.max_experience;
        for amount in grants {
            let expected_gain = (amount as f64 * multiplier).floor() as u64;
            experience += expected_gain;
            while experience >= threshold {
                experience -= threshold;
                level += 1;
                threshold = ((threshold as f64 * LEVEL_EXP_MULTIPLIER).floor() as u64).max(1);
            }

            let mut result = TickResult::default();
            let gained = gain_experience(&mut state, amount, &mut result);
            prop_assert_eq!(gained, expected_gain);
            prop_assert_eq!(state.player.level, level);
            prop_assert_eq!(state.player.experience, experience);
            prop_assert_eq!(state.player.max_experience, threshold);
            prop_assert!(state.player.experience < state.player.max_experience);
            prop_assert!(state.player.health <= state.player.max_health);
        }
    }

    #[test]
    fn rebirth_multipliers_compound(rebirths in 1u32..12) {
        let mut state = GameState::new(0);
        for _ in 0..rebirths {
            state.player.level = required_level(state.player.rebirth_count);
            let mut result = TickResult::default();
            prop_assert!(perform_rebirth(&mut state, &mut result).is_ok());
            prop_assert_eq!(state.player.level, 1);
        }

        let m = state.player.multipliers;
        let n = rebirths as i32;
        prop_assert!((m.damage - 1.10f64.powi(n)).abs() < 1e-9);
        prop_assert!((m.defense - 1.05f64.powi(n)).abs() < 1e-9);
        prop_assert!((m.experience - 1.15f64.powi(n)).abs() < 1e-9);
        prop_assert!((m.gold - 1.05f64.powi(n)).abs() < 1e-9);
        prop_assert_eq!(state.player.rebirth_count, rebirths);
        prop_assert_eq!(required_level(rebirths), 25 + 5 * rebirths);
    }

    #[test]
    fn purchase_is_all_or_nothing(gold in 0u64..9_000, idx in 0usize..GOLD_SHOP_ITEMS.len()) {
        let item = &GOLD_SHOP_ITEMS[idx];
        let mut state = GameState::new(0);
        state.player.gold = gold;
        let before = state.clone();

        let mut result = TickResult::default();
        match purchase(&mut state, ShopKind::Gold, item.id, &mut result) {
            Ok(bought) => {
                prop_assert!(gold >= item.cost);
                prop_assert_eq!(bought.id, item.id);
                prop_assert_eq!(state.player.gold, gold - item.cost);
                prop_assert_eq!(state.player.stats.purchases, 1);
                prop_assert!(result.save_requested);
            }
            Err(_) => {
                prop_assert!(gold < item.cost);
                prop_assert_eq!(&state, &before);
                prop_assert!(result.events.is_empty());
                prop_assert!(!result.save_requested);
            }
        }
    }

    #[test]
    fn unlocked_achievements_only_grow(
        seed in 0u64..1_000,
        steps in prop::collection::vec(0u8..4, 1..120),
    ) {
        let mut engine = GameEngine::with_seed(Box::new(MemoryStore::new()), seed);
        engine.state_mut().player.gold = 5_000;
        let mut seen = engine.state().unlocked_achievements.clone();

        for step in steps {
            let _ = match step {
                0 => engine.execute(Command::Attack),
                1 => engine.execute(Command::UseSpecialAbility),
                2 => engine.execute(Command::Buy {
                    shop: ShopKind::Gold,
                    item_id: "health_potion".to_string(),
                }),
                _ => {
                    engine.advance(2_500);
                    Ok(())
                }
            };
            let now = &engine.state().unlocked_achievements;
            prop_assert!(seen.is_subset(now));
            prop_assert_eq!(
                engine.state().player.stats.achievements_unlocked as usize,
                now.len()
            );
            seen = now.clone();
        }
    }
}
