//! Experience and leveling.

use crate::achievements::check_achievements;
use crate::character::prestige::refresh_rebirth_ready;
use crate::core::constants::*;
use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::GameState;
use tracing::info;

/// Adds `floor(amount * experience multiplier)` experience and levels up as
/// many times as the new total allows. Returns the experience added.
pub fn gain_experience(state: &mut GameState, amount: u64, result: &mut TickResult) -> u64 {
    let gained = (amount as f64 * state.player.multipliers.experience).floor() as u64;
    state.player.experience = state.player.experience.saturating_add(gained);
    check_level_up(state, result);
    gained
}

/// Converts surplus experience into levels. Returns how many levels were
/// gained.
pub fn check_level_up(state: &mut GameState, result: &mut TickResult) -> u32 {
    if state.player.max_experience == 0 {
        state.player.max_experience = BASE_MAX_EXPERIENCE;
    }

    let mut levels = 0;
    while state.player.experience >= state.player.max_experience {
        state.player.experience -= state.player.max_experience;
        level_up(state, result);
        levels += 1;
    }
    levels
}

/// One level: bigger threshold, full heal, then rebirth and achievement
/// checks.
pub fn level_up(state: &mut GameState, result: &mut TickResult) {
    let player = &mut state.player;
    player.level += 1;
    player.max_experience =
        ((player.max_experience as f64 * LEVEL_EXP_MULTIPLIER).floor() as u64).max(1);
    player.heal_full();

    info!(level = player.level, "level up");
    result.push(GameEvent::LeveledUp {
        level: player.level,
    });

    refresh_rebirth_ready(state, result);
    check_achievements(state, result);
    result.request_save();
}

/// Threshold for reaching `level` from a fresh character, for display and
/// simulation reports.
pub fn experience_to_level(level: u32) -> u64 {
    let mut total = 0u64;
    let mut threshold = BASE_MAX_EXPERIENCE;
    for _ in 1..level {
        total = total.saturating_add(threshold);
        threshold = (threshold as f64 * LEVEL_EXP_MULTIPLIER).floor() as u64;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_level_up() {
        let mut state = GameState::new(0);
        state.player.health = 10;
        let mut result = TickResult::default();

        gain_experience(&mut state, 120, &mut result);

        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.experience, 20);
        assert_eq!(state.player.max_experience, 125);
        assert_eq!(state.player.health, state.player.max_health);
        assert!(result.save_requested);
    }

    #[test]
    fn test_multi_level_up_from_one_grant() {
        let mut state = GameState::new(0);
        state.player.experience = 95;
        let mut result = TickResult::default();

        // 95 + 250 = 345: -100 (lvl 2), -125 (lvl 3), 120 < 156
        gain_experience(&mut state, 250, &mut result);

        assert_eq!(state.player.level, 3);
        assert_eq!(state.player.experience, 120);
        assert_eq!(state.player.max_experience, 156);
        let level_ups = result
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::LeveledUp { .. }))
            .count();
        assert_eq!(level_ups, 2);
    }

    #[test]
    fn test_experience_multiplier_floors() {
        let mut state = GameState::new(0);
        state.player.multipliers.experience = 1.15;
        let gained = gain_experience(&mut state, 25, &mut TickResult::default());
        // floor(28.75)
        assert_eq!(gained, 28);
        assert_eq!(state.player.experience, 28);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut state = GameState::new(0);
        let mut result = TickResult::default();
        gain_experience(&mut state, 99, &mut result);
        assert_eq!(state.player.level, 1);
        assert!(!result.save_requested);
    }

    #[test]
    fn test_reaching_level_ten_unlocks_achievement() {
        let mut state = GameState::new(0);
        state.player.level = 9;
        let mut result = TickResult::default();
        gain_experience(&mut state, 100, &mut result);
        assert!(state
            .unlocked_achievements
            .contains(&crate::achievements::AchievementId::Level10));
    }

    #[test]
    fn test_experience_to_level() {
        assert_eq!(experience_to_level(1), 0);
        assert_eq!(experience_to_level(2), 100);
        assert_eq!(experience_to_level(3), 225);
    }
}
