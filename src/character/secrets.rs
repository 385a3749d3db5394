//! Hidden triggers: the typed secret code and the developer shortcut.

use crate::achievements::check_achievements;
use crate::core::constants::*;
use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::GameState;
use tracing::info;

/// Id recorded in `unlocked_easter_eggs` once the secret code is entered.
pub const SECRET_MODE_EGG: &str = "secret_mode";

/// Rolling buffer of the most recent keystrokes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretKeyBuffer {
    keys: String,
}

impl SecretKeyBuffer {
    /// Records a keystroke. Returns true when the buffer now contains the
    /// secret code, in which case the buffer is cleared.
    pub fn push(&mut self, key: char) -> bool {
        self.keys.extend(key.to_lowercase());
        let excess = self.keys.chars().count().saturating_sub(SECRET_KEY_BUFFER_LEN);
        if excess > 0 {
            self.keys = self.keys.chars().skip(excess).collect();
        }

        if self.keys.contains(SECRET_CODE) {
            self.keys.clear();
            return true;
        }
        false
    }

    pub fn as_str(&self) -> &str {
        &self.keys
    }
}

/// Applies the secret-mode bonuses. Only the first activation has any
/// effect; returns whether this call activated it.
pub fn activate_secret_mode(state: &mut GameState, result: &mut TickResult) -> bool {
    if state.game_stats.special_unlocks.secret_mode {
        return false;
    }
    state.game_stats.special_unlocks.secret_mode = true;

    let player = &mut state.player;
    player.multipliers.damage *= SECRET_DAMAGE_MULTIPLIER;
    player.max_health = player.max_health.saturating_mul(SECRET_HEALTH_MULTIPLIER);
    player.multipliers.experience *= SECRET_EXPERIENCE_MULTIPLIER;
    player.heal_full();

    state.unlocked_easter_eggs.insert(SECRET_MODE_EGG.to_string());

    info!("secret mode activated");
    result.push(GameEvent::SecretModeActivated);
    check_achievements(state, result);
    true
}

/// Developer shortcut: gold, a high level and a reset experience bar.
/// Works once per save; returns whether this call applied it.
pub fn enable_dev_mode(state: &mut GameState, result: &mut TickResult) -> bool {
    if state.game_stats.special_unlocks.dev_mode {
        return false;
    }
    state.game_stats.special_unlocks.dev_mode = true;

    let player = &mut state.player;
    player.gold = player.gold.saturating_add(DEV_MODE_GOLD);
    player.level = DEV_MODE_LEVEL;
    player.heal_full();
    player.experience = 0;
    player.max_experience = BASE_MAX_EXPERIENCE;

    info!("developer mode enabled");
    result.push(GameEvent::DevModeActivated);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_code(buffer: &mut SecretKeyBuffer, text: &str) -> bool {
        text.chars().fold(false, |hit, c| buffer.push(c) || hit)
    }

    #[test]
    fn test_code_matches_and_clears_buffer() {
        let mut buffer = SecretKeyBuffer::default();
        assert!(type_code(&mut buffer, "xxVOIDRUNNER2024"));
        assert_eq!(buffer.as_str(), "");
    }

    #[test]
    fn test_buffer_keeps_last_twenty_keys() {
        let mut buffer = SecretKeyBuffer::default();
        type_code(&mut buffer, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(buffer.as_str(), "ghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_broken_code_does_not_match() {
        let mut buffer = SecretKeyBuffer::default();
        assert!(!type_code(&mut buffer, "voidrunner 2024"));
    }

    #[test]
    fn test_secret_mode_applies_once() {
        let mut state = GameState::new(0);
        state.player.health = 30;
        let mut result = TickResult::default();

        assert!(activate_secret_mode(&mut state, &mut result));
        assert!((state.player.multipliers.damage - 10.0).abs() < 1e-9);
        assert!((state.player.multipliers.experience - 3.0).abs() < 1e-9);
        assert_eq!(state.player.max_health, 500);
        assert_eq!(state.player.health, 500);
        assert!(state.unlocked_easter_eggs.contains(SECRET_MODE_EGG));

        assert!(!activate_secret_mode(&mut state, &mut result));
        assert!((state.player.multipliers.damage - 10.0).abs() < 1e-9);
        assert_eq!(state.player.max_health, 500);
    }

    #[test]
    fn test_dev_mode() {
        let mut state = GameState::new(0);
        state.player.experience = 40;
        let mut result = TickResult::default();

        assert!(enable_dev_mode(&mut state, &mut result));
        assert_eq!(state.player.gold, 100_050);
        assert_eq!(state.player.level, 100);
        assert_eq!(state.player.experience, 0);
        assert_eq!(state.player.max_experience, 100);

        assert!(!enable_dev_mode(&mut state, &mut result));
        assert_eq!(state.player.gold, 100_050);
    }
}
