//! Achievement system module.
//!
//! Achievements are data: each definition pairs a [`Condition`] with a
//! [`Reward`]. Checking walks every locked definition against the current
//! player and unlocks whatever is satisfied. Unlocked ids live in
//! `GameState::unlocked_achievements` and are saved with the game.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId, Condition, Reward};

use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::GameState;
use crate::economy::add_gold;
use tracing::info;

/// Unlocks every achievement whose condition holds, granting rewards.
///
/// Rewards can satisfy further conditions (gold held, achievement count),
/// so passes repeat until one unlocks nothing. Already-unlocked ids are
/// skipped, which makes a repeated call with unchanged state a no-op.
/// Returns how many achievements were unlocked.
pub fn check_achievements(state: &mut GameState, result: &mut TickResult) -> usize {
    let mut total = 0;
    loop {
        let mut unlocked_this_pass = 0;
        for def in ALL_ACHIEVEMENTS {
            if state.unlocked_achievements.contains(&def.id) {
                continue;
            }
            if def.condition.satisfied(&state.player) && unlock(state, def, result) {
                unlocked_this_pass += 1;
            }
        }
        if unlocked_this_pass == 0 {
            break;
        }
        total += unlocked_this_pass;
    }
    total
}

/// Unlocks one achievement and grants its reward. Returns false if it was
/// already unlocked.
pub fn unlock(state: &mut GameState, def: &AchievementDef, result: &mut TickResult) -> bool {
    if !state.unlocked_achievements.insert(def.id) {
        return false;
    }

    let player = &mut state.player;
    player.stats.achievements_unlocked += 1;
    if def.reward.gold > 0 {
        add_gold(player, def.reward.gold);
    }
    player.soul_stones = player.soul_stones.saturating_add(def.reward.soul_stones);

    info!(achievement = ?def.id, "achievement unlocked");
    result.push(GameEvent::AchievementUnlocked {
        id: def.id,
        name: def.name,
    });
    result.request_save();
    true
}

/// Number of achievements unlocked out of the total.
pub fn progress(state: &GameState) -> (usize, usize) {
    (state.unlocked_achievements.len(), ALL_ACHIEVEMENTS.len())
}
