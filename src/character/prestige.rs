//! Rebirth: trade levels for permanent, compounding multipliers.

use crate::achievements::check_achievements;
use crate::core::constants::*;
use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::GameState;
use crate::error::ActionRejected;
use tracing::info;

/// Level required for the rebirth after `rebirth_count` previous ones.
pub fn required_level(rebirth_count: u32) -> u32 {
    REBIRTH_BASE_LEVEL.saturating_add(rebirth_count.saturating_mul(REBIRTH_LEVEL_STEP))
}

pub fn can_rebirth(state: &GameState) -> bool {
    state.player.level >= required_level(state.player.rebirth_count)
}

/// Updates the `rebirth_ready` flag. Emits `RebirthAvailable` only when the
/// flag flips from false to true. Returns the current eligibility.
pub fn refresh_rebirth_ready(state: &mut GameState, result: &mut TickResult) -> bool {
    let eligible = can_rebirth(state);
    let unlocks = &mut state.game_stats.special_unlocks;
    if eligible && !unlocks.rebirth_ready {
        unlocks.rebirth_ready = true;
        let required_level = required_level(state.player.rebirth_count);
        info!(required_level, "rebirth available");
        result.push(GameEvent::RebirthAvailable { required_level });
    }
    eligible
}

/// Bonuses the next rebirth would apply, as (damage, defense, experience, gold).
pub fn rebirth_bonuses() -> (f64, f64, f64, f64) {
    (
        REBIRTH_DAMAGE_BONUS,
        REBIRTH_DEFENSE_BONUS,
        REBIRTH_EXPERIENCE_BONUS,
        REBIRTH_GOLD_BONUS,
    )
}

/// Performs a rebirth.
///
/// Multipliers compound and are never reset. Level, experience, the
/// experience threshold and current health go back to their starting
/// values; gold, equipment and max health are kept.
pub fn perform_rebirth(state: &mut GameState, result: &mut TickResult) -> Result<(), ActionRejected> {
    let required = required_level(state.player.rebirth_count);
    if state.player.level < required {
        return Err(ActionRejected::RebirthLocked {
            required_level: required,
            level: state.player.level,
        });
    }

    let player = &mut state.player;
    let (damage, defense, experience, gold) = rebirth_bonuses();
    player.multipliers.damage *= damage;
    player.multipliers.defense *= defense;
    player.multipliers.experience *= experience;
    player.multipliers.gold *= gold;

    player.soul_stones = player.soul_stones.saturating_add(REBIRTH_SOUL_STONES);
    player.stats.rebirths += 1;
    player.rebirth_count += 1;

    player.level = 1;
    player.experience = 0;
    player.max_experience = BASE_MAX_EXPERIENCE;
    player.health = BASE_MAX_HEALTH.min(player.max_health);

    state.game_stats.special_unlocks.rebirth_ready = false;

    info!(
        rebirth_count = state.player.rebirth_count,
        soul_stones = state.player.soul_stones,
        "rebirth"
    );
    result.push(GameEvent::Reborn {
        rebirth_count: state.player.rebirth_count,
        soul_stones: state.player.soul_stones,
    });

    check_achievements(state, result);
    result.request_save();
    Ok(())
}
