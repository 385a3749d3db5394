use crate::achievements::check_achievements;
use crate::catalog::{droppable_items, ENEMY_TEMPLATES};
use crate::character::progression::gain_experience;
use crate::core::constants::*;
use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::GameState;
use crate::economy::add_gold;
use crate::error::ActionRejected;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use tracing::{debug, info};

use super::types::Enemy;

/// What happened to the enemy after the player's swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Enemy is still standing; a counter-attack should follow.
    EnemySurvived,
    /// Enemy died and victory was resolved; a respawn should follow.
    EnemyDefeated,
}

/// Result of an enemy counter-attack that actually landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStrike {
    pub damage: u32,
    pub player_defeated: bool,
}

/// Picks a random template and replaces the current enemy with a fresh
/// instance scaled to the player's level, even if one was mid-fight.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng, result: &mut TickResult) {
    let Some(template) = ENEMY_TEMPLATES.choose(rng) else {
        return;
    };
    let enemy = Enemy::from_template(template, state.player.level);

    debug!(enemy = template.id, level = enemy.level, health = enemy.health, "enemy spawned");
    result.push(GameEvent::EnemySpawned {
        name: enemy.name.clone(),
        level: enemy.level,
        health: enemy.health,
    });
    state.current_enemy = Some(enemy);
}

/// Rolls one player hit: weapon damage times the damage multiplier, and on
/// a critical the already-rolled damage times 1.5. Returns (damage, crit).
pub fn roll_player_damage(state: &GameState, rng: &mut impl Rng) -> (u32, bool) {
    let player = &state.player;
    let rolled = player.damage_range().roll(rng);
    let base = (rolled as f64 * player.multipliers.damage).floor() as u32;
    if rng.gen_bool(CRIT_CHANCE) {
        ((base as f64 * CRIT_MULTIPLIER).floor() as u32, true)
    } else {
        (base, false)
    }
}

/// The player strikes the live enemy.
///
/// Requires a live enemy and a living player. When the enemy dies victory is
/// resolved immediately; otherwise the caller schedules the counter-attack.
pub fn resolve_player_attack(
    state: &mut GameState,
    rng: &mut impl Rng,
    result: &mut TickResult,
) -> Result<AttackOutcome, ActionRejected> {
    if !state.player.is_alive() {
        return Err(ActionRejected::PlayerDown);
    }
    if state.live_enemy().is_none() {
        return Err(ActionRejected::NoLiveEnemy);
    }

    let (damage, was_crit) = roll_player_damage(state, rng);

    let stats = &mut state.player.stats;
    stats.total_damage_dealt = stats.total_damage_dealt.saturating_add(damage as u64);
    if was_crit {
        stats.critical_streak += 1;
    } else {
        stats.critical_streak = 0;
    }

    let Some(enemy) = state.current_enemy.as_mut() else {
        return Err(ActionRejected::NoLiveEnemy);
    };
    enemy.take_damage(damage);
    let enemy_dead = !enemy.is_alive();
    result.push(GameEvent::PlayerAttack {
        damage,
        was_crit,
        enemy_name: enemy.name.clone(),
    });

    if enemy_dead {
        win_battle(state, rng, result);
        return Ok(AttackOutcome::EnemyDefeated);
    }

    check_achievements(state, result);
    Ok(AttackOutcome::EnemySurvived)
}

/// Grants the current enemy's rewards: kill count, gold, experience, a
/// chance at an item drop, then an achievement check.
pub fn win_battle(state: &mut GameState, rng: &mut impl Rng, result: &mut TickResult) {
    let Some(enemy) = state.current_enemy.as_ref() else {
        return;
    };
    let enemy_name = enemy.name.clone();
    let gold_reward = enemy.gold_reward;
    let exp_reward = enemy.exp_reward;

    state.player.stats.enemies_killed += 1;
    info!(enemy = %enemy_name, gold_reward, exp_reward, "enemy defeated");
    result.push(GameEvent::EnemyDefeated {
        enemy_name,
        gold: gold_reward,
        experience: exp_reward,
    });

    add_gold(&mut state.player, gold_reward);
    gain_experience(state, exp_reward, result);

    if rng.gen_bool(ITEM_DROP_CHANCE) {
        if let Some(item) = droppable_items().choose(rng) {
            state.player.stats.items_found += 1;
            info!(item = item.id, "item found");
            result.push(GameEvent::ItemFound {
                item_name: item.name.to_string(),
            });
        }
    }

    check_achievements(state, result);
}

/// The live enemy hits back.
///
/// Returns `None` without touching anything when there is no live enemy or
/// the player is already down, since the situation may have changed while
/// the counter-attack was pending.
pub fn resolve_enemy_attack(state: &mut GameState, result: &mut TickResult) -> Option<EnemyStrike> {
    if !state.player.is_alive() {
        return None;
    }
    let enemy = state.live_enemy()?;
    let enemy_name = enemy.name.clone();
    let damage = enemy.damage.saturating_sub(state.player.defense()).max(1);

    state.player.health = state.player.health.saturating_sub(damage);
    result.push(GameEvent::EnemyAttack { damage, enemy_name });

    let player_defeated = !state.player.is_alive();
    if player_defeated {
        on_player_defeated(state, result);
    }
    Some(EnemyStrike {
        damage,
        player_defeated,
    })
}

/// Defeat penalty: lose 10% of gold, come back at half health. Returns the
/// gold lost.
pub fn on_player_defeated(state: &mut GameState, result: &mut TickResult) -> u64 {
    let player = &mut state.player;
    let gold_lost = (player.gold as f64 * DEFEAT_GOLD_LOSS_RATIO).floor() as u64;
    player.gold = player.gold.saturating_sub(gold_lost);
    player.health = (player.max_health as f64 * DEFEAT_HEAL_RATIO).floor() as u32;
    player.stats.deaths += 1;

    info!(gold_lost, deaths = player.stats.deaths, "player defeated");
    result.push(GameEvent::PlayerDefeated { gold_lost });
    gold_lost
}

/// Full heal, then the ability goes on cooldown.
pub fn use_special_ability(
    state: &mut GameState,
    result: &mut TickResult,
) -> Result<(), ActionRejected> {
    let player = &mut state.player;
    if !player.special_ready {
        return Err(ActionRejected::AbilityNotReady {
            remaining: player.special_cooldown,
        });
    }

    player.heal_full();
    player.special_ready = false;
    player.special_cooldown = SPECIAL_ABILITY_COOLDOWN_SECONDS;

    debug!("special ability used");
    result.push(GameEvent::AbilityUsed);
    Ok(())
}

/// Per-second cooldown countdown. `AbilityReady` fires only on the tick
/// that brings the cooldown to zero.
pub fn tick_cooldown(state: &mut GameState, result: &mut TickResult) {
    let player = &mut state.player;
    if player.special_ready || player.special_cooldown == 0 {
        return;
    }

    player.special_cooldown -= 1;
    if player.special_cooldown == 0 {
        player.special_ready = true;
        result.push(GameEvent::AbilityReady);
    }
}
