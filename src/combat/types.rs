use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::*;

/// Inclusive weapon damage range, e.g. 5-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Damage dealt with no weapon equipped.
    pub const fn unarmed() -> Self {
        Self::new(UNARMED_DAMAGE_MIN, UNARMED_DAMAGE_MAX)
    }

    /// Rolls a uniform integer in `[min, max]`.
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Static enemy definition from the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_level: u32,
    pub base_health: u32,
    pub base_damage: u32,
    pub base_gold_reward: u64,
    pub base_exp_reward: u64,
}

/// The single live enemy, scaled to the player's level at spawn time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub template_id: String,
    pub name: String,
    pub level: u32,
    pub max_health: u32,
    pub health: u32,
    pub damage: u32,
    pub gold_reward: u64,
    pub exp_reward: u64,
}

impl Enemy {
    /// Builds an instance from a template for a player of `player_level`.
    ///
    /// Health, damage and rewards are multiplied by
    /// `ENEMY_SCALE^(player_level - 1)` and floored.
    pub fn from_template(template: &EnemyTemplate, player_level: u32) -> Self {
        let steps = player_level.saturating_sub(1);
        let scale = enemy_scale_factor(player_level);
        let level = (template.base_level as f64 + steps as f64 * ENEMY_LEVEL_PER_PLAYER_LEVEL)
            .floor() as u32;
        let max_health = scale_stat(template.base_health as f64, scale) as u32;

        Self {
            template_id: template.id.to_string(),
            name: template.name.to_string(),
            level,
            max_health,
            health: max_health,
            damage: scale_stat(template.base_damage as f64, scale) as u32,
            gold_reward: scale_stat(template.base_gold_reward as f64, scale) as u64,
            exp_reward: scale_stat(template.base_exp_reward as f64, scale) as u64,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// `ENEMY_SCALE^(player_level - 1)`; level 0 is treated as level 1.
pub fn enemy_scale_factor(player_level: u32) -> f64 {
    let steps = player_level.saturating_sub(1);
    ENEMY_SCALE.powi(steps.min(i32::MAX as u32) as i32)
}

fn scale_stat(base: f64, scale: f64) -> f64 {
    (base * scale).floor()
}
