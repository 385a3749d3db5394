use crate::achievements::types::AchievementId;
use crate::combat::types::{DamageRange, Enemy};
use crate::core::constants::*;
use crate::economy::types::{Currency, ShopCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Equipped weapon. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: DamageRange,
}

/// Equipped armor. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub defense: u32,
}

/// Power multipliers. Only rebirths, upgrades, artifacts and the secret
/// mode touch these, and they only ever multiply by factors >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Multipliers {
    pub damage: f64,
    pub defense: f64,
    pub experience: f64,
    pub gold: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            defense: 1.0,
            experience: 1.0,
            gold: 1.0,
        }
    }
}

/// Lifetime counters. Everything except `critical_streak` only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeStats {
    pub total_damage_dealt: u64,
    pub enemies_killed: u64,
    pub gold_earned: u64,
    pub seconds_played: u64,
    pub rebirths: u32,
    pub achievements_unlocked: u32,
    pub purchases: u64,
    pub items_found: u64,
    pub deaths: u64,
    pub critical_streak: u32,
    /// Gold-shop categories bought from at least once.
    pub categories_purchased: BTreeSet<ShopCategory>,
}

/// The player aggregate. Missing fields in a snapshot fall back to these
/// defaults, so older saves with the same version still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub experience: u64,
    pub max_experience: u64,
    pub gold: u64,
    pub soul_stones: u64,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
    pub rebirth_count: u32,
    pub multipliers: Multipliers,
    pub special_ready: bool,
    pub special_cooldown: u32,
    pub void_protection: bool,
    pub stats: LifetimeStats,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            level: 1,
            health: BASE_MAX_HEALTH,
            max_health: BASE_MAX_HEALTH,
            experience: 0,
            max_experience: BASE_MAX_EXPERIENCE,
            gold: STARTING_GOLD,
            soul_stones: 0,
            weapon: None,
            armor: None,
            rebirth_count: 0,
            multipliers: Multipliers::default(),
            special_ready: true,
            special_cooldown: 0,
            void_protection: false,
            stats: LifetimeStats::default(),
        }
    }
}

impl Player {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn heal_full(&mut self) {
        self.health = self.max_health;
    }

    /// Damage range of the equipped weapon, or bare hands.
    pub fn damage_range(&self) -> DamageRange {
        self.weapon
            .as_ref()
            .map(|w| w.damage)
            .unwrap_or_else(DamageRange::unarmed)
    }

    /// `floor((base + armor) * defense multiplier)`
    pub fn defense(&self) -> u32 {
        let armor = self.armor.as_ref().map(|a| a.defense).unwrap_or(0);
        ((BASE_DEFENSE + armor) as f64 * self.multipliers.defense).floor() as u32
    }

    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Gold => self.gold,
            Currency::SoulStones => self.soul_stones,
        }
    }

    pub(crate) fn balance_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::Gold => &mut self.gold,
            Currency::SoulStones => &mut self.soul_stones,
        }
    }
}

/// Named one-time flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialUnlocks {
    pub rebirth_ready: bool,
    pub secret_mode: bool,
    pub dev_mode: bool,
}

/// Session metadata saved alongside the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub start_time: i64,
    pub game_version: String,
    pub special_unlocks: SpecialUnlocks,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            start_time: 0,
            game_version: SAVE_VERSION.to_string(),
            special_unlocks: SpecialUnlocks::default(),
        }
    }
}

/// Presentation preferences handed to the renderer. Not saved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub sound_effects: bool,
    pub background_music: bool,
    pub animation_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_effects: true,
            background_music: true,
            animation_speed: 1.0,
        }
    }
}

impl Settings {
    /// Returns a copy with out-of-range values pulled back into bounds.
    pub fn sanitized(self) -> Self {
        let animation_speed = if self.animation_speed.is_finite() {
            self.animation_speed
                .clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED)
        } else {
            1.0
        };
        Self {
            animation_speed,
            ..self
        }
    }
}

/// All mutable game state owned by one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub game_stats: GameStats,
    pub unlocked_achievements: BTreeSet<AchievementId>,
    pub unlocked_easter_eggs: BTreeSet<String>,
    /// The one live enemy (transient, not saved).
    pub current_enemy: Option<Enemy>,
    /// Transient, not saved.
    pub settings: Settings,
}

impl GameState {
    /// Creates a fresh game started at `current_time` (unix seconds).
    pub fn new(current_time: i64) -> Self {
        Self {
            player: Player::default(),
            game_stats: GameStats {
                start_time: current_time,
                ..GameStats::default()
            },
            unlocked_achievements: BTreeSet::new(),
            unlocked_easter_eggs: BTreeSet::new(),
            current_enemy: None,
            settings: Settings::default(),
        }
    }

    /// The live enemy, if there is one with health left.
    pub fn live_enemy(&self) -> Option<&Enemy> {
        self.current_enemy.as_ref().filter(|e| e.is_alive())
    }

    /// Level needed for the next rebirth: 25 + 5 per rebirth so far.
    pub fn rebirth_required_level(&self) -> u32 {
        REBIRTH_BASE_LEVEL + self.player.rebirth_count * REBIRTH_LEVEL_STEP
    }
}
