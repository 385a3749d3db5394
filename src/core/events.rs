//! Events emitted by the engine for the presentation layer.
//!
//! Game logic never touches UI types. Every mutating call collects what
//! happened into a [`TickResult`]; the engine turns those events into log
//! lines and hands them to whoever renders the game.

use crate::achievements::types::AchievementId;
use crate::economy::types::Currency;

/// A single thing that happened during one command or timer step.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // ── Combat ──────────────────────────────────────────────────
    EnemySpawned {
        name: String,
        level: u32,
        health: u32,
    },
    PlayerAttack {
        damage: u32,
        was_crit: bool,
        enemy_name: String,
    },
    EnemyAttack {
        damage: u32,
        enemy_name: String,
    },
    EnemyDefeated {
        enemy_name: String,
        gold: u64,
        experience: u64,
    },
    /// A victory drop. Only a log entry; nothing is added to the player.
    ItemFound {
        item_name: String,
    },
    PlayerDefeated {
        gold_lost: u64,
    },
    AbilityUsed,
    AbilityReady,

    // ── Progression ─────────────────────────────────────────────
    LeveledUp {
        level: u32,
    },
    RebirthAvailable {
        required_level: u32,
    },
    Reborn {
        rebirth_count: u32,
        soul_stones: u64,
    },
    AchievementUnlocked {
        id: AchievementId,
        name: &'static str,
    },

    // ── Economy ─────────────────────────────────────────────────
    Purchased {
        item_name: &'static str,
        cost: u64,
        currency: Currency,
    },

    // ── Secrets ─────────────────────────────────────────────────
    SecretModeActivated,
    DevModeActivated,

    // ── Persistence and settings ────────────────────────────────
    Saved,
    SaveFailed {
        reason: String,
    },
    Loaded,
    LoadFailed {
        reason: String,
    },
    SettingsChanged,
}

impl GameEvent {
    /// Routine saves happen every few seconds and stay out of the log.
    pub fn is_logged(&self) -> bool {
        !matches!(self, GameEvent::Saved)
    }

    /// Human-readable line for the event log.
    pub fn message(&self) -> String {
        match self {
            GameEvent::EnemySpawned { name, level, .. } => {
                format!("A wild {} appears! (Level {})", name, level)
            }
            GameEvent::PlayerAttack {
                damage,
                was_crit: true,
                ..
            } => format!("CRITICAL HIT! {} damage!", damage),
            GameEvent::PlayerAttack { damage, .. } => format!("You hit for {} damage", damage),
            GameEvent::EnemyAttack { damage, enemy_name } => {
                format!("{} hits you for {} damage", enemy_name, damage)
            }
            GameEvent::EnemyDefeated {
                enemy_name,
                gold,
                experience,
            } => format!(
                "VICTORY! {} defeated: +{} gold, +{} XP",
                enemy_name, gold, experience
            ),
            GameEvent::ItemFound { item_name } => format!("Found an item: {}", item_name),
            GameEvent::PlayerDefeated { gold_lost } => {
                format!("Defeated! You lost {} gold", gold_lost)
            }
            GameEvent::AbilityUsed => "Healing used! Health fully restored".to_string(),
            GameEvent::AbilityReady => "Special ability is ready".to_string(),
            GameEvent::LeveledUp { level } => format!("LEVEL UP! You are now level {}", level),
            GameEvent::RebirthAvailable { required_level } => {
                format!("Rebirth available (level {} reached)", required_level)
            }
            GameEvent::Reborn { rebirth_count, .. } => format!(
                "REBIRTH #{}! +10% damage, +5% defense, +15% experience",
                rebirth_count
            ),
            GameEvent::AchievementUnlocked { name, .. } => format!("ACHIEVEMENT: {}!", name),
            GameEvent::Purchased {
                item_name,
                cost,
                currency,
            } => format!("Bought {} for {} {}", item_name, cost, currency),
            GameEvent::SecretModeActivated => "SECRET POWER AWAKENED!".to_string(),
            GameEvent::DevModeActivated => "Developer mode enabled".to_string(),
            GameEvent::Saved => "Game saved".to_string(),
            GameEvent::SaveFailed { reason } => format!("Save failed: {}", reason),
            GameEvent::Loaded => "Game loaded".to_string(),
            GameEvent::LoadFailed { reason } => format!("Load failed: {}", reason),
            GameEvent::SettingsChanged => "Settings saved".to_string(),
        }
    }
}

/// Everything one step produced: events in order, plus whether state
/// changed in a way that must be persisted.
#[derive(Debug, Default)]
pub struct TickResult {
    pub events: Vec<GameEvent>,
    pub save_requested: bool,
}

impl TickResult {
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn request_save(&mut self) {
        self.save_requested = true;
    }

    /// Achievements unlocked during this step, in unlock order.
    pub fn unlocked_achievements(&self) -> impl Iterator<Item = AchievementId> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::AchievementUnlocked { id, .. } => Some(*id),
            _ => None,
        })
    }
}
