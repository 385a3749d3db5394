// Player base stats
pub const BASE_MAX_HEALTH: u32 = 100;
pub const BASE_MAX_EXPERIENCE: u64 = 100;
pub const BASE_DEFENSE: u32 = 2;
pub const STARTING_GOLD: u64 = 50;
pub const UNARMED_DAMAGE_MIN: u32 = 1;
pub const UNARMED_DAMAGE_MAX: u32 = 2;

// Enemy scaling: stats grow by ENEMY_SCALE^(player_level - 1)
pub const ENEMY_SCALE: f64 = 1.15;
pub const ENEMY_LEVEL_PER_PLAYER_LEVEL: f64 = 0.5;

// Combat
pub const CRIT_CHANCE: f64 = 0.15;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const ITEM_DROP_CHANCE: f64 = 0.10;
pub const DEFEAT_GOLD_LOSS_RATIO: f64 = 0.10;
pub const DEFEAT_HEAL_RATIO: f64 = 0.5;
pub const SPECIAL_ABILITY_COOLDOWN_SECONDS: u32 = 30;

// Combat pacing (one-shot delays)
pub const ENEMY_COUNTER_ATTACK_DELAY_MS: u64 = 1_000;
pub const VICTORY_RESPAWN_DELAY_MS: u64 = 2_000;
pub const DEFEAT_RESPAWN_DELAY_MS: u64 = 3_000;

// Periodic ticks
pub const SECOND_TICK_MS: u64 = 1_000;
pub const READINESS_CHECK_INTERVAL_MS: u64 = 5_000;
pub const AUTOSAVE_INTERVAL_MS: u64 = 15_000;

// Leveling
pub const LEVEL_EXP_MULTIPLIER: f64 = 1.25;

// Rebirth: required level = BASE + rebirths * STEP
pub const REBIRTH_BASE_LEVEL: u32 = 25;
pub const REBIRTH_LEVEL_STEP: u32 = 5;
pub const REBIRTH_DAMAGE_BONUS: f64 = 1.10;
pub const REBIRTH_DEFENSE_BONUS: f64 = 1.05;
pub const REBIRTH_EXPERIENCE_BONUS: f64 = 1.15;
pub const REBIRTH_GOLD_BONUS: f64 = 1.05;
pub const REBIRTH_SOUL_STONES: u64 = 1;

// Soul shop upgrades and artifacts
pub const SOUL_UPGRADE_MULTIPLIER: f64 = 1.5;
pub const SOUL_VITALITY_HEALTH_BONUS: u32 = 100;
pub const SOUL_ORB_DAMAGE_BONUS: f64 = 1.2;
pub const SOUL_ORB_EXPERIENCE_BONUS: f64 = 1.3;

// Easter egg: typed code unlocks secret mode once
pub const SECRET_CODE: &str = "voidrunner2024";
pub const SECRET_KEY_BUFFER_LEN: usize = 20;
pub const SECRET_DAMAGE_MULTIPLIER: f64 = 10.0;
pub const SECRET_HEALTH_MULTIPLIER: u32 = 5;
pub const SECRET_EXPERIENCE_MULTIPLIER: f64 = 3.0;

// Developer trigger
pub const DEV_MODE_GOLD: u64 = 100_000;
pub const DEV_MODE_LEVEL: u32 = 100;

// Persistence
pub const SAVE_VERSION: &str = "1.0.0";
pub const SAVE_FILE_NAME: &str = "save.json";
pub const LOG_FILE_NAME: &str = "heropath.log";
pub const DATA_DIR_NAME: &str = ".heropath";
pub const DATA_DIR_ENV: &str = "HEROPATH_HOME";

// Event log shown by renderers
pub const EVENT_LOG_CAPACITY: usize = 50;

// Settings bounds
pub const MIN_ANIMATION_SPEED: f32 = 0.25;
pub const MAX_ANIMATION_SPEED: f32 = 4.0;
